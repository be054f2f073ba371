//! Database models and DTOs for the admin document listing.

pub mod document;
pub mod ordering;
pub mod pagination;
