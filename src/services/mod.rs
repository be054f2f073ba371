//! Business logic services.

pub mod admin_documents;
pub mod document_store;
