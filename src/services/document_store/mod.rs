//! Storage seam for the document listing: a filtered page fetch and a filtered count.

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::document::DocumentWithRelations;
use crate::models::ordering::OrderBy;

pub mod memory;
pub mod postgres;

pub use memory::InMemoryDocumentStore;
pub use postgres::PgDocumentStore;

/// Condition restricting which documents are eligible for fetch and count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DocumentFilter {
    #[default]
    All,
    /// Case-insensitive substring match on the title.
    TitleContains(String),
}

impl DocumentFilter {
    /// Empty and missing terms impose no restriction.
    pub fn from_term(term: Option<&str>) -> Self {
        match term {
            None | Some("") => Self::All,
            Some(term) => Self::TitleContains(term.to_string()),
        }
    }

    pub fn matches_title(&self, title: &str) -> bool {
        match self {
            Self::All => true,
            Self::TitleContains(term) => title.to_lowercase().contains(&term.to_lowercase()),
        }
    }
}

/// Relations to load alongside each document row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Include {
    /// Owner projected to id, name and email.
    pub owner: bool,
    /// Every recipient record of the document.
    pub recipients: bool,
}

impl Include {
    pub fn owner_and_recipients() -> Self {
        Self {
            owner: true,
            recipients: true,
        }
    }
}

/// Fully resolved page request handed to a store.
#[derive(Debug, Clone, PartialEq)]
pub struct PageQuery {
    pub filter: DocumentFilter,
    pub skip: i64,
    pub take: i64,
    pub order: OrderBy,
    pub include: Include,
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<DocumentWithRelations>, AppError>;

    async fn count(&self, filter: &DocumentFilter) -> Result<i64, AppError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_missing_terms_do_not_filter() {
        assert_eq!(DocumentFilter::from_term(None), DocumentFilter::All);
        assert_eq!(DocumentFilter::from_term(Some("")), DocumentFilter::All);
    }

    #[test]
    fn whitespace_term_still_filters() {
        assert_eq!(
            DocumentFilter::from_term(Some(" ")),
            DocumentFilter::TitleContains(" ".to_string())
        );
    }

    #[test]
    fn title_match_ignores_case() {
        let filter = DocumentFilter::from_term(Some("invoice"));
        assert!(filter.matches_title("INVOICE #42"));
        assert!(filter.matches_title("March Invoice"));
        assert!(!filter.matches_title("Receipt"));
        assert!(DocumentFilter::All.matches_title("anything"));
    }
}
