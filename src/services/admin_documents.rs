//! Admin dashboard document listing: search, ordering and pagination over a document store.

use serde::Deserialize;

use crate::errors::AppError;
use crate::models::document::DocumentWithRelations;
use crate::models::ordering::OrderBy;
use crate::models::pagination::{PagedResult, Pagination};
use crate::services::document_store::{DocumentFilter, DocumentStore, Include, PageQuery};

/// Search, ordering and pagination options for [`find_documents`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FindDocumentsOptions {
    pub term: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub order_by: Option<OrderBy>,
}

impl FindDocumentsOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: i64, per_page: i64) -> Self {
        self.page = Some(page);
        self.per_page = Some(per_page);
        self
    }

    pub fn order_by(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

/// List documents with their owner summary and recipients.
///
/// The page fetch and the total count run concurrently against the same
/// filter. Store failures propagate unchanged. `per_page` is not validated:
/// a page size of 0 yields `total_pages: None`.
pub async fn find_documents<S>(
    store: &S,
    options: &FindDocumentsOptions,
) -> Result<PagedResult<DocumentWithRelations>, AppError>
where
    S: DocumentStore + ?Sized,
{
    let order = options.order_by.unwrap_or_default();
    let filter = DocumentFilter::from_term(options.term.as_deref());
    let pagination = options.pagination();

    let query = PageQuery {
        filter,
        skip: pagination.offset(),
        take: pagination.limit(),
        order,
        include: Include::owner_and_recipients(),
    };

    tracing::debug!(
        page = pagination.current_page(),
        per_page = query.take,
        skip = query.skip,
        order_by = %order.column,
        direction = order.direction.as_sql(),
        has_term = !matches!(query.filter, DocumentFilter::All),
        "Listing documents"
    );

    let (data, count) = tokio::try_join!(store.fetch_page(&query), store.count(&query.filter))?;

    tracing::debug!(count, returned = data.len(), "Listed documents");

    Ok(PagedResult::new(data, count, &pagination))
}
