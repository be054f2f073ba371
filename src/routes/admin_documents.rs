//! Admin dashboard document routes.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use validator::Validate;

use crate::errors::{ApiResponse, AppError};
use crate::models::document::DocumentWithRelations;
use crate::models::ordering::{OrderBy, OrderColumn, SortDirection};
use crate::models::pagination::PagedResult;
use crate::services::admin_documents::{self as documents_service, FindDocumentsOptions};
use crate::AppState;

/// Query string accepted by the document listing.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ListDocumentsQuery {
    pub term: Option<String>,
    pub page: Option<i64>,
    #[validate(range(min = 1, message = "per_page must be at least 1"))]
    pub per_page: Option<i64>,
    pub order_by: Option<String>,
    pub direction: Option<String>,
}

impl TryFrom<ListDocumentsQuery> for FindDocumentsOptions {
    type Error = AppError;

    fn try_from(query: ListDocumentsQuery) -> Result<Self, Self::Error> {
        query.validate()?;

        // Column and direction default independently of each other.
        let order_by = if query.order_by.is_none() && query.direction.is_none() {
            None
        } else {
            let defaults = OrderBy::default();
            let column = match query.order_by.as_deref() {
                Some(name) => name.parse::<OrderColumn>()?,
                None => defaults.column,
            };
            let direction = match query.direction.as_deref() {
                Some(name) => name.parse::<SortDirection>()?,
                None => defaults.direction,
            };
            Some(OrderBy::new(column, direction))
        };

        Ok(FindDocumentsOptions {
            term: query.term,
            page: query.page,
            per_page: query.per_page,
            order_by,
        })
    }
}

/// GET /api/v1/admin/documents — list documents with search, ordering, and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ListDocumentsQuery>,
) -> Result<Json<ApiResponse<PagedResult<DocumentWithRelations>>>, AppError> {
    let options = FindDocumentsOptions::try_from(query)?;
    let result = documents_service::find_documents(state.documents.as_ref(), &options).await?;
    Ok(ApiResponse::success(result))
}
