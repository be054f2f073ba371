//! Pagination primitives and the paged result envelope.

use serde::{Deserialize, Serialize};

/// Pagination query parameters.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    /// Default items per page.
    pub const DEFAULT_PER_PAGE: i64 = 10;

    pub fn new(page: i64, per_page: i64) -> Self {
        Self {
            page: Some(page),
            per_page: Some(per_page),
        }
    }

    /// Page size as requested. No upper bound is applied here.
    pub fn limit(&self) -> i64 {
        self.per_page.unwrap_or(Self::DEFAULT_PER_PAGE)
    }

    /// Rows to skip. Pages below 1 floor at offset 0; huge pages saturate
    /// instead of wrapping, so they read past the end.
    pub fn offset(&self) -> i64 {
        let page = self.page.unwrap_or(1);
        page.saturating_sub(1).max(0).saturating_mul(self.limit())
    }

    pub fn current_page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }
}

/// `ceil(total / per_page)`; `None` when `per_page` is 0 and the quotient is not finite.
pub fn total_pages(total: i64, per_page: i64) -> Option<i64> {
    if per_page == 0 {
        return None;
    }
    Some((total as f64 / per_page as f64).ceil() as i64)
}

/// Paged result envelope returned by list endpoints.
#[derive(Debug, Clone, Serialize)]
pub struct PagedResult<T: Serialize> {
    pub data: Vec<T>,
    pub count: i64,
    pub current_page: i64,
    pub per_page: i64,
    pub total_pages: Option<i64>,
}

impl<T: Serialize> PagedResult<T> {
    pub fn new(data: Vec<T>, count: i64, pagination: &Pagination) -> Self {
        let per_page = pagination.limit();
        Self {
            data,
            count,
            current_page: pagination.current_page(),
            per_page,
            total_pages: total_pages(count, per_page),
        }
    }
}
