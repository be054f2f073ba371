//! Closed set of sortable document columns and sort directions.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Errors raised when an ordering names an unknown column or direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum OrderingError {
    #[error("Unknown order column: {0}")]
    UnknownOrderColumn(String),

    #[error("Unknown sort direction: {0}")]
    UnknownDirection(String),
}

impl From<OrderingError> for AppError {
    fn from(err: OrderingError) -> Self {
        AppError::Validation(err.to_string())
    }
}

/// Document attribute a listing can be ordered by. The stored body is never sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderColumn {
    Id,
    UserId,
    Title,
    Status,
    CreatedAt,
    UpdatedAt,
    CompletedAt,
}

impl OrderColumn {
    pub const ALL: [OrderColumn; 7] = [
        OrderColumn::Id,
        OrderColumn::UserId,
        OrderColumn::Title,
        OrderColumn::Status,
        OrderColumn::CreatedAt,
        OrderColumn::UpdatedAt,
        OrderColumn::CompletedAt,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::UserId => "user_id",
            Self::Title => "title",
            Self::Status => "status",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
            Self::CompletedAt => "completed_at",
        }
    }

    /// Qualified SQL expression for the `documents d` alias.
    pub fn sql_expr(&self) -> &'static str {
        match self {
            Self::Id => "d.id",
            Self::UserId => "d.user_id",
            Self::Title => "d.title",
            Self::Status => "d.status",
            Self::CreatedAt => "d.created_at",
            Self::UpdatedAt => "d.updated_at",
            Self::CompletedAt => "d.completed_at",
        }
    }
}

impl fmt::Display for OrderColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderColumn {
    type Err = OrderingError;

    /// Accepts snake_case names and the camelCase spelling the admin UI sends.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "user_id" | "userId" => Ok(Self::UserId),
            "title" => Ok(Self::Title),
            "status" => Ok(Self::Status),
            "created_at" | "createdAt" => Ok(Self::CreatedAt),
            "updated_at" | "updatedAt" => Ok(Self::UpdatedAt),
            "completed_at" | "completedAt" => Ok(Self::CompletedAt),
            other => Err(OrderingError::UnknownOrderColumn(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortDirection {
    type Err = OrderingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(OrderingError::UnknownDirection(s.to_string())),
        }
    }
}

/// Column plus direction controlling result sequencing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub column: OrderColumn,
    pub direction: SortDirection,
}

impl OrderBy {
    pub fn new(column: OrderColumn, direction: SortDirection) -> Self {
        Self { column, direction }
    }

    /// `ORDER BY` body rendered only from the closed enums above.
    pub fn to_sql(&self) -> String {
        format!("{} {}", self.column.sql_expr(), self.direction.as_sql())
    }
}

impl Default for OrderBy {
    fn default() -> Self {
        Self {
            column: OrderColumn::CreatedAt,
            direction: SortDirection::Desc,
        }
    }
}
