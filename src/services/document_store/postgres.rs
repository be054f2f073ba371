//! PostgreSQL document store backed by sqlx.

use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::{DocumentFilter, DocumentStore, PageQuery};
use crate::errors::AppError;
use crate::models::document::{DocumentOwnerRow, DocumentWithRelations, Recipient};

#[derive(Debug, Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn load_recipients(
        &self,
        document_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<Recipient>>, AppError> {
        let rows = sqlx::query_as::<_, Recipient>(
            "SELECT id, document_id, email, name, token, expired, signed_at, \
             read_status, signing_status, send_status \
             FROM recipients WHERE document_id = ANY($1) ORDER BY id",
        )
        .bind(document_ids)
        .fetch_all(&self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<Recipient>> = HashMap::new();
        for recipient in rows {
            grouped.entry(recipient.document_id).or_default().push(recipient);
        }
        Ok(grouped)
    }
}

/// Escape LIKE wildcards so the term matches as a literal substring.
pub(crate) fn contains_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for ch in term.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped.push('%');
    escaped
}

/// WHERE clause for the filter; binds start at `$1` when present.
fn where_clause(filter: &DocumentFilter) -> &'static str {
    match filter {
        DocumentFilter::All => "",
        DocumentFilter::TitleContains(_) => "WHERE d.title ILIKE $1 ESCAPE '\\'",
    }
}

fn filter_bind(filter: &DocumentFilter) -> Option<String> {
    match filter {
        DocumentFilter::All => None,
        DocumentFilter::TitleContains(term) => Some(contains_pattern(term)),
    }
}

pub(crate) fn page_sql(query: &PageQuery) -> String {
    let (owner_columns, owner_join) = if query.include.owner {
        (
            "u.id AS owner_id, u.name AS owner_name, u.email AS owner_email",
            "JOIN users u ON u.id = d.user_id",
        )
    } else {
        (
            "NULL::uuid AS owner_id, NULL::text AS owner_name, NULL::text AS owner_email",
            "",
        )
    };

    let where_clause = where_clause(&query.filter);
    let filter_params = if where_clause.is_empty() { 0u32 } else { 1 };
    let limit_param = filter_params + 1;
    let offset_param = filter_params + 2;

    format!(
        "SELECT d.id, d.user_id, d.title, d.status, d.created_at, d.updated_at, d.completed_at, \
         {owner_columns} \
         FROM documents d {owner_join} {where_clause} \
         ORDER BY {} LIMIT ${limit_param} OFFSET ${offset_param}",
        query.order.to_sql()
    )
}

pub(crate) fn count_sql(filter: &DocumentFilter) -> String {
    format!("SELECT COUNT(*) FROM documents d {}", where_clause(filter))
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<DocumentWithRelations>, AppError> {
        let sql = page_sql(query);
        let mut data_query = sqlx::query_as::<_, DocumentOwnerRow>(&sql);
        if let Some(pattern) = filter_bind(&query.filter) {
            data_query = data_query.bind(pattern);
        }
        let rows = data_query
            .bind(query.take)
            .bind(query.skip)
            .fetch_all(&self.pool)
            .await?;

        let mut documents: Vec<DocumentWithRelations> = rows.into_iter().map(Into::into).collect();

        if query.include.recipients && !documents.is_empty() {
            let ids: Vec<Uuid> = documents.iter().map(|d| d.document.id).collect();
            let mut recipients = self.load_recipients(&ids).await?;
            for doc in &mut documents {
                doc.recipients = recipients.remove(&doc.document.id).unwrap_or_default();
            }
        }

        Ok(documents)
    }

    async fn count(&self, filter: &DocumentFilter) -> Result<i64, AppError> {
        let sql = count_sql(filter);
        let mut count_query = sqlx::query_scalar::<_, i64>(&sql);
        if let Some(pattern) = filter_bind(filter) {
            count_query = count_query.bind(pattern);
        }
        Ok(count_query.fetch_one(&self.pool).await?)
    }
}
