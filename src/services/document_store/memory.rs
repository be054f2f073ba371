//! In-memory document store for tests and local development.

use std::cmp::Ordering;
use std::collections::HashMap;

use async_trait::async_trait;
use uuid::Uuid;

use super::{DocumentFilter, DocumentStore, PageQuery};
use crate::errors::AppError;
use crate::models::document::{Document, DocumentWithRelations, OwnerSummary, Recipient};
use crate::models::ordering::{OrderBy, OrderColumn, SortDirection};

/// Mirrors the Postgres store: same filter, ordering (nulls included) and include semantics.
/// Titles compare bytewise, matching the `C` collation of `documents.title`.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDocumentStore {
    users: HashMap<Uuid, OwnerSummary>,
    documents: Vec<Document>,
    recipients: Vec<Recipient>,
}

impl InMemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_user(&mut self, user: OwnerSummary) {
        self.users.insert(user.id, user);
    }

    pub fn add_document(&mut self, document: Document) {
        self.documents.push(document);
    }

    pub fn add_recipient(&mut self, recipient: Recipient) {
        self.recipients.push(recipient);
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn recipients_of(&self, document_id: Uuid) -> Vec<Recipient> {
        let mut recipients: Vec<Recipient> = self
            .recipients
            .iter()
            .filter(|r| r.document_id == document_id)
            .cloned()
            .collect();
        recipients.sort_by_key(|r| r.id);
        recipients
    }
}

/// Nulls sort after every value, as Postgres does for ascending order.
fn nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (None, None) => Ordering::Equal,
    }
}

fn compare(a: &Document, b: &Document, order: &OrderBy) -> Ordering {
    let ordering = match order.column {
        OrderColumn::Id => a.id.cmp(&b.id),
        OrderColumn::UserId => a.user_id.cmp(&b.user_id),
        OrderColumn::Title => a.title.cmp(&b.title),
        OrderColumn::Status => a.status.cmp(&b.status),
        OrderColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        OrderColumn::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        OrderColumn::CompletedAt => nulls_last(&a.completed_at, &b.completed_at),
    };
    match order.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

#[async_trait]
impl DocumentStore for InMemoryDocumentStore {
    async fn fetch_page(&self, query: &PageQuery) -> Result<Vec<DocumentWithRelations>, AppError> {
        if query.skip < 0 {
            return Err(AppError::Validation("OFFSET must not be negative".to_string()));
        }
        if query.take < 0 {
            return Err(AppError::Validation("LIMIT must not be negative".to_string()));
        }

        let mut rows: Vec<&Document> = self
            .documents
            .iter()
            .filter(|d| query.filter.matches_title(&d.title))
            .collect();
        rows.sort_by(|a, b| compare(a, b, &query.order));

        let page = rows
            .into_iter()
            .skip(query.skip as usize)
            .take(query.take as usize)
            .map(|document| DocumentWithRelations {
                owner: if query.include.owner {
                    self.users.get(&document.user_id).cloned()
                } else {
                    None
                },
                recipients: if query.include.recipients {
                    self.recipients_of(document.id)
                } else {
                    Vec::new()
                },
                document: document.clone(),
            })
            .collect();

        Ok(page)
    }

    async fn count(&self, filter: &DocumentFilter) -> Result<i64, AppError> {
        let matching = self
            .documents
            .iter()
            .filter(|d| filter.matches_title(&d.title))
            .count();
        Ok(matching as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::document::{DocumentStatus, ReadStatus, SendStatus, SigningStatus};
    use crate::services::document_store::Include;
    use chrono::{Duration, TimeZone, Utc};

    fn store() -> InMemoryDocumentStore {
        let owner = OwnerSummary {
            id: Uuid::new_v4(),
            name: Some("Owner".to_string()),
            email: "owner@example.com".to_string(),
        };
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut store = InMemoryDocumentStore::new();
        for (i, (title, completed)) in [("Bravo", true), ("alpha", false), ("Charlie", true)]
            .into_iter()
            .enumerate()
        {
            let id = Uuid::new_v4();
            store.add_document(Document {
                id,
                user_id: owner.id,
                title: title.to_string(),
                status: DocumentStatus::Draft,
                created_at: base + Duration::days(i as i64),
                updated_at: base + Duration::days(i as i64),
                completed_at: completed.then(|| base + Duration::days(10 - i as i64)),
            });
            store.add_recipient(Recipient {
                id: Uuid::new_v4(),
                document_id: id,
                email: format!("signer{i}@example.com"),
                name: format!("Signer {i}"),
                token: format!("token-{i}"),
                expired: None,
                signed_at: None,
                read_status: ReadStatus::NotOpened,
                signing_status: SigningStatus::NotSigned,
                send_status: SendStatus::NotSent,
            });
        }
        store.add_user(owner);
        store
    }

    fn page(order: OrderBy, include: Include) -> PageQuery {
        PageQuery {
            filter: DocumentFilter::All,
            skip: 0,
            take: 10,
            order,
            include,
        }
    }

    fn titles(rows: &[DocumentWithRelations]) -> Vec<&str> {
        rows.iter().map(|r| r.document.title.as_str()).collect()
    }

    #[test]
    fn completed_at_nulls_follow_postgres_placement() {
        let store = store();
        let asc = tokio_test::block_on(store.fetch_page(&page(
            OrderBy::new(OrderColumn::CompletedAt, SortDirection::Asc),
            Include::default(),
        )))
        .unwrap();
        assert_eq!(titles(&asc), vec!["Charlie", "Bravo", "alpha"]);

        let desc = tokio_test::block_on(store.fetch_page(&page(
            OrderBy::new(OrderColumn::CompletedAt, SortDirection::Desc),
            Include::default(),
        )))
        .unwrap();
        assert_eq!(titles(&desc), vec!["alpha", "Bravo", "Charlie"]);
    }

    #[test]
    fn titles_sort_bytewise() {
        let store = store();
        let asc = tokio_test::block_on(store.fetch_page(&page(
            OrderBy::new(OrderColumn::Title, SortDirection::Asc),
            Include::default(),
        )))
        .unwrap();
        assert_eq!(titles(&asc), vec!["Bravo", "Charlie", "alpha"]);
    }

    #[test]
    fn include_controls_relations() {
        let store = store();
        let bare = tokio_test::block_on(store.fetch_page(&page(OrderBy::default(), Include::default())))
            .unwrap();
        assert!(bare.iter().all(|r| r.owner.is_none() && r.recipients.is_empty()));

        let full = tokio_test::block_on(
            store.fetch_page(&page(OrderBy::default(), Include::owner_and_recipients())),
        )
        .unwrap();
        assert!(full.iter().all(|r| r.owner.is_some() && r.recipients.len() == 1));
        assert!(full
            .iter()
            .all(|r| r.recipients[0].document_id == r.document.id));
    }

    #[test]
    fn negative_offset_is_refused() {
        let store = store();
        let mut query = page(OrderBy::default(), Include::default());
        query.skip = -10;
        let err = tokio_test::block_on(store.fetch_page(&query)).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
    }

    #[test]
    fn count_applies_filter() {
        let store = store();
        let all = tokio_test::block_on(store.count(&DocumentFilter::All)).unwrap();
        assert_eq!(all, 3);
        let filtered = tokio_test::block_on(
            store.count(&DocumentFilter::TitleContains("ALPHA".to_string())),
        )
        .unwrap();
        assert_eq!(filtered, 1);
    }
}
