//! Document model with its owner projection and recipients.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq, PartialOrd, Ord)]
#[sqlx(type_name = "document_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DocumentStatus {
    Draft,
    Pending,
    Completed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "read_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReadStatus {
    NotOpened,
    Opened,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "signing_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SigningStatus {
    NotSigned,
    Signed,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, sqlx::Type, PartialEq, Eq)]
#[sqlx(type_name = "send_status", rename_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SendStatus {
    NotSent,
    Sent,
}

/// Document row as listed on the admin dashboard (the stored body is not projected).
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Restricted projection of the user owning a document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct OwnerSummary {
    pub id: Uuid,
    pub name: Option<String>,
    pub email: String,
}

/// Full recipient record attached to a document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Recipient {
    pub id: Uuid,
    pub document_id: Uuid,
    pub email: String,
    pub name: String,
    pub token: String,
    pub expired: Option<DateTime<Utc>>,
    pub signed_at: Option<DateTime<Utc>>,
    pub read_status: ReadStatus,
    pub signing_status: SigningStatus,
    pub send_status: SendStatus,
}

/// Document enriched with the relations requested by the listing.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DocumentWithRelations {
    #[serde(flatten)]
    pub document: Document,
    pub owner: Option<OwnerSummary>,
    pub recipients: Vec<Recipient>,
}

/// Flat row produced by the documents ⨝ users join.
#[derive(Debug, Clone, FromRow)]
pub struct DocumentOwnerRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub owner_id: Option<Uuid>,
    pub owner_name: Option<String>,
    pub owner_email: Option<String>,
}

impl From<DocumentOwnerRow> for DocumentWithRelations {
    fn from(row: DocumentOwnerRow) -> Self {
        let owner = match (row.owner_id, row.owner_email) {
            (Some(id), Some(email)) => Some(OwnerSummary {
                id,
                name: row.owner_name,
                email,
            }),
            _ => None,
        };

        Self {
            document: Document {
                id: row.id,
                user_id: row.user_id,
                title: row.title,
                status: row.status,
                created_at: row.created_at,
                updated_at: row.updated_at,
                completed_at: row.completed_at,
            },
            owner,
            recipients: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row(with_owner: bool) -> DocumentOwnerRow {
        let owner_id = Uuid::new_v4();
        DocumentOwnerRow {
            id: Uuid::new_v4(),
            user_id: owner_id,
            title: "Lease agreement".to_string(),
            status: DocumentStatus::Pending,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            completed_at: None,
            owner_id: with_owner.then_some(owner_id),
            owner_name: with_owner.then(|| "Ada".to_string()),
            owner_email: with_owner.then(|| "ada@example.com".to_string()),
        }
    }

    #[test]
    fn document_status_serialization() {
        let json = serde_json::to_string(&DocumentStatus::Completed).unwrap();
        assert_eq!(json, "\"COMPLETED\"");
        let json = serde_json::to_string(&SigningStatus::NotSigned).unwrap();
        assert_eq!(json, "\"NOT_SIGNED\"");
    }

    #[test]
    fn joined_row_converts_with_owner() {
        let row = sample_row(true);
        let user_id = row.user_id;
        let doc: DocumentWithRelations = row.into();
        let owner = doc.owner.expect("owner projected");
        assert_eq!(owner.id, user_id);
        assert_eq!(owner.email, "ada@example.com");
        assert!(doc.recipients.is_empty());
    }

    #[test]
    fn joined_row_without_owner_columns() {
        let doc: DocumentWithRelations = sample_row(false).into();
        assert!(doc.owner.is_none());
    }

    #[test]
    fn listing_row_flattens_document_fields() {
        let doc: DocumentWithRelations = sample_row(true).into();
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["title"], "Lease agreement");
        assert_eq!(json["status"], "PENDING");
        assert_eq!(json["owner"]["name"], "Ada");
        assert!(json["recipients"].as_array().unwrap().is_empty());
        assert!(json.get("document").is_none());
    }
}
