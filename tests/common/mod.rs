//! Shared fixtures for the listing tests.

#![allow(dead_code)]

use chrono::{DateTime, Duration, TimeZone, Utc};
use docsadmin::models::document::{
    Document, DocumentStatus, OwnerSummary, ReadStatus, Recipient, SendStatus, SigningStatus,
};
use docsadmin::services::document_store::InMemoryDocumentStore;
use uuid::Uuid;

pub const TOTAL_DOCUMENTS: usize = 25;

/// Titles containing "invoice" in mixed case, at fixed positions.
pub const INVOICE_TITLES: [&str; 3] = ["Invoice March", "overdue INVOICE", "invoice-draft"];

pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub fn title_for(index: usize) -> String {
    match index {
        4 => INVOICE_TITLES[0].to_string(),
        11 => INVOICE_TITLES[1].to_string(),
        19 => INVOICE_TITLES[2].to_string(),
        i => format!("Document {i:02}"),
    }
}

/// 25 documents with strictly increasing `created_at`, two owners, and
/// `index % 3` recipients each.
pub fn seeded_store() -> InMemoryDocumentStore {
    let owners = [
        OwnerSummary {
            id: Uuid::new_v4(),
            name: Some("Grace Hopper".to_string()),
            email: "grace@example.com".to_string(),
        },
        OwnerSummary {
            id: Uuid::new_v4(),
            name: None,
            email: "anon@example.com".to_string(),
        },
    ];

    let mut store = InMemoryDocumentStore::new();
    for index in 0..TOTAL_DOCUMENTS {
        let id = Uuid::new_v4();
        let created_at = base_time() + Duration::hours(index as i64);
        store.add_document(Document {
            id,
            user_id: owners[index % owners.len()].id,
            title: title_for(index),
            status: DocumentStatus::Pending,
            created_at,
            updated_at: created_at,
            completed_at: None,
        });

        for n in 0..(index % 3) {
            store.add_recipient(Recipient {
                id: Uuid::new_v4(),
                document_id: id,
                email: format!("signer{n}@example.com"),
                name: format!("Signer {n}"),
                token: format!("tok-{index}-{n}"),
                expired: None,
                signed_at: None,
                read_status: ReadStatus::NotOpened,
                signing_status: SigningStatus::NotSigned,
                send_status: SendStatus::Sent,
            });
        }
    }

    for owner in owners {
        store.add_user(owner);
    }
    store
}
