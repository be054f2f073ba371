pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod routes;
pub mod services;

use std::sync::Arc;

use sqlx::PgPool;

use crate::services::document_store::{DocumentStore, PgDocumentStore};

/// Shared application state passed to all Axum handlers.
#[derive(Clone)]
pub struct AppState {
    pub documents: Arc<dyn DocumentStore>,
    /// Present when the store is Postgres-backed; used by the readiness probe.
    pub db: Option<PgPool>,
    pub config: config::AppConfig,
}

impl AppState {
    pub fn with_postgres(pool: PgPool, config: config::AppConfig) -> Self {
        Self {
            documents: Arc::new(PgDocumentStore::new(pool.clone())),
            db: Some(pool),
            config,
        }
    }

    pub fn with_store(documents: Arc<dyn DocumentStore>, config: config::AppConfig) -> Self {
        Self {
            documents,
            db: None,
            config,
        }
    }
}
