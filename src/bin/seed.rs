//! Seed script for development — populates a fresh database with sample documents.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires the `DATABASE_URL` environment variable (reads .env).

use sha2::{Digest, Sha256};
use sqlx::PgPool;
use uuid::Uuid;

const USERS: [(&str, &str); 3] = [
    ("Admin User", "admin@docsadmin.local"),
    ("Grace Hopper", "grace@docsadmin.local"),
    ("Alan Turing", "alan@docsadmin.local"),
];

const TITLES: [&str; 12] = [
    "Invoice 2024-001",
    "Mutual NDA",
    "Employment Contract",
    "INVOICE 2024-002",
    "Lease Agreement",
    "Statement of Work",
    "Consulting invoice",
    "Board Resolution",
    "Vendor Onboarding Form",
    "Purchase Order 7731",
    "Service Level Agreement",
    "Offer Letter",
];

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")?;
    let pool = docsadmin::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    docsadmin::db::migrate(&pool).await?;

    println!("=== Document Admin Seed Script ===");

    let user_ids = seed_users(&pool).await?;
    seed_documents(&pool, &user_ids).await?;

    println!("\n=== Seed complete! ===");
    Ok(())
}

async fn seed_users(pool: &PgPool) -> anyhow::Result<Vec<Uuid>> {
    let mut ids = Vec::with_capacity(USERS.len());
    for (name, email) in USERS {
        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO users (name, email) VALUES ($1, $2)
             ON CONFLICT (email) DO UPDATE SET name = EXCLUDED.name
             RETURNING id",
        )
        .bind(name)
        .bind(email)
        .fetch_one(pool)
        .await?;
        ids.push(id);
    }

    println!("[done] Upserted {} users", ids.len());
    Ok(ids)
}

/// Deterministic signing token for a recipient.
fn recipient_token(document_id: Uuid, email: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(document_id.as_bytes());
    hasher.update(email.as_bytes());
    hex::encode(hasher.finalize())
}

async fn seed_documents(pool: &PgPool, user_ids: &[Uuid]) -> anyhow::Result<()> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents")
        .fetch_one(pool)
        .await?;

    if count > 0 {
        println!("[skip] Documents already exist ({count})");
        return Ok(());
    }

    let statuses = ["DRAFT", "PENDING", "COMPLETED"];

    for (i, title) in TITLES.iter().enumerate() {
        let owner = user_ids[i % user_ids.len()];
        let status = statuses[i % statuses.len()];

        let document_id: Uuid = sqlx::query_scalar(
            "INSERT INTO documents (user_id, title, status, created_at, updated_at, completed_at)
             VALUES ($1, $2, $3::document_status,
                     NOW() - make_interval(days => $4), NOW() - make_interval(days => $4),
                     CASE WHEN $3 = 'COMPLETED' THEN NOW() ELSE NULL END)
             RETURNING id",
        )
        .bind(owner)
        .bind(title)
        .bind(status)
        .bind(i as i32)
        .fetch_one(pool)
        .await?;

        for &(name, email) in USERS.iter().filter(|&&(_, email)| !email.starts_with("admin")) {
            let signed = status == "COMPLETED";
            sqlx::query(
                "INSERT INTO recipients (document_id, email, name, token, signed_at,
                     read_status, signing_status, send_status)
                 VALUES ($1, $2, $3, $4,
                     CASE WHEN $5 THEN NOW() ELSE NULL END,
                     CASE WHEN $5 THEN 'OPENED'::read_status ELSE 'NOT_OPENED'::read_status END,
                     CASE WHEN $5 THEN 'SIGNED'::signing_status ELSE 'NOT_SIGNED'::signing_status END,
                     CASE WHEN $6 THEN 'SENT'::send_status ELSE 'NOT_SENT'::send_status END)",
            )
            .bind(document_id)
            .bind(email)
            .bind(name)
            .bind(recipient_token(document_id, email))
            .bind(signed)
            .bind(status != "DRAFT")
            .execute(pool)
            .await?;
        }
    }

    println!("[done] Created {} documents with recipients", TITLES.len());
    Ok(())
}
