//! Storage collaborator for contacts.
//!
//! The import pipeline only depends on [`ContactStore`]. The service wires in
//! [`PgContactStore`]; tests use the in-memory store from `test_support`.

use crate::contacts::types::{ContactRole, NewContact};
use crate::models::StoredContact;
use chrono::{DateTime, Utc};
use rocket_db_pools::sqlx::{self, FromRow, PgPool};
use std::sync::Arc;
use thiserror::Error;
use uuid::Uuid;

/// Errors raised by a contact store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("{0}")]
    Unavailable(String),
}

/// Persistent contact storage.
#[rocket::async_trait]
pub trait ContactStore: Send + Sync {
    /// Persist a contact, assigning its id and creation time.
    ///
    /// `Ok(None)` means the store declined to create the record.
    async fn create(&self, contact: NewContact) -> Result<Option<StoredContact>, StoreError>;

    /// Stored contacts, newest first.
    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StoredContact>, StoreError>;
}

/// Store handle shared through Rocket managed state.
pub type SharedContactStore = Arc<dyn ContactStore>;

#[derive(FromRow)]
struct ContactRow {
    id: Uuid,
    name: String,
    phone: String,
    email: String,
    role: String,
    organization: String,
    notes: String,
    created_at: DateTime<Utc>,
}

impl From<ContactRow> for StoredContact {
    fn from(row: ContactRow) -> Self {
        StoredContact {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            role: ContactRole::from_import_text(&row.role),
            organization: row.organization,
            notes: row.notes,
            created_at: row.created_at,
        }
    }
}

/// Postgres-backed contact store.
#[derive(Clone)]
pub struct PgContactStore {
    pool: PgPool,
}

impl PgContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[rocket::async_trait]
impl ContactStore for PgContactStore {
    async fn create(&self, contact: NewContact) -> Result<Option<StoredContact>, StoreError> {
        let row: Option<ContactRow> = sqlx::query_as(
            r#"INSERT INTO contacts (id, name, phone, email, role, organization, notes)
               VALUES ($1, $2, $3, $4, $5, $6, $7)
               RETURNING id, name, phone, email, role, organization, notes, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(&contact.name)
        .bind(&contact.phone)
        .bind(&contact.email)
        .bind(contact.role.as_str())
        .bind(&contact.organization)
        .bind(&contact.notes)
        .fetch_optional(&self.pool)
        .await?;

        if let Some(row) = &row {
            log::trace!("stored contact {} ({})", row.id, row.name);
        }
        Ok(row.map(StoredContact::from))
    }

    async fn list(&self, limit: i64, offset: i64) -> Result<Vec<StoredContact>, StoreError> {
        let rows: Vec<ContactRow> = sqlx::query_as(
            r#"SELECT id, name, phone, email, role, organization, notes, created_at
               FROM contacts
               ORDER BY created_at DESC, name ASC
               LIMIT $1 OFFSET $2"#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(StoredContact::from).collect())
    }
}
