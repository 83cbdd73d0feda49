use crate::contacts::ContactRole;
use chrono::{DateTime, Utc};
use rocket_okapi::okapi::schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ===== Contact Models =====

/// Contact as persisted by the store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StoredContact {
    pub id: Uuid,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: ContactRole,
    pub organization: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

// ===== Response Envelopes =====

/// Standard `{ "data": ... }` envelope for API responses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
