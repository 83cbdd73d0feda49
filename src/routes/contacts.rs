//! Read access to stored contacts.

use crate::contacts::SharedContactStore;
use crate::error::ApiError;
use crate::models::{DataResponse, StoredContact};
use rocket::State;
use rocket::serde::json::Json;
use rocket_okapi::openapi;

const DEFAULT_LIMIT: i64 = 50;
const MAX_LIMIT: i64 = 500;

/// List stored contacts, newest first.
#[openapi(tag = "Contacts")]
#[get("/contacts?<limit>&<offset>")]
pub async fn list_contacts(
    limit: Option<i64>,
    offset: Option<i64>,
    store: &State<SharedContactStore>,
) -> Result<Json<DataResponse<Vec<StoredContact>>>, ApiError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::BadRequest(format!(
            "limit must be between 1 and {MAX_LIMIT}"
        )));
    }

    let offset = offset.unwrap_or(0);
    if offset < 0 {
        return Err(ApiError::BadRequest(
            "offset must not be negative".to_string(),
        ));
    }

    let contacts = store.list(limit, offset).await?;
    Ok(Json(DataResponse::new(contacts)))
}
