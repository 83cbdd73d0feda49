//! Contact import endpoints: template download, preview and commit.
//!
//! The server keeps no session state between calls. A client previews a payload,
//! shows the returned contacts to the operator and, once confirmed, posts the
//! same contacts back to the commit endpoint.

use crate::config::ImportConfig;
use crate::contacts::SharedContactStore;
use crate::contacts::import::{
    ContactImporter, ImportResult, PreviewRow, annotate_preview, build_preview, contact_template,
};
use crate::contacts::{IntermediateContact, RawImportPayload};
use crate::error::ApiError;
use crate::models::DataResponse;
use rocket::State;
use rocket::http::Header;
use rocket::serde::json::Json;
use rocket_okapi::okapi::schemars::JsonSchema;
use rocket_okapi::openapi;
use serde::{Deserialize, Serialize};

/// Preview of a parsed import payload.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct PreviewResponse {
    /// Contacts exactly as they will be submitted on commit.
    pub contacts: Vec<IntermediateContact>,
    /// The same contacts annotated with phone/email validity.
    pub rows: Vec<PreviewRow>,
    pub total: usize,
}

/// Request body for committing a confirmed preview.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct CommitRequest {
    pub contacts: Vec<IntermediateContact>,
}

/// CSV attachment response.
#[derive(Responder)]
#[response(content_type = "text/csv")]
pub struct CsvDownload {
    body: &'static str,
    disposition: Header<'static>,
}

/// Download the example import document.
#[get("/contacts/import/template")]
pub fn download_template(config: &State<ImportConfig>) -> CsvDownload {
    CsvDownload {
        body: contact_template(),
        disposition: Header::new(
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", config.template_file_name),
        ),
    }
}

/// Parse an import payload without persisting anything.
#[openapi(tag = "Contact Import")]
#[post("/contacts/import/preview", data = "<payload>")]
pub fn preview_import(
    payload: Json<RawImportPayload>,
) -> Result<Json<DataResponse<PreviewResponse>>, ApiError> {
    let contacts = build_preview(&payload)?;
    let rows = annotate_preview(&contacts);

    Ok(Json(DataResponse::new(PreviewResponse {
        total: contacts.len(),
        contacts,
        rows,
    })))
}

/// Persist previewed contacts one at a time and report the reconciliation.
#[openapi(tag = "Contact Import")]
#[post("/contacts/import/commit", data = "<request>")]
pub async fn commit_import(
    request: Json<CommitRequest>,
    store: &State<SharedContactStore>,
) -> Result<Json<DataResponse<ImportResult>>, ApiError> {
    let importer = ContactImporter::new(store.inner().clone());
    let result = importer.commit(&request.contacts).await;
    Ok(Json(DataResponse::new(result)))
}
