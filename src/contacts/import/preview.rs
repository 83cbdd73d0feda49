//! Preview construction: parse the payload and annotate rows for display.
//!
//! Building a preview has no side effects; nothing is persisted until the
//! previewed contacts are handed to [`ContactImporter`](super::ContactImporter).

use crate::contacts::import::{
    delimited::parse_delimited, error::ImportError, manual::parse_manual_rows,
    structured::parse_structured,
};
use crate::contacts::types::{IntermediateContact, RawImportPayload};
use crate::contacts::validation::{format_phone_number, is_valid_email, is_valid_phone};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Preview row with validator verdicts for the operator.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PreviewRow {
    pub contact: IntermediateContact,
    pub phone_valid: bool,
    pub email_valid: bool,
    /// `+91 XXXXX XXXXX` for valid numbers, otherwise the phone as entered.
    pub formatted_phone: String,
}

/// Parse `payload` with the parser for its format, stamping records with `now`.
pub fn build_preview_at(
    payload: &RawImportPayload,
    now: DateTime<Utc>,
) -> Result<Vec<IntermediateContact>, ImportError> {
    let contacts = match payload {
        RawImportPayload::DelimitedText { body } => parse_delimited(body, now),
        RawImportPayload::StructuredDocument { body } => parse_structured(body, now)?,
        RawImportPayload::ManualRows { rows } => parse_manual_rows(rows, now),
    };

    log::debug!(
        "built {:?} preview with {} contacts",
        payload.method(),
        contacts.len()
    );
    Ok(contacts)
}

/// Parse `payload` with the parser for its format.
///
/// Only a malformed structured document is fatal; other malformed input is
/// dropped by the individual parsers.
pub fn build_preview(payload: &RawImportPayload) -> Result<Vec<IntermediateContact>, ImportError> {
    build_preview_at(payload, Utc::now())
}

/// Attach phone/email validity to each previewed contact.
pub fn annotate_preview(contacts: &[IntermediateContact]) -> Vec<PreviewRow> {
    contacts
        .iter()
        .map(|contact| PreviewRow {
            phone_valid: is_valid_phone(&contact.phone),
            email_valid: is_valid_email(&contact.email),
            formatted_phone: format_phone_number(&contact.phone),
            contact: contact.clone(),
        })
        .collect()
}
