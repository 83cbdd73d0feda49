//! Shared contact types used by the import pipeline.

use chrono::{DateTime, Utc};
use schemars::{JsonSchema, r#gen::SchemaGenerator, schema::Schema};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Role a contact plays in the claim collection process.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ContactRole {
    PayerContact,
    HospitalContact,
    InsuranceAgent,
    TpaContact,
    #[default]
    Other,
}

#[derive(Debug, Error)]
#[error("unknown contact role `{0}`")]
pub struct UnknownRole(pub String);

impl ContactRole {
    pub const ALL: [ContactRole; 5] = [
        ContactRole::PayerContact,
        ContactRole::HospitalContact,
        ContactRole::InsuranceAgent,
        ContactRole::TpaContact,
        ContactRole::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactRole::PayerContact => "payer_contact",
            ContactRole::HospitalContact => "hospital_contact",
            ContactRole::InsuranceAgent => "insurance_agent",
            ContactRole::TpaContact => "tpa_contact",
            ContactRole::Other => "other",
        }
    }

    /// Parse a role from free-form import text.
    ///
    /// Blank values and values outside the enumeration become [`ContactRole::Other`].
    pub fn from_import_text(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return ContactRole::Other;
        }

        trimmed.parse().unwrap_or_else(|err: UnknownRole| {
            log::debug!("{}, importing as other", err);
            ContactRole::Other
        })
    }
}

impl FromStr for ContactRole {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_lowercase();
        ContactRole::ALL
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(value.to_string()))
    }
}

impl fmt::Display for ContactRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scratch row edited by the operator in the manual-entry form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RowDraft {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: ContactRole,
    #[serde(default)]
    pub organization: String,
}

/// Errors raised when editing the manual-entry rows.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowDraftError {
    #[error("at least one row is required")]
    LastRow,
    #[error("row {index} does not exist (rows: {len})")]
    OutOfRange { index: usize, len: usize },
}

/// Manual-entry rows; never empty.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(try_from = "Vec<RowDraft>", into = "Vec<RowDraft>")]
pub struct RowDrafts {
    rows: Vec<RowDraft>,
}

impl RowDrafts {
    /// Start with a single blank row.
    pub fn new() -> Self {
        Self {
            rows: vec![RowDraft::default()],
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Removal is only permitted while more than one row remains.
    pub fn can_remove(&self) -> bool {
        self.rows.len() > 1
    }

    pub fn push(&mut self, row: RowDraft) {
        self.rows.push(row);
    }

    /// Append a blank row and return its index.
    pub fn add_blank(&mut self) -> usize {
        self.rows.push(RowDraft::default());
        self.rows.len() - 1
    }

    pub fn get(&self, index: usize) -> Option<&RowDraft> {
        self.rows.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut RowDraft> {
        self.rows.get_mut(index)
    }

    /// Remove the row at `index`. The last remaining row cannot be removed.
    pub fn remove(&mut self, index: usize) -> Result<RowDraft, RowDraftError> {
        if index >= self.rows.len() {
            return Err(RowDraftError::OutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        if !self.can_remove() {
            return Err(RowDraftError::LastRow);
        }
        Ok(self.rows.remove(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RowDraft> {
        self.rows.iter()
    }
}

impl Default for RowDrafts {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<RowDraft>> for RowDrafts {
    type Error = RowDraftError;

    fn try_from(rows: Vec<RowDraft>) -> Result<Self, Self::Error> {
        if rows.is_empty() {
            return Err(RowDraftError::LastRow);
        }
        Ok(Self { rows })
    }
}

impl From<RowDrafts> for Vec<RowDraft> {
    fn from(drafts: RowDrafts) -> Self {
        drafts.rows
    }
}

impl<'a> IntoIterator for &'a RowDrafts {
    type Item = &'a RowDraft;
    type IntoIter = std::slice::Iter<'a, RowDraft>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl JsonSchema for RowDrafts {
    fn schema_name() -> String {
        "RowDrafts".to_string()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        <Vec<RowDraft>>::json_schema(generator)
    }
}

/// Contact produced by a parser and shown in the preview before commit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IntermediateContact {
    /// Empty until the store assigns one; structured documents may carry a placeholder.
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: ContactRole,
    #[serde(default)]
    pub organization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl IntermediateContact {
    /// Label used to identify the record in reconciliation messages.
    pub fn label(&self) -> &str {
        [&self.name, &self.phone, &self.email]
            .into_iter()
            .map(|value| value.trim())
            .find(|value| !value.is_empty())
            .unwrap_or("(unnamed)")
    }
}

/// Input formats an operator can choose for an import session.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ImportMethod {
    DelimitedText,
    StructuredDocument,
    ManualRows,
}

impl FromStr for ImportMethod {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "csv" | "delimited" | "delimited_text" => Ok(ImportMethod::DelimitedText),
            "json" | "structured" | "structured_document" => Ok(ImportMethod::StructuredDocument),
            "manual" | "manual_rows" => Ok(ImportMethod::ManualRows),
            other => Err(format!(
                "unsupported import format '{other}'. Use 'delimited', 'structured' or 'manual'."
            )),
        }
    }
}

/// Raw operator input for one import session.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum RawImportPayload {
    DelimitedText { body: String },
    StructuredDocument { body: String },
    ManualRows { rows: RowDrafts },
}

impl RawImportPayload {
    /// Empty payload for the chosen method.
    pub fn empty(method: ImportMethod) -> Self {
        match method {
            ImportMethod::DelimitedText => RawImportPayload::DelimitedText {
                body: String::new(),
            },
            ImportMethod::StructuredDocument => RawImportPayload::StructuredDocument {
                body: String::new(),
            },
            ImportMethod::ManualRows => RawImportPayload::ManualRows {
                rows: RowDrafts::new(),
            },
        }
    }

    pub fn method(&self) -> ImportMethod {
        match self {
            RawImportPayload::DelimitedText { .. } => ImportMethod::DelimitedText,
            RawImportPayload::StructuredDocument { .. } => ImportMethod::StructuredDocument,
            RawImportPayload::ManualRows { .. } => ImportMethod::ManualRows,
        }
    }
}

/// Fields handed to the store when persisting a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub role: ContactRole,
    pub organization: String,
    pub notes: String,
}

impl From<&IntermediateContact> for NewContact {
    fn from(contact: &IntermediateContact) -> Self {
        Self {
            name: contact.name.clone(),
            phone: contact.phone.clone(),
            email: contact.email.clone(),
            role: contact.role,
            organization: contact.organization.clone(),
            notes: contact.notes.clone().unwrap_or_default(),
        }
    }
}
