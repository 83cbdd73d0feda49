//! Reconciliation result of a commit.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Message recorded for records lacking a name or any way to reach them.
pub const MISSING_FIELDS_MESSAGE: &str = "Skipped contact: Missing required fields";

/// Why a record was skipped during commit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// No name, or neither phone nor email; the store was not called.
    MissingRequiredFields,
    /// The store returned no record.
    Rejected,
    /// The store call failed.
    StoreError,
}

/// Structured description of one skipped record.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportFailure {
    /// Position of the record in the committed list.
    pub index: usize,
    pub name: String,
    pub kind: FailureKind,
    /// Same text as the matching entry in [`ImportResult::errors`].
    pub message: String,
}

/// Outcome of committing a previewed contact list.
///
/// Every submitted record increments exactly one of `imported` and `skipped`,
/// and each skipped record contributes one entry to both `errors` and `failures`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ImportResult {
    pub imported: usize,
    pub skipped: usize,
    pub errors: Vec<String>,
    pub failures: Vec<ImportFailure>,
}

impl ImportResult {
    pub fn record_imported(&mut self) {
        self.imported += 1;
    }

    pub fn record_skipped(&mut self, failure: ImportFailure) {
        self.skipped += 1;
        self.errors.push(failure.message.clone());
        self.failures.push(failure);
    }

    /// Number of records classified so far.
    pub fn total(&self) -> usize {
        self.imported + self.skipped
    }
}
