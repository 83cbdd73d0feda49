//! In-memory state of one operator import session.
//!
//! A session holds exactly one payload variant, chosen when it is opened. The
//! preview must be built before the session can be committed, and editing the
//! payload discards any preview built from the previous contents.

use crate::contacts::import::{
    coordinator::ContactImporter, error::ImportError, preview::build_preview, stats::ImportResult,
};
use crate::contacts::types::{ImportMethod, IntermediateContact, RawImportPayload, RowDrafts};

#[derive(Debug)]
pub struct ImportSession {
    payload: RawImportPayload,
    preview: Option<Vec<IntermediateContact>>,
}

impl ImportSession {
    pub fn new(method: ImportMethod) -> Self {
        Self::with_payload(RawImportPayload::empty(method))
    }

    pub fn with_payload(payload: RawImportPayload) -> Self {
        Self {
            payload,
            preview: None,
        }
    }

    pub fn method(&self) -> ImportMethod {
        self.payload.method()
    }

    pub fn payload(&self) -> &RawImportPayload {
        &self.payload
    }

    /// Replace the text of a delimited or structured payload.
    pub fn set_body(&mut self, text: impl Into<String>) -> Result<(), ImportError> {
        match &mut self.payload {
            RawImportPayload::DelimitedText { body }
            | RawImportPayload::StructuredDocument { body } => {
                *body = text.into();
                self.preview = None;
                Ok(())
            }
            RawImportPayload::ManualRows { .. } => {
                Err(ImportError::MethodMismatch("manual rows have no text body"))
            }
        }
    }

    /// Rows of a manual-entry session, for editing.
    pub fn rows_mut(&mut self) -> Result<&mut RowDrafts, ImportError> {
        match &mut self.payload {
            RawImportPayload::ManualRows { rows } => {
                self.preview = None;
                Ok(rows)
            }
            _ => Err(ImportError::MethodMismatch("only manual sessions have rows")),
        }
    }

    /// Parse the payload and keep the result as the session preview.
    pub fn build_preview(&mut self) -> Result<&[IntermediateContact], ImportError> {
        let contacts = build_preview(&self.payload)?;
        Ok(self.preview.insert(contacts).as_slice())
    }

    pub fn preview(&self) -> Option<&[IntermediateContact]> {
        self.preview.as_deref()
    }

    /// Commit the previewed contacts, consuming the session.
    pub async fn commit(self, importer: &ContactImporter) -> Result<ImportResult, ImportError> {
        let contacts = self.preview.ok_or(ImportError::NotPreviewed)?;
        Ok(importer.commit(&contacts).await)
    }
}
