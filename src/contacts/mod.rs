//! Contact records of the claim collection desk and their bulk import.
//!
//! - **`types`**: roles, manual-entry rows, import payloads and the
//!   intermediate contact shared by every parser
//! - **`validation`**: phone and email checks used to annotate previews
//! - **`import`**: the preview-then-commit import pipeline
//! - **`store`**: the storage collaborator trait and its Postgres implementation

pub mod import;
pub mod store;
pub mod types;
pub mod validation;

pub use store::{ContactStore, PgContactStore, SharedContactStore, StoreError};
pub use types::{
    ContactRole, ImportMethod, IntermediateContact, NewContact, RawImportPayload, RowDraft,
    RowDraftError, RowDrafts,
};
