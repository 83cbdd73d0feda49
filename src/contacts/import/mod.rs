//! Contact bulk-import pipeline.
//!
//! Imports run in two phases so the operator can check the data before
//! anything is written:
//!
//! 1. **Preview** (`preview`) - Parse the payload with the parser for its format
//!    (`delimited`, `structured` or `manual`) into [`IntermediateContact`]s
//! 2. **Commit** (`coordinator`) - Persist the previewed contacts one at a time
//!    and reconcile the outcome into an [`ImportResult`] (`stats`)
//!
//! `session` keeps the state of one operator session between the two phases and
//! `template` provides the example document for new users.
//!
//! # Error Policy
//!
//! Only an unparsable structured document stops a preview. Short or nameless
//! delimited rows are dropped silently, while nameless structured records are
//! carried through and reported when committed. Store failures are recorded per
//! record and never abort the batch.
//!
//! # Example Usage
//!
//! ```rust,ignore
//! use claimdesk_api::contacts::import::{ContactImporter, ImportSession};
//! use claimdesk_api::contacts::ImportMethod;
//!
//! let mut session = ImportSession::new(ImportMethod::DelimitedText);
//! session.set_body(csv_text)?;
//! let preview = session.build_preview()?;
//! println!("{} contacts ready", preview.len());
//!
//! let result = session.commit(&ContactImporter::new(store)).await?;
//! println!("imported {}, skipped {}", result.imported, result.skipped);
//! ```
//!
//! [`IntermediateContact`]: crate::contacts::IntermediateContact

pub mod coordinator;
pub mod delimited;
pub mod error;
pub mod manual;
pub mod preview;
pub mod session;
pub mod stats;
pub mod structured;
pub mod template;

// Re-export main types
pub use coordinator::ContactImporter;
pub use error::ImportError;
pub use preview::{PreviewRow, annotate_preview, build_preview, build_preview_at};
pub use session::ImportSession;
pub use stats::{FailureKind, ImportFailure, ImportResult};
pub use template::{TEMPLATE_FILE_NAME, contact_template};
