use thiserror::Error;

/// Errors that stop an import session outright.
///
/// Per-record problems never show up here; they are collected in
/// [`ImportResult`](super::ImportResult) instead.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The structured document could not be parsed, or is not a list of contacts.
    #[error("{0}")]
    Format(String),
    #[error("a preview must be built before committing")]
    NotPreviewed,
    #[error("payload does not match the selected import method ({0})")]
    MethodMismatch(&'static str),
}

impl ImportError {
    pub fn format(message: impl Into<String>) -> Self {
        ImportError::Format(message.into())
    }
}
