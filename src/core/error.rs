use thiserror::Error;

/// Errors that can occur around an invoice draft.
///
/// The computation model itself never fails; these come from submission,
/// date handling, and preview rendering.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DraftError {
    /// One or more required fields are missing at submission.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Unparseable date or out-of-range day offset.
    #[error("date error: {0}")]
    Date(String),

    /// Preview rendering failed.
    #[error("preview error: {0}")]
    Preview(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "customer.first_name").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}
