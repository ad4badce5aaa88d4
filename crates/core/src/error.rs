/// Domain-level error type shared by the classifier and dispatch layers.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The inbound payload is malformed or missing required fields.
    ///
    /// Rejected before any enrichment or send is attempted.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An unexpected internal failure with no more specific variant.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for CoreError {
    /// A JSON decode failure is a caller problem, not an internal one.
    fn from(err: serde_json::Error) -> Self {
        CoreError::Validation(format!("Invalid JSON payload: {err}"))
    }
}
