use thiserror::Error;

/// Errors that can occur while producing canonical bytes.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CanonicalError {
    /// The value could not be represented as JSON (e.g. a map with non-string keys).
    #[error("value is not representable as canonical JSON: {0}")]
    Serialize(String),
}

impl From<serde_json::Error> for CanonicalError {
    fn from(err: serde_json::Error) -> Self {
        CanonicalError::Serialize(err.to_string())
    }
}
