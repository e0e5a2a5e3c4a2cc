use thiserror::Error;

/// Errors surfaced by embedders and the similarity helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SemanticError {
    /// Configuration is inconsistent (unknown mode or tier, empty model name).
    #[error("invalid semantic config: {0}")]
    InvalidConfig(String),
    /// Two vectors that must be compared have different lengths.
    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
    /// The embedding capability failed for one input.
    #[error("inference failure: {0}")]
    Inference(String),
}
