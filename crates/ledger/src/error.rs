use std::io;

use canonical::CanonicalError;
use thiserror::Error;

/// Errors surfaced by the credential ledger.
///
/// A failed verification is not an error; see
/// [`VerificationResult`](crate::VerificationResult).
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Configuration is inconsistent (empty issuer, empty path).
    #[error("invalid ledger config: {0}")]
    InvalidConfig(String),
    /// The storage backend refused a read or write.
    #[error("backend error: {0}")]
    Backend(String),
    /// Filesystem failure while reading or replacing the ledger file.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    /// The persisted ledger exists but cannot be trusted. Never reinitialized over.
    #[error("corrupt ledger: {0}")]
    Corrupt(String),
    /// Encoding the ledger for storage failed.
    #[error("encode error: {0}")]
    Encode(String),
    /// Content could not be canonicalized for hashing.
    #[error("canonical error: {0}")]
    Canonical(#[from] CanonicalError),
    #[error("unknown credential: {0}")]
    UnknownCredential(String),
    #[error("credential already revoked: {0}")]
    AlreadyRevoked(String),
}

impl LedgerError {
    pub fn backend<E: std::fmt::Display>(err: E) -> Self {
        Self::Backend(err.to_string())
    }

    pub fn corrupt<E: std::fmt::Display>(err: E) -> Self {
        Self::Corrupt(err.to_string())
    }
}
