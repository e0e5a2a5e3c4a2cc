//! # SkillChain Ledger
//!
//! An append-only store of course-completion credentials. Each credential's
//! content is canonicalized (sorted-key JSON) and hashed with SHA-256; the
//! hash is what [`CredentialLedger::verify`] matches against.
//!
//! ## Core Features
//!
//! - **Sequential ids**: `CRED_0001`, `CRED_0002`, ... assigned by position.
//!   A reopened ledger resumes the sequence.
//! - **Whole-document persistence**: every mutation rewrites the ledger
//!   through a [`LedgerBackend`]. The file backend writes a temp file and
//!   renames it; a failed write rolls the in-memory change back.
//! - **Revocation**: records are never deleted, only marked revoked. Revoked
//!   records no longer verify.
//! - **Reports**: [`VerificationReport`] groups summaries by employee.
//!
//! ## Example Usage
//!
//! ```
//! use ledger::{CredentialClaim, CredentialLedger, LedgerConfig};
//!
//! let mut ledger = CredentialLedger::open(LedgerConfig::in_memory()).unwrap();
//! let claim = CredentialClaim::new("EMP001", "TC001", "Python for Data Analysis", "2024-03-15");
//!
//! let record = ledger.issue(&claim).unwrap();
//! assert_eq!(record.credential_id, "CRED_0001");
//!
//! let result = ledger.verify(&claim).unwrap();
//! assert!(result.verified);
//! assert_eq!(result.credential_id.as_deref(), Some("CRED_0001"));
//! ```

mod backend;
mod config;
mod error;
mod ledger;
mod record;
mod report;

pub use crate::backend::{BackendConfig, FileBackend, InMemoryBackend, LedgerBackend};
pub use crate::config::{LedgerConfig, DEFAULT_DESCRIPTION, DEFAULT_LEDGER_PATH};
pub use crate::error::LedgerError;
pub use crate::ledger::{
    CredentialLedger, LedgerMetadata, LedgerOrigin, VerificationResult, LEDGER_FORMAT_VERSION,
    MSG_NOT_FOUND, MSG_VERIFIED,
};
pub use crate::record::{
    credential_id, parse_sequence, CredentialClaim, CredentialContent, CredentialRecord,
    CredentialStatus, DEFAULT_ISSUER,
};
pub use crate::report::{CredentialSummary, VerificationReport, HASH_PREFIX_LEN};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn file_ledger_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("credential_ledger.json");

        {
            let mut ledger = CredentialLedger::open(LedgerConfig::with_path(&path)).unwrap();
            assert_eq!(ledger.origin(), LedgerOrigin::Initialized);
            assert!(!path.exists());
            ledger
                .issue(&CredentialClaim::new("EMP001", "TC001", "Python", "2024-03-15"))
                .unwrap();
            assert!(path.exists());
        }

        let mut ledger = CredentialLedger::open(LedgerConfig::with_path(&path)).unwrap();
        assert_eq!(ledger.origin(), LedgerOrigin::Loaded);
        assert_eq!(ledger.len(), 1);
        let next = ledger
            .issue(&CredentialClaim::new("EMP002", "TC002", "SQL", "2024-05-20"))
            .unwrap();
        assert_eq!(next.credential_id, "CRED_0002");
    }

    #[test]
    fn corrupt_file_is_left_in_place() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("credential_ledger.json");
        std::fs::write(&path, "not a ledger").unwrap();

        let err = CredentialLedger::open(LedgerConfig::with_path(&path)).unwrap_err();
        assert!(matches!(err, LedgerError::Corrupt(_)));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not a ledger");
    }
}
