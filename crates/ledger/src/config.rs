use std::path::PathBuf;

use canonical::CanonicalEncoding;
use serde::{Deserialize, Serialize};

use crate::{BackendConfig, LedgerError, DEFAULT_ISSUER};

pub const DEFAULT_LEDGER_PATH: &str = "data/credential_ledger.json";
pub const DEFAULT_DESCRIPTION: &str = "SkillChain DX Credential Ledger";

/// Runtime configuration for a [`CredentialLedger`](crate::CredentialLedger).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    pub backend: BackendConfig,
    /// Issuer written when a claim omits one.
    pub default_issuer: String,
    /// Canonical JSON layout fed to SHA-256. Ledger-wide; changing it on an
    /// existing ledger makes earlier credentials unverifiable.
    pub encoding: CanonicalEncoding,
    /// Free text stored in the ledger metadata of a newly created ledger.
    pub description: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::File {
                path: PathBuf::from(DEFAULT_LEDGER_PATH),
            },
            default_issuer: DEFAULT_ISSUER.to_string(),
            encoding: CanonicalEncoding::Compact,
            description: DEFAULT_DESCRIPTION.to_string(),
        }
    }
}

impl LedgerConfig {
    /// In-memory ledger with every other setting at its default.
    pub fn in_memory() -> Self {
        Self {
            backend: BackendConfig::InMemory,
            ..Self::default()
        }
    }

    pub fn with_path<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            backend: BackendConfig::file(path),
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.default_issuer.trim().is_empty() {
            return Err(LedgerError::InvalidConfig(
                "default_issuer must not be empty".into(),
            ));
        }
        if let BackendConfig::File { path } = &self.backend {
            if path.as_os_str().is_empty() {
                return Err(LedgerError::InvalidConfig(
                    "backend path must not be empty".into(),
                ));
            }
        }
        Ok(())
    }
}
