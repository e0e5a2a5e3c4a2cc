use canonical::CanonicalEncoding;
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::backend::LedgerBackend;
use crate::record::{credential_id, parse_sequence};
use crate::report::{build_report, VerificationReport};
use crate::{
    CredentialClaim, CredentialRecord, CredentialStatus, LedgerConfig, LedgerError,
};

/// Format version written into new ledgers.
pub const LEDGER_FORMAT_VERSION: &str = "1.0";

pub const MSG_VERIFIED: &str = "Credential verified successfully";
pub const MSG_NOT_FOUND: &str = "Credential not found in ledger";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerMetadata {
    pub created_at: String,
    pub version: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct LedgerDocument {
    credentials: Vec<CredentialRecord>,
    metadata: LedgerMetadata,
}

/// How [`CredentialLedger::open`] reached the ready state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerOrigin {
    /// An existing document was read and validated.
    Loaded,
    /// No document existed; a fresh one was created in memory.
    Initialized,
}

/// Outcome of [`CredentialLedger::verify`]. "Not found" is a normal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verified: bool,
    /// Hash recomputed from the caller's claim, echoed either way.
    pub hash: String,
    pub credential_id: Option<String>,
    pub timestamp: Option<String>,
    pub message: String,
}

/// Append-only credential store.
///
/// Every mutation rewrites the whole document through the backend; if that
/// write fails the in-memory state is rolled back so memory and storage never
/// disagree. Mutating methods take `&mut self`, so a ledger has exactly one
/// writer at a time.
pub struct CredentialLedger {
    backend: Box<dyn LedgerBackend>,
    config: LedgerConfig,
    document: LedgerDocument,
    origin: LedgerOrigin,
}

impl std::fmt::Debug for CredentialLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialLedger")
            .field("backend", &self.backend.describe())
            .field("records", &self.document.credentials.len())
            .field("origin", &self.origin)
            .finish()
    }
}

impl CredentialLedger {
    /// Build the configured backend and load (or initialize) the ledger.
    ///
    /// # Errors
    ///
    /// [`LedgerError::Corrupt`] when a stored document exists but is not a
    /// valid ledger. The stored bytes are left alone.
    pub fn open(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        let backend = config.backend.build()?;
        Self::with_backend(backend, config)
    }

    /// Like [`open`](Self::open) but with a caller-supplied backend;
    /// `config.backend` is ignored.
    pub fn with_backend<B>(backend: B, config: LedgerConfig) -> Result<Self, LedgerError>
    where
        B: LedgerBackend + 'static,
    {
        config.validate()?;
        let backend: Box<dyn LedgerBackend> = Box::new(backend);

        let (document, origin) = match backend.load()? {
            Some(bytes) => {
                let document = decode_document(&bytes)?;
                info!(
                    location = %backend.describe(),
                    records = document.credentials.len(),
                    "credential ledger loaded"
                );
                (document, LedgerOrigin::Loaded)
            }
            None => {
                info!(location = %backend.describe(), "initializing empty credential ledger");
                let document = LedgerDocument {
                    credentials: Vec::new(),
                    metadata: LedgerMetadata {
                        created_at: now_timestamp(),
                        version: LEDGER_FORMAT_VERSION.to_string(),
                        description: config.description.clone(),
                    },
                };
                (document, LedgerOrigin::Initialized)
            }
        };

        Ok(Self {
            backend,
            config,
            document,
            origin,
        })
    }

    /// Hash the claim, append an active record and persist the ledger.
    ///
    /// On a persistence failure the record is removed again and the error
    /// is returned.
    pub fn issue(&mut self, claim: &CredentialClaim) -> Result<CredentialRecord, LedgerError> {
        let data = claim.resolve(&self.config.default_issuer);
        let hash = data.canonical_hash(self.config.encoding)?;
        let record = CredentialRecord {
            credential_id: credential_id(self.document.credentials.len() + 1),
            timestamp: now_timestamp(),
            data,
            hash,
            status: CredentialStatus::Active,
        };

        self.document.credentials.push(record.clone());
        if let Err(err) = self.persist() {
            self.document.credentials.pop();
            warn!(credential_id = %record.credential_id, error = %err, "credential issue rolled back");
            return Err(err);
        }

        info!(
            credential_id = %record.credential_id,
            employee_id = %record.data.employee_id,
            course_id = %record.data.course_id,
            "credential issued"
        );
        Ok(record)
    }

    /// Look for an active record whose hash equals the claim's hash.
    ///
    /// Records are scanned in ledger order and revoked ones are skipped, so
    /// content that was revoked and issued again verifies via the newer record.
    pub fn verify(&self, claim: &CredentialClaim) -> Result<VerificationResult, LedgerError> {
        let hash = claim
            .resolve(&self.config.default_issuer)
            .canonical_hash(self.config.encoding)?;

        let found = self
            .document
            .credentials
            .iter()
            .find(|r| r.is_active() && r.hash == hash);

        Ok(match found {
            Some(record) => VerificationResult {
                verified: true,
                hash,
                credential_id: Some(record.credential_id.clone()),
                timestamp: Some(record.timestamp.clone()),
                message: MSG_VERIFIED.to_string(),
            },
            None => VerificationResult {
                verified: false,
                hash,
                credential_id: None,
                timestamp: None,
                message: MSG_NOT_FOUND.to_string(),
            },
        })
    }

    /// Active records for `employee_id`, in ledger order.
    pub fn credentials_for(&self, employee_id: &str) -> Vec<&CredentialRecord> {
        self.document
            .credentials
            .iter()
            .filter(|r| r.is_active() && r.data.employee_id == employee_id)
            .collect()
    }

    /// Mark an active record as revoked and persist.
    pub fn revoke(&mut self, credential_id: &str) -> Result<&CredentialRecord, LedgerError> {
        let idx = self
            .document
            .credentials
            .iter()
            .position(|r| r.credential_id == credential_id)
            .ok_or_else(|| LedgerError::UnknownCredential(credential_id.to_string()))?;

        if !self.document.credentials[idx].is_active() {
            return Err(LedgerError::AlreadyRevoked(credential_id.to_string()));
        }

        self.document.credentials[idx].status = CredentialStatus::Revoked;
        if let Err(err) = self.persist() {
            self.document.credentials[idx].status = CredentialStatus::Active;
            warn!(credential_id, error = %err, "credential revocation rolled back");
            return Err(err);
        }

        info!(credential_id, "credential revoked");
        Ok(&self.document.credentials[idx])
    }

    /// Record with this id, whatever its status.
    pub fn get(&self, credential_id: &str) -> Option<&CredentialRecord> {
        // Ids are positional, so try the direct slot before scanning.
        parse_sequence(credential_id)
            .and_then(|seq| seq.checked_sub(1))
            .and_then(|idx| self.document.credentials.get(idx))
            .filter(|r| r.credential_id == credential_id)
    }

    pub fn records(&self) -> &[CredentialRecord] {
        &self.document.credentials
    }

    pub fn len(&self) -> usize {
        self.document.credentials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.document.credentials.is_empty()
    }

    pub fn metadata(&self) -> &LedgerMetadata {
        &self.document.metadata
    }

    pub fn origin(&self) -> LedgerOrigin {
        self.origin
    }

    pub fn encoding(&self) -> CanonicalEncoding {
        self.config.encoding
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    /// Totals plus per-employee summaries.
    pub fn verification_report(&self) -> VerificationReport {
        build_report(&self.document.credentials, &self.document.metadata.created_at)
    }

    /// Ids of records whose stored hash no longer matches their content.
    pub fn tampered_records(&self) -> Result<Vec<&str>, LedgerError> {
        let mut tampered = Vec::new();
        for record in &self.document.credentials {
            if !record.hash_matches(self.config.encoding)? {
                tampered.push(record.credential_id.as_str());
            }
        }
        Ok(tampered)
    }

    fn persist(&self) -> Result<(), LedgerError> {
        let bytes = serde_json::to_vec_pretty(&self.document)
            .map_err(|err| LedgerError::Encode(err.to_string()))?;
        self.backend.store(&bytes)
    }
}

fn decode_document(bytes: &[u8]) -> Result<LedgerDocument, LedgerError> {
    let document: LedgerDocument = serde_json::from_slice(bytes).map_err(LedgerError::corrupt)?;
    for (idx, record) in document.credentials.iter().enumerate() {
        let expected = credential_id(idx + 1);
        if record.credential_id != expected {
            return Err(LedgerError::Corrupt(format!(
                "record {} has id '{}', expected '{}'",
                idx, record.credential_id, expected
            )));
        }
    }
    Ok(document)
}

/// UTC, RFC 3339, microsecond precision, `Z` suffix.
fn now_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}
