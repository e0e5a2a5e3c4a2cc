use canonical::{hash_canonical, CanonicalEncoding};
use serde::{Deserialize, Serialize};

use crate::LedgerError;

/// Issuer recorded when a claim does not name one.
pub const DEFAULT_ISSUER: &str = "SkillChain DX Platform";

const ID_PREFIX: &str = "CRED_";

/// Ledger identifier for 1-based sequence number `seq`: `CRED_0001`,
/// `CRED_0042`, `CRED_12345`. Widens past four digits instead of wrapping.
pub fn credential_id(seq: usize) -> String {
    format!("{ID_PREFIX}{seq:04}")
}

/// Inverse of [`credential_id`]. Returns `None` for anything
/// `credential_id` would not have produced.
pub fn parse_sequence(id: &str) -> Option<usize> {
    let digits = id.strip_prefix(ID_PREFIX)?;
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let seq: usize = digits.parse().ok()?;
    (credential_id(seq) == id).then_some(seq)
}

/// Caller-facing description of a completed course.
///
/// `issuer` stays optional here; the ledger fills in its configured default
/// the same way for [`issue`](crate::CredentialLedger::issue) and
/// [`verify`](crate::CredentialLedger::verify).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialClaim {
    pub employee_id: String,
    pub course_id: String,
    pub course_name: String,
    pub completion_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<String>,
}

impl CredentialClaim {
    pub fn new(
        employee_id: impl Into<String>,
        course_id: impl Into<String>,
        course_name: impl Into<String>,
        completion_date: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            course_id: course_id.into(),
            course_name: course_name.into(),
            completion_date: completion_date.into(),
            issuer: None,
        }
    }

    pub fn with_issuer(mut self, issuer: impl Into<String>) -> Self {
        self.issuer = Some(issuer.into());
        self
    }

    /// Fix the issuer, falling back to `default_issuer`.
    pub fn resolve(&self, default_issuer: &str) -> CredentialContent {
        CredentialContent {
            employee_id: self.employee_id.clone(),
            course_id: self.course_id.clone(),
            course_name: self.course_name.clone(),
            completion_date: self.completion_date.clone(),
            issuer: self
                .issuer
                .clone()
                .unwrap_or_else(|| default_issuer.to_string()),
        }
    }
}

/// The five hashed fields of a credential. Stored as `data` in the ledger file.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CredentialContent {
    pub employee_id: String,
    pub course_id: String,
    pub course_name: String,
    pub completion_date: String,
    pub issuer: String,
}

impl CredentialContent {
    /// SHA-256 hex of the key-sorted JSON form of these five fields.
    pub fn canonical_hash(&self, encoding: CanonicalEncoding) -> Result<String, LedgerError> {
        Ok(hash_canonical(self, encoding)?)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CredentialStatus {
    #[default]
    Active,
    Revoked,
}

impl CredentialStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialStatus::Active => "active",
            CredentialStatus::Revoked => "revoked",
        }
    }
}

/// One issued credential. Only `status` ever changes after issuance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialRecord {
    pub credential_id: String,
    /// ISO-8601 issuance time, kept verbatim from the ledger file.
    pub timestamp: String,
    pub data: CredentialContent,
    pub hash: String,
    pub status: CredentialStatus,
}

impl CredentialRecord {
    pub fn is_active(&self) -> bool {
        self.status == CredentialStatus::Active
    }

    /// Recompute the content hash and compare it with the stored one.
    pub fn hash_matches(&self, encoding: CanonicalEncoding) -> Result<bool, LedgerError> {
        Ok(self.data.canonical_hash(encoding)? == self.hash)
    }
}
