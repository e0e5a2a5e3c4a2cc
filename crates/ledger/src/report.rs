use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{CredentialRecord, CredentialStatus};

/// Characters of the hash shown in reports.
pub const HASH_PREFIX_LEN: usize = 16;

/// Summary of the whole ledger, grouped by employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationReport {
    pub total_credentials: usize,
    pub active_credentials: usize,
    pub ledger_created: String,
    /// Keyed by employee id (ascending); each list is in ledger order and
    /// includes revoked records.
    pub credentials_by_employee: BTreeMap<String, Vec<CredentialSummary>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialSummary {
    pub credential_id: String,
    pub course_name: String,
    pub completion_date: String,
    pub hash_prefix: String,
    pub status: CredentialStatus,
}

impl From<&CredentialRecord> for CredentialSummary {
    fn from(record: &CredentialRecord) -> Self {
        Self {
            credential_id: record.credential_id.clone(),
            course_name: record.data.course_name.clone(),
            completion_date: record.data.completion_date.clone(),
            hash_prefix: record.hash.chars().take(HASH_PREFIX_LEN).collect(),
            status: record.status,
        }
    }
}

pub(crate) fn build_report(records: &[CredentialRecord], ledger_created: &str) -> VerificationReport {
    let mut by_employee: BTreeMap<String, Vec<CredentialSummary>> = BTreeMap::new();
    for record in records {
        by_employee
            .entry(record.data.employee_id.clone())
            .or_default()
            .push(CredentialSummary::from(record));
    }

    VerificationReport {
        total_credentials: records.len(),
        active_credentials: records.iter().filter(|r| r.is_active()).count(),
        ledger_created: ledger_created.to_string(),
        credentials_by_employee: by_employee,
    }
}
