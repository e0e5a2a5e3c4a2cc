use skillchain::{
    CanonicalEncoding, CredentialClaim, CredentialLedger, CredentialStatus, LedgerConfig,
    LedgerError,
};
use tempfile::tempdir;

fn claim(emp: &str, course: &str, name: &str, date: &str) -> CredentialClaim {
    CredentialClaim::new(emp, course, name, date)
}

fn reference_claims() -> Vec<CredentialClaim> {
    vec![
        claim("EMP001", "TC001", "Python for Data Analysis", "2024-03-15"),
        claim("EMP001", "TC002", "Advanced SQL", "2024-05-20"),
        claim("EMP003", "TC003", "ML Specialization", "2024-06-10"),
        claim("EMP005", "TC022", "Tableau Advanced", "2024-08-01"),
    ]
}

#[test]
fn issue_four_then_verify_genuine_and_forged() -> Result<(), LedgerError> {
    let dir = tempdir()?;
    let mut ledger = CredentialLedger::open(LedgerConfig::with_path(
        dir.path().join("credential_ledger.json"),
    ))?;
    assert!(ledger.is_empty());

    let issued: Vec<_> = reference_claims()
        .iter()
        .map(|c| ledger.issue(c))
        .collect::<Result<_, _>>()?;
    let ids: Vec<_> = issued.iter().map(|r| r.credential_id.as_str()).collect();
    assert_eq!(ids, vec!["CRED_0001", "CRED_0002", "CRED_0003", "CRED_0004"]);

    let genuine = ledger.verify(&reference_claims()[0])?;
    assert!(genuine.verified);
    assert_eq!(genuine.credential_id.as_deref(), Some("CRED_0001"));
    assert_eq!(genuine.hash, issued[0].hash);

    let forged = ledger.verify(&claim("EMP001", "TC999", "Fake Course", "2024-01-01"))?;
    assert!(!forged.verified);
    assert!(forged.message.contains("not found"));
    assert_eq!(forged.hash.len(), 64);
    assert!(issued.iter().all(|r| r.hash != forged.hash));
    Ok(())
}

#[test]
fn sequence_resumes_after_reload_from_disk() -> Result<(), LedgerError> {
    let dir = tempdir()?;
    let path = dir.path().join("ledger").join("credentials.json");

    {
        let mut ledger = CredentialLedger::open(LedgerConfig::with_path(&path))?;
        for c in &reference_claims()[..2] {
            ledger.issue(c)?;
        }
    }

    let mut ledger = CredentialLedger::open(LedgerConfig::with_path(&path))?;
    assert_eq!(ledger.len(), 2);
    for c in &reference_claims()[2..] {
        ledger.issue(c)?;
    }
    let ids: Vec<_> = ledger.records().iter().map(|r| r.credential_id.clone()).collect();
    assert_eq!(ids, vec!["CRED_0001", "CRED_0002", "CRED_0003", "CRED_0004"]);

    // Every record survives a second reload intact.
    let reloaded = CredentialLedger::open(LedgerConfig::with_path(&path))?;
    assert_eq!(reloaded.records(), ledger.records());
    assert!(reloaded.tampered_records()?.is_empty());
    Ok(())
}

#[test]
fn ledger_file_has_documented_shape() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("credential_ledger.json");
    let mut ledger = CredentialLedger::open(LedgerConfig::with_path(&path))?;
    ledger.issue(&reference_claims()[0])?;

    let text = std::fs::read_to_string(&path)?;
    let doc: serde_json::Value = serde_json::from_str(&text)?;
    let record = &doc["credentials"][0];
    assert_eq!(record["credential_id"], "CRED_0001");
    assert_eq!(record["status"], "active");
    assert_eq!(record["data"]["issuer"], "SkillChain DX Platform");
    assert_eq!(record["data"]["course_name"], "Python for Data Analysis");
    assert_eq!(record["hash"].as_str().map(str::len), Some(64));
    assert_eq!(doc["metadata"]["version"], "1.0");
    assert_eq!(doc["metadata"]["description"], "SkillChain DX Credential Ledger");
    assert!(text.contains("\n  \"metadata\": {"));
    Ok(())
}

#[test]
fn revocation_and_reissue() -> Result<(), LedgerError> {
    let mut ledger = CredentialLedger::open(LedgerConfig::in_memory())?;
    for c in &reference_claims() {
        ledger.issue(c)?;
    }

    ledger.revoke("CRED_0002")?;
    assert_eq!(ledger.get("CRED_0002").map(|r| r.status), Some(CredentialStatus::Revoked));
    assert!(!ledger.verify(&reference_claims()[1])?.verified);
    assert_eq!(ledger.credentials_for("EMP001").len(), 1);

    let reissued = ledger.issue(&reference_claims()[1])?;
    assert_eq!(reissued.credential_id, "CRED_0005");
    let result = ledger.verify(&reference_claims()[1])?;
    assert_eq!(result.credential_id.as_deref(), Some("CRED_0005"));

    let report = ledger.verification_report();
    assert_eq!(report.total_credentials, 5);
    assert_eq!(report.active_credentials, 4);
    assert_eq!(report.credentials_by_employee["EMP001"].len(), 3);
    Ok(())
}

#[test]
fn corrupt_ledger_file_is_not_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let path = dir.path().join("credential_ledger.json");
    std::fs::write(&path, b"{\"credentials\": [")?;

    let err = CredentialLedger::open(LedgerConfig::with_path(&path)).unwrap_err();
    assert!(matches!(err, LedgerError::Corrupt(_)));
    assert_eq!(std::fs::read(&path)?, b"{\"credentials\": [");
    Ok(())
}

#[test]
fn hashes_are_deterministic_across_ledgers() -> Result<(), LedgerError> {
    let mut a = CredentialLedger::open(LedgerConfig::in_memory())?;
    let mut b = CredentialLedger::open(LedgerConfig::in_memory())?;
    let first = a.issue(&reference_claims()[2])?;
    let second = b.issue(&reference_claims()[2])?;
    assert_eq!(first.hash, second.hash);
    assert_ne!(first.timestamp, "");

    let spaced = CredentialLedger::open(LedgerConfig {
        encoding: CanonicalEncoding::Spaced,
        ..LedgerConfig::in_memory()
    })?;
    let result = spaced.verify(&reference_claims()[2])?;
    assert!(!result.verified);
    assert_ne!(result.hash, first.hash);
    Ok(())
}
