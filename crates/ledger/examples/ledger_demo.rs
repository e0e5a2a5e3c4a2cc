use std::error::Error;

use ledger::{CredentialClaim, CredentialLedger, LedgerConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let mut ledger = CredentialLedger::open(LedgerConfig::with_path("data/credential_ledger.json"))?;

    if ledger.is_empty() {
        let completions = [
            ("EMP001", "TC001", "Python for Data Analysis", "2024-03-15"),
            ("EMP001", "TC002", "Advanced SQL for Data Scientists", "2024-05-20"),
            ("EMP003", "TC003", "Machine Learning Specialization", "2024-06-10"),
            ("EMP005", "TC022", "Tableau Advanced Analytics", "2024-08-01"),
        ];
        for (employee, course, name, date) in completions {
            let record = ledger.issue(&CredentialClaim::new(employee, course, name, date))?;
            println!("Issued {} -> {}", record.credential_id, &record.hash[..16]);
        }
    }

    let genuine = CredentialClaim::new("EMP001", "TC001", "Python for Data Analysis", "2024-03-15");
    let forged = CredentialClaim::new("EMP001", "TC999", "Fake Course", "2024-01-01");

    for claim in [&genuine, &forged] {
        let result = ledger.verify(claim)?;
        println!(
            "{} / {}: {} ({})",
            claim.employee_id,
            claim.course_name,
            result.message,
            result.credential_id.as_deref().unwrap_or("-")
        );
    }

    let report = ledger.verification_report();
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
