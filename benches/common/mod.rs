//! Common utilities for SkillChain benchmarks
//!
//! Synthetic roles and profiles built from a fixed skill vocabulary so runs
//! are comparable.

#![allow(dead_code)]

use skillchain::CredentialClaim;

pub const SKILLS: &[&str] = &[
    "Python",
    "SQL",
    "Tableau",
    "Statistics",
    "Machine Learning",
    "TensorFlow",
    "Spark",
    "Airflow",
    "Java",
    "Spring",
    "Kubernetes",
    "Docker",
    "React",
    "CSS",
    "Data Governance",
    "Strategy",
    "Excel",
    "Power BI",
    "Deep Learning",
    "Cloud Architecture",
];

/// `skills_per_item` skills starting at `offset` in the vocabulary, joined with ", ".
pub fn skill_text(offset: usize, skills_per_item: usize) -> String {
    (0..skills_per_item)
        .map(|i| SKILLS[(offset + i * 3) % SKILLS.len()])
        .collect::<Vec<_>>()
        .join(", ")
}

/// `count` roles as `(role_id, required_skills)` pairs.
pub fn generate_roles(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("JR{:03}", i + 1), skill_text(i, 4)))
        .collect()
}

/// `count` distinct credential claims.
pub fn generate_claims(count: usize) -> Vec<CredentialClaim> {
    (0..count)
        .map(|i| {
            CredentialClaim::new(
                format!("EMP{:03}", i % 50 + 1),
                format!("TC{:03}", i + 1),
                format!("Course {}", skill_text(i, 1)),
                format!("2024-{:02}-{:02}", i % 12 + 1, i % 28 + 1),
            )
        })
        .collect()
}
