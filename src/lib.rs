//! Workspace umbrella crate for SkillChain.
//!
//! This crate ties the stage crates together: dataset types, the
//! [`SkillInference`] engine that ranks roles for employees and explains skill
//! gaps, and a YAML [`config`] that builds the engine and opens the
//! credential ledger. The stage crates are re-exported so callers need only
//! this one dependency.

pub mod config;
mod inference;
mod workforce;

pub use canonical::{
    canonical_json, hash_text, to_canonical_json, tokenize, CanonicalEncoding, CanonicalError,
};
pub use ledger::{
    BackendConfig, CredentialClaim, CredentialContent, CredentialLedger, CredentialRecord,
    CredentialStatus, FileBackend, InMemoryBackend, LedgerBackend, LedgerConfig, LedgerError,
    VerificationReport, VerificationResult,
};
pub use matcher::{
    aggregate_profile, gap_analysis, rank, top_n, CourseCatalog, MatchConfig, MatchError,
    Matcher, RankOutcome, SimilarityResult, SkillGap,
};
pub use semantic::{
    build_embedder, cosine_similarity, CachedEmbedder, Embedder, HashingEmbedder,
    SemanticConfig, SemanticError, StubEmbedder,
};

pub use crate::config::{ConfigLoadError, SkillChainConfig};
pub use crate::inference::{
    EmployeeRecommendations, RecommendationsReport, RoleRecommendation, SkillGapReport,
    SkillInference,
};
pub use crate::workforce::{Course, Employee, JobRole, Workforce};

use thiserror::Error;

/// Errors surfaced by the umbrella API.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("unknown employee: {0}")]
    UnknownEmployee(String),
    #[error("unknown role: {0}")]
    UnknownRole(String),
    #[error("matching failed: {0}")]
    Match(#[from] MatchError),
    #[error("ledger failure: {0}")]
    Ledger(#[from] LedgerError),
    #[error("embedder setup failed: {0}")]
    Semantic(#[from] SemanticError),
}
