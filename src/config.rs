//! YAML configuration for the whole SkillChain pipeline.
//!
//! One document configures the embedder, the matcher and the credential
//! ledger. Every section is optional and falls back to its defaults; every
//! section is validated on load.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! version: "1.0"
//! name: "reference"
//!
//! semantic:
//!   mode: "hashing"
//!   tier: "fast"
//!   model_name: "skill-hashing"
//!
//! matcher:
//!   top_n: 3
//!   min_score: 0.0
//!   cache_capacity: 256
//!
//! ledger:
//!   backend:
//!     type: file
//!     path: "data/credential_ledger.json"
//!   default_issuer: "SkillChain DX Platform"
//!   encoding: compact
//! ```

use std::fs;
use std::path::Path;

use ledger::{CredentialLedger, LedgerConfig};
use matcher::MatchConfig;
use semantic::{build_embedder, Embedder, SemanticConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{PipelineError, SkillInference, Workforce};

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillChainConfig {
    /// Configuration format version, `"1"` or `"1.0"`.
    pub version: String,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub semantic: SemanticConfig,

    #[serde(default)]
    pub matcher: MatchConfig,

    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl SkillChainConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: SkillChainConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.semantic
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("semantic: {e}")))?;
        self.matcher
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("matcher: {e}")))?;
        self.ledger
            .validate()
            .map_err(|e| ConfigLoadError::Validation(format!("ledger: {e}")))?;

        Ok(())
    }

    /// Inference engine over `workforce` using the configured embedder.
    pub fn build_inference(
        &self,
        workforce: Workforce,
    ) -> Result<SkillInference<Box<dyn Embedder>>, PipelineError> {
        let embedder = build_embedder(&self.semantic)?;
        SkillInference::new(workforce, embedder, self.matcher.clone())
    }

    /// Open (or initialize) the configured credential ledger.
    pub fn open_ledger(&self) -> Result<CredentialLedger, PipelineError> {
        Ok(CredentialLedger::open(self.ledger.clone())?)
    }
}

impl Default for SkillChainConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            semantic: SemanticConfig::default(),
            matcher: MatchConfig::default(),
            ledger: LedgerConfig::default(),
        }
    }
}
