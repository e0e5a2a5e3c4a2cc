use serde::{Deserialize, Serialize};

use crate::SemanticError;

/// Embedding modes understood by [`build_embedder`](crate::build_embedder).
pub const SUPPORTED_MODES: &[&str] = &["stub", "hashing"];

/// Tier names and the vector dimension each one selects.
pub const TIER_DIMENSIONS: &[(&str, usize)] = &[("fast", 384), ("balanced", 768), ("accurate", 1024)];

/// Runtime configuration describing which embedder to build and how to post-process vectors.
///
/// # Example
/// ```
/// use semantic::{build_embedder, SemanticConfig};
///
/// let cfg = SemanticConfig {
///     mode: "hashing".into(),
///     tier: "fast".into(),
///     ..Default::default()
/// };
/// cfg.validate().unwrap();
///
/// let embedder = build_embedder(&cfg).unwrap();
/// assert_eq!(embedder.dimension(), 384);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SemanticConfig {
    /// `"stub"` hashes the whole text into a sinusoid vector; `"hashing"` feature-hashes
    /// individual skill tokens so overlapping skills land on shared dimensions.
    pub mode: String,
    /// Model tier: `"fast"` (384), `"balanced"` (768) or `"accurate"` (1024).
    pub tier: String,
    /// Friendly label surfaced on every `SemanticEmbedding`.
    pub model_name: String,
    /// Normalize vectors returned by [`semanticize`](crate::semanticize) to unit length.
    pub normalize: bool,
}

impl Default for SemanticConfig {
    fn default() -> Self {
        Self {
            mode: "stub".into(),
            tier: "fast".into(),
            model_name: "skillchain-stub".into(),
            normalize: true,
        }
    }
}

impl SemanticConfig {
    /// Vector length for the configured tier. Unknown tiers fall back to `balanced`.
    pub fn dimension(&self) -> usize {
        TIER_DIMENSIONS
            .iter()
            .find(|(tier, _)| *tier == self.tier)
            .map(|(_, dim)| *dim)
            .unwrap_or(768)
    }

    pub fn validate(&self) -> Result<(), SemanticError> {
        if !SUPPORTED_MODES.contains(&self.mode.as_str()) {
            return Err(SemanticError::InvalidConfig(format!(
                "unknown mode '{}', expected one of {:?}",
                self.mode, SUPPORTED_MODES
            )));
        }
        if !TIER_DIMENSIONS.iter().any(|(tier, _)| *tier == self.tier) {
            return Err(SemanticError::InvalidConfig(format!(
                "unknown tier '{}', expected fast, balanced or accurate",
                self.tier
            )));
        }
        if self.model_name.trim().is_empty() {
            return Err(SemanticError::InvalidConfig(
                "model_name must not be empty".into(),
            ));
        }
        Ok(())
    }
}
