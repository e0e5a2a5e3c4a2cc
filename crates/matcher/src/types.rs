use semantic::SemanticError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ranking and recommendation knobs.
///
/// `MatchConfig` is cheap to clone and serde-friendly so it can be embedded in
/// higher-level configs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MatchConfig {
    /// How many roles [`Matcher::recommend`](crate::Matcher::recommend) returns.
    #[serde(default = "MatchConfig::default_top_n")]
    pub top_n: usize,
    /// Minimum percentage (0-100) a recommendation must reach.
    #[serde(default)]
    pub min_score: f64,
    /// Entries kept in the role-embedding LRU cache; `0` disables it.
    #[serde(default = "MatchConfig::default_cache_capacity")]
    pub cache_capacity: usize,
}

impl MatchConfig {
    pub(crate) fn default_top_n() -> usize {
        3
    }

    pub(crate) fn default_cache_capacity() -> usize {
        256
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), MatchError> {
        if self.top_n == 0 {
            return Err(MatchError::InvalidConfig(
                "top_n must be greater than zero".into(),
            ));
        }
        if !(0.0..=100.0).contains(&self.min_score) {
            return Err(MatchError::InvalidConfig(
                "min_score must be a percentage between 0.0 and 100.0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            top_n: Self::default_top_n(),
            min_score: 0.0,
            cache_capacity: Self::default_cache_capacity(),
        }
    }
}

/// One ranked candidate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarityResult {
    pub candidate_id: String,
    /// Raw cosine score in `[0, 1]`, used for ordering.
    pub score: f64,
    /// `score * 100` rounded to two decimals, used for reporting.
    pub percentage: f64,
}

impl SimilarityResult {
    pub fn new(candidate_id: impl Into<String>, score: f64) -> Self {
        Self {
            candidate_id: candidate_id.into(),
            score,
            percentage: to_percentage(score),
        }
    }
}

/// `score * 100` rounded half away from zero to two decimal places.
pub fn to_percentage(score: f64) -> f64 {
    (score * 100.0 * 100.0).round() / 100.0
}

/// A candidate left out of a ranking because its embedding failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExcludedCandidate {
    pub candidate_id: String,
    pub reason: String,
}

/// Ranked results plus the candidates that could not be scored.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RankOutcome {
    /// Sorted descending by raw score; exact ties keep input order.
    pub results: Vec<SimilarityResult>,
    /// Candidates dropped from `results`, in input order.
    pub excluded: Vec<ExcludedCandidate>,
}

impl RankOutcome {
    /// True when at least one candidate was excluded.
    pub fn is_partial(&self) -> bool {
        !self.excluded.is_empty()
    }

    /// First `n` results (all of them when `n` exceeds the length).
    pub fn top_n(&self, n: usize) -> &[SimilarityResult] {
        crate::engine::top_n(&self.results, n)
    }

    /// Results whose percentage is at least `threshold_pct`.
    ///
    /// Percentages are non-increasing along `results`, so this is a prefix.
    pub fn above(&self, threshold_pct: f64) -> &[SimilarityResult] {
        let cut = self
            .results
            .iter()
            .take_while(|r| r.percentage >= threshold_pct)
            .count();
        &self.results[..cut]
    }

    pub fn position(&self, candidate_id: &str) -> Option<usize> {
        self.results
            .iter()
            .position(|r| r.candidate_id == candidate_id)
    }

    pub fn get(&self, candidate_id: &str) -> Option<&SimilarityResult> {
        self.results.iter().find(|r| r.candidate_id == candidate_id)
    }
}

/// Missing and matching skills for one employee/role pair.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SkillGap {
    /// Required skills the employee lacks, in requirement order.
    pub gaps: Vec<String>,
    /// Required skills the employee has, in requirement order.
    pub matches: Vec<String>,
    pub gap_count: usize,
}

/// Errors produced by the matching layer.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum MatchError {
    /// Invalid configuration.
    #[error("invalid match config: {0}")]
    InvalidConfig(String),
    /// The profile itself could not be embedded, so nothing can be ranked.
    #[error("semantic error: {0}")]
    Semantic(#[from] SemanticError),
}
