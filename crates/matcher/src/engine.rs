use semantic::{cosine_similarity, Embedder, SemanticError};
use tracing::{debug, warn};

use crate::types::{ExcludedCandidate, MatchConfig, MatchError, RankOutcome, SimilarityResult};


/// Ranks role candidates against a skill profile with a fixed embedder.
pub struct Matcher<E> {
    embedder: E,
    config: MatchConfig,
}

impl<E: Embedder> Matcher<E> {
    /// Construct a matcher; the config is validated up front.
    pub fn new(embedder: E, config: MatchConfig) -> Result<Self, MatchError> {
        config.validate()?;
        Ok(Self { embedder, config })
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Rank every candidate. See [`rank`].
    pub fn rank<I, T>(&self, profile_text: &str, candidates: &[(I, T)]) -> Result<RankOutcome, MatchError>
    where
        I: AsRef<str>,
        T: AsRef<str>,
    {
        rank(&self.embedder, profile_text, candidates)
    }

    /// The best `config.top_n` candidates scoring at least `config.min_score` percent.
    pub fn recommend<I, T>(
        &self,
        profile_text: &str,
        candidates: &[(I, T)],
    ) -> Result<Vec<SimilarityResult>, MatchError>
    where
        I: AsRef<str>,
        T: AsRef<str>,
    {
        let outcome = self.rank(profile_text, candidates)?;
        Ok(recommend_from(&outcome, &self.config))
    }
}

/// Apply `min_score` then `top_n` from `config` to an existing ranking.
pub fn recommend_from(outcome: &RankOutcome, config: &MatchConfig) -> Vec<SimilarityResult> {
    top_n(outcome.above(config.min_score), config.top_n).to_vec()
}

/// Rank `candidates` by cosine similarity to `profile_text`.
///
/// Output is sorted descending by raw score; exact ties keep input order.
/// A candidate whose embedding fails (or comes back with the wrong dimension)
/// lands in [`RankOutcome::excluded`] instead of aborting the pass.
///
/// # Errors
///
/// [`MatchError::Semantic`] when the profile itself cannot be embedded.
pub fn rank<E, I, T>(
    embedder: &E,
    profile_text: &str,
    candidates: &[(I, T)],
) -> Result<RankOutcome, MatchError>
where
    E: Embedder + ?Sized,
    I: AsRef<str>,
    T: AsRef<str>,
{
    let profile = embedder.embed(profile_text)?;
    if profile.len() != embedder.dimension() {
        return Err(MatchError::Semantic(SemanticError::DimensionMismatch {
            expected: embedder.dimension(),
            actual: profile.len(),
        }));
    }

    let texts: Vec<&str> = candidates.iter().map(|(_, text)| text.as_ref()).collect();
    let vectors = embedder.embed_batch(&texts);
    if vectors.len() != candidates.len() {
        return Err(MatchError::Semantic(SemanticError::Inference(format!(
            "embedder returned {} vectors for {} candidates",
            vectors.len(),
            candidates.len()
        ))));
    }

    let mut outcome = RankOutcome {
        results: Vec::with_capacity(candidates.len()),
        excluded: Vec::new(),
    };

    for ((candidate_id, _), vector) in candidates.iter().zip(vectors) {
        let candidate_id = candidate_id.as_ref();
        let scored = vector.and_then(|v| cosine_similarity(&profile, &v));
        match scored {
            Ok(score) => outcome
                .results
                .push(SimilarityResult::new(candidate_id, score)),
            Err(err) => {
                warn!(candidate_id, error = %err, "candidate excluded from ranking");
                outcome.excluded.push(ExcludedCandidate {
                    candidate_id: candidate_id.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }

    // `sort_by` is stable, which gives the input-order tie break.
    outcome.results.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    debug!(
        ranked = outcome.results.len(),
        excluded = outcome.excluded.len(),
        "ranking complete"
    );
    Ok(outcome)
}

/// First `n` elements of an already-ranked slice; `n` past the end returns all of it.
pub fn top_n(ranked: &[SimilarityResult], n: usize) -> &[SimilarityResult] {
    &ranked[..n.min(ranked.len())]
}
