use fxhash::hash64;

use crate::{Embedder, SemanticConfig, SemanticError};

/// Weight of a full skill token (`"machine learning"`).
const TOKEN_WEIGHT: f32 = 1.0;
/// Weight of each word inside a multi-word token (`"machine"`, `"learning"`).
const WORD_WEIGHT: f32 = 0.5;

/// Feature-hashing embedder over skill tokens.
///
/// Text is split with [`canonical::tokenize`]; every token and every word of a
/// multi-word token is hashed to one dimension with a hash-derived sign. Two
/// profiles that share skills share dimensions, so cosine similarity tracks
/// skill overlap. Text with no tokens embeds to the zero vector, which every
/// comparison scores as `0.0`.
///
/// ⚠️ Changing the feature set or the weights changes every vector; bump the
/// model name when doing so.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
    model_name: String,
}

impl HashingEmbedder {
    pub fn new(dim: usize, model_name: impl Into<String>) -> Self {
        Self {
            dim: dim.max(1),
            model_name: model_name.into(),
        }
    }

    pub fn from_config(cfg: &SemanticConfig) -> Self {
        Self::new(cfg.dimension(), cfg.model_name.clone())
    }

    fn add_feature(&self, vector: &mut [f32], feature: &str, weight: f32) {
        let h = hash64(feature.as_bytes());
        let idx = (h % self.dim as u64) as usize;
        // Top bit picks the sign so collisions tend to cancel instead of pile up.
        let sign = if h >> 63 == 0 { 1.0 } else { -1.0 };
        vector[idx] += sign * weight;
    }
}

impl Embedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let mut vector = vec![0f32; self.dim];
        for token in canonical::tokenize(text) {
            self.add_feature(&mut vector, &token, TOKEN_WEIGHT);
            let mut words = token.split_whitespace().peekable();
            let first = words.next();
            if words.peek().is_some() {
                for word in first.into_iter().chain(words) {
                    self.add_feature(&mut vector, word, WORD_WEIGHT);
                }
            }
        }
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
