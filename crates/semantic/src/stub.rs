use fxhash::hash64;

use crate::{Embedder, SemanticConfig, SemanticError};

/// Deterministic stand-in for a real sentence-embedding model.
///
/// Generates sinusoid values derived from a hash of the whole input text, so
/// identical text gives identical vectors at minimal CPU cost. Unrelated texts
/// produce unrelated vectors; use it to exercise ranking and tie-breaking, not
/// to judge skill overlap.
#[derive(Debug, Clone)]
pub struct StubEmbedder {
    dim: usize,
    model_name: String,
}

impl StubEmbedder {
    pub fn new(dim: usize, model_name: impl Into<String>) -> Self {
        Self {
            dim,
            model_name: model_name.into(),
        }
    }

    pub fn from_config(cfg: &SemanticConfig) -> Self {
        Self::new(cfg.dimension(), cfg.model_name.clone())
    }
}

impl Embedder for StubEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let mut v = vec![0f32; self.dim];
        let h = hash64(text.as_bytes());
        for (idx, value) in v.iter_mut().enumerate() {
            *value = ((h >> (idx % 32)) as f32 * 0.0001).sin();
        }
        Ok(v)
    }

    fn dimension(&self) -> usize {
        self.dim
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}
