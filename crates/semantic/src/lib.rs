//! SkillChain semantic layer
//!
//! Turns skill-profile text into fixed-size dense vectors and compares them.
//! The real embedding model is an outside capability, so everything here goes
//! through the narrow [`Embedder`] trait: `embed(text) -> vector`.
//!
//! Two embedders ship with the crate:
//!
//! - **Stub** ([`StubEmbedder`]) - sinusoid vector keyed by a hash of the whole
//!   text. Deterministic and cheap; good for ranking and tie-break tests.
//! - **Hashing** ([`HashingEmbedder`]) - feature hashing over skill tokens, so
//!   profiles that share skills actually score higher.
//!
//! Wrap either one in [`CachedEmbedder`] when the same texts (job roles) get
//! embedded over and over.
//!
//! ## Empty text
//!
//! Embedding never fails on empty or odd input. The stub returns whatever
//! the hash of `""` gives; the hashing embedder returns the zero vector, and
//! [`cosine_similarity`] scores zero vectors as `0.0`.
//!
//! ## Quick example
//!
//! ```
//! use semantic::{build_embedder, cosine_similarity, semanticize, SemanticConfig};
//!
//! let cfg = SemanticConfig { mode: "hashing".into(), ..Default::default() };
//! let embedder = build_embedder(&cfg).unwrap();
//!
//! let employee = semanticize("EMP001", "Python, SQL, Excel", &embedder, &cfg).unwrap();
//! let role = semanticize("JR001", "Python; SQL; Tableau", &embedder, &cfg).unwrap();
//! let score = cosine_similarity(&employee.vector, &role.vector).unwrap();
//! assert!(score > 0.0 && score <= 1.0);
//! ```

pub mod config;
pub mod error;
pub mod types;

mod cache;
mod hashing;
mod normalize;
mod similarity;
mod stub;

use std::sync::Arc;

pub use crate::cache::{CacheStats, CachedEmbedder};
pub use crate::config::SemanticConfig;
pub use crate::error::SemanticError;
pub use crate::hashing::HashingEmbedder;
pub use crate::similarity::cosine_similarity;
pub use crate::stub::StubEmbedder;
pub use crate::types::SemanticEmbedding;

use crate::normalize::l2_normalize_in_place;

/// Text-to-vector capability.
///
/// Implementations must be deterministic for identical input and return
/// vectors of exactly [`dimension`](Self::dimension) components.
pub trait Embedder: Send + Sync {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError>;

    /// Embed several texts. The default calls [`embed`](Self::embed) per item;
    /// each result stands alone so one failure does not sink the batch.
    fn embed_batch(&self, texts: &[&str]) -> Vec<Result<Vec<f32>, SemanticError>> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    fn dimension(&self) -> usize;

    fn model_name(&self) -> &str;
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        (**self).embed(text)
    }
    fn embed_batch(&self, texts: &[&str]) -> Vec<Result<Vec<f32>, SemanticError>> {
        (**self).embed_batch(texts)
    }
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        (**self).embed(text)
    }
    fn embed_batch(&self, texts: &[&str]) -> Vec<Result<Vec<f32>, SemanticError>> {
        (**self).embed_batch(texts)
    }
    fn dimension(&self) -> usize {
        (**self).dimension()
    }
    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Build the embedder selected by `cfg.mode` after validating the config.
pub fn build_embedder(cfg: &SemanticConfig) -> Result<Box<dyn Embedder>, SemanticError> {
    cfg.validate()?;
    match cfg.mode.as_str() {
        "stub" => Ok(Box::new(StubEmbedder::from_config(cfg))),
        "hashing" => Ok(Box::new(HashingEmbedder::from_config(cfg))),
        other => Err(SemanticError::InvalidConfig(format!(
            "no embedder registered for mode '{other}'"
        ))),
    }
}

/// Embed `text` and wrap the vector with its metadata.
///
/// Normalizes to unit length when `cfg.normalize` is set and checks that the
/// embedder honoured its declared dimension.
pub fn semanticize<E>(
    doc_id: &str,
    text: &str,
    embedder: &E,
    cfg: &SemanticConfig,
) -> Result<SemanticEmbedding, SemanticError>
where
    E: Embedder + ?Sized,
{
    let vector = embedder.embed(text)?;
    finish_embedding(doc_id, vector, embedder, cfg)
}

/// Batch variant of [`semanticize`]. Results line up with `docs`; a failed
/// item does not affect the others.
pub fn semanticize_batch<E, D, T>(
    docs: &[(D, T)],
    embedder: &E,
    cfg: &SemanticConfig,
) -> Vec<Result<SemanticEmbedding, SemanticError>>
where
    E: Embedder + ?Sized,
    D: AsRef<str>,
    T: AsRef<str>,
{
    let texts: Vec<&str> = docs.iter().map(|(_, text)| text.as_ref()).collect();
    let vectors = embedder.embed_batch(&texts);
    if vectors.len() != docs.len() {
        let msg = format!(
            "embedder returned {} vectors for {} inputs",
            vectors.len(),
            docs.len()
        );
        return docs
            .iter()
            .map(|_| Err(SemanticError::Inference(msg.clone())))
            .collect();
    }

    docs.iter()
        .zip(vectors)
        .map(|((doc_id, _), vector)| finish_embedding(doc_id.as_ref(), vector?, embedder, cfg))
        .collect()
}

fn finish_embedding<E>(
    doc_id: &str,
    mut vector: Vec<f32>,
    embedder: &E,
    cfg: &SemanticConfig,
) -> Result<SemanticEmbedding, SemanticError>
where
    E: Embedder + ?Sized,
{
    if vector.len() != embedder.dimension() {
        return Err(SemanticError::DimensionMismatch {
            expected: embedder.dimension(),
            actual: vector.len(),
        });
    }
    if cfg.normalize {
        l2_normalize_in_place(&mut vector);
    }
    let embedding_dim = vector.len();
    Ok(SemanticEmbedding {
        doc_id: doc_id.to_string(),
        vector,
        model_name: embedder.model_name().to_string(),
        embedding_dim,
        normalized: cfg.normalize,
    })
}
