use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

use lru::LruCache;
use tracing::{debug, warn};

use crate::{Embedder, SemanticError};

/// Hit/miss counters for a [`CachedEmbedder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// LRU memo in front of another embedder, keyed by the exact input text.
///
/// Only successful embeddings are stored. A capacity of zero turns the cache
/// off and every call goes straight to the inner embedder.
pub struct CachedEmbedder<E> {
    inner: E,
    cache: Option<Mutex<LruCache<String, Vec<f32>>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<E: Embedder> CachedEmbedder<E> {
    pub fn new(inner: E, capacity: usize) -> Self {
        Self {
            inner,
            cache: NonZeroUsize::new(capacity).map(|cap| Mutex::new(LruCache::new(cap))),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    pub fn inner(&self) -> &E {
        &self.inner
    }

    pub fn stats(&self) -> CacheStats {
        let entries = self.cache.as_ref().map(|cache| lock(cache).len()).unwrap_or(0);
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries,
        }
    }
}

impl<E: Embedder> Embedder for CachedEmbedder<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, SemanticError> {
        let Some(cache) = &self.cache else {
            return self.inner.embed(text);
        };

        if let Some(hit) = lock(cache).get(text).cloned() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Ok(hit);
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(model = self.inner.model_name(), text_len = text.len(), "embedding cache miss");
        let vector = self.inner.embed(text)?;
        lock(cache).put(text.to_owned(), vector.clone());
        Ok(vector)
    }

    fn dimension(&self) -> usize {
        self.inner.dimension()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}

// A poisoned lock only means another caller panicked mid-insert; the map
// itself is still consistent.
fn lock(cache: &Mutex<LruCache<String, Vec<f32>>>) -> MutexGuard<'_, LruCache<String, Vec<f32>>> {
    cache.lock().unwrap_or_else(|poisoned| {
        warn!("embedding cache lock poisoned; recovering");
        poisoned.into_inner()
    })
}
