//! Embedding capability consumed by the semantic scorer.
//!
//! The scorer only sees the [`Embedder`] trait: text in, fixed-length vector out. Concrete
//! backends:
//! - [`BertEmbedder`] runs a BERT-family sentence model through candle.
//! - [`HashingEmbedder`] is a deterministic stub (no model files).
//! - [`FnEmbedder`] adapts a closure, mostly for tests.
//!
//! Use [`load_embedder`] to pick a backend from an [`EmbedderConfig`].

/// Candle BERT sentence embedder.
pub mod bert;
/// Embedder configuration.
pub mod config;
/// Device selection (CPU / Metal / CUDA).
pub mod device;
mod error;
/// Deterministic stub embedder.
pub mod stub;
/// Tokenizer loading and vector helpers.
pub mod utils;

#[cfg(test)]
mod tests;

pub use bert::BertEmbedder;
pub use config::EmbedderConfig;
pub use error::EmbeddingError;
pub use stub::HashingEmbedder;

use std::sync::Arc;

use tracing::warn;

/// A text-to-vector capability.
///
/// Implementations must return vectors of [`embedding_dim`](Embedder::embedding_dim) components
/// and must be safe to call from many threads at once.
pub trait Embedder: Send + Sync {
    /// Embeds a single text.
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Embeds several texts; backends that batch natively should override this.
    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        texts.iter().map(|text| self.embed(text)).collect()
    }

    /// Output dimension.
    fn embedding_dim(&self) -> usize;

    /// Returns `true` for stand-in embedders that carry no learned semantics.
    fn is_stub(&self) -> bool {
        false
    }
}

impl<E: Embedder + ?Sized> Embedder for &E {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

impl<E: Embedder + ?Sized> Embedder for Box<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

impl<E: Embedder + ?Sized> Embedder for Arc<E> {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (**self).embed(text)
    }

    fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        (**self).embed_batch(texts)
    }

    fn embedding_dim(&self) -> usize {
        (**self).embedding_dim()
    }

    fn is_stub(&self) -> bool {
        (**self).is_stub()
    }
}

/// Wraps a closure as an [`Embedder`].
pub struct FnEmbedder<F> {
    dim: usize,
    f: F,
}

impl<F> FnEmbedder<F>
where
    F: Fn(&str) -> Result<Vec<f32>, EmbeddingError> + Send + Sync,
{
    pub fn new(dim: usize, f: F) -> Self {
        Self { dim, f }
    }
}

impl<F> std::fmt::Debug for FnEmbedder<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnEmbedder").field("dim", &self.dim).finish()
    }
}

impl<F> Embedder for FnEmbedder<F>
where
    F: Fn(&str) -> Result<Vec<f32>, EmbeddingError> + Send + Sync,
{
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        (self.f)(text)
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }
}

/// Loads the configured backend: [`BertEmbedder`] when a model directory is set, else the stub.
pub fn load_embedder(config: EmbedderConfig) -> Result<Box<dyn Embedder>, EmbeddingError> {
    if config.is_stub() {
        config.validate()?;
        warn!("No HUEMATCH_MODEL_PATH configured, running embedder in stub mode");
        return Ok(Box::new(HashingEmbedder::new(config.stub_dim)));
    }

    Ok(Box::new(BertEmbedder::load(config)?))
}
