use tracing::debug;

use crate::constants::DEFAULT_EMBEDDING_DIM;
use crate::hashing::hash_token;
use crate::text::{normalize_text, tokenize};

use super::Embedder;
use super::error::EmbeddingError;
use super::utils::l2_normalize;

/// Deterministic bag-of-words embedder for tests and model-less deployments.
///
/// Each normalized token is feature-hashed into one signed bucket; the result is L2 normalized.
/// Texts sharing vocabulary get positive cosine similarity, which is enough to exercise the
/// semantic path without model files.
///
/// Total over all strings: text with no alphanumeric tokens (emoji, punctuation) hashes its
/// non-whitespace chars instead, and text that still lands on the zero vector (empty, or
/// cancelling signs) gets a single fixed bias bucket.
#[derive(Debug, Clone)]
pub struct HashingEmbedder {
    dim: usize,
}

impl Default for HashingEmbedder {
    fn default() -> Self {
        Self::new(DEFAULT_EMBEDDING_DIM)
    }
}

impl HashingEmbedder {
    /// Creates a stub embedder with `dim` output components (at least 1).
    pub fn new(dim: usize) -> Self {
        Self { dim: dim.max(1) }
    }

    fn add(&self, embedding: &mut [f32], token: &str) {
        let (bucket, sign) = hash_token(token, self.dim);
        embedding[bucket] += sign;
    }
}

fn is_zero(embedding: &[f32]) -> bool {
    embedding.iter().all(|&x| x == 0.0)
}

impl Embedder for HashingEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let normalized = normalize_text(text);
        let mut embedding = vec![0.0f32; self.dim];

        let mut token_count = 0usize;
        for token in tokenize(&normalized) {
            self.add(&mut embedding, token);
            token_count += 1;
        }

        if is_zero(&embedding) {
            let mut buf = [0u8; 4];
            for ch in text.chars().filter(|c| !c.is_whitespace()) {
                self.add(&mut embedding, ch.encode_utf8(&mut buf));
            }
        }

        if is_zero(&embedding) {
            let (bucket, sign) = hash_token("", self.dim);
            embedding[bucket] = sign;
        }

        debug!(
            text_len = text.len(),
            token_count, "Generating stub embedding"
        );

        l2_normalize(&mut embedding);
        Ok(embedding)
    }

    fn embedding_dim(&self) -> usize {
        self.dim
    }

    fn is_stub(&self) -> bool {
        true
    }
}
