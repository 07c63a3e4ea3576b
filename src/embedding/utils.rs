use std::path::Path;

use tokenizers::{Tokenizer, TruncationParams};

use super::error::EmbeddingError;

/// Loads `tokenizer.json` with truncation at `max_len` tokens.
pub fn load_tokenizer(tokenizer_path: &Path, max_len: usize) -> Result<Tokenizer, EmbeddingError> {
    let mut tokenizer =
        Tokenizer::from_file(tokenizer_path).map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!(
                "failed to load tokenizer {}: {}",
                tokenizer_path.display(),
                e
            ),
        })?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };

    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| EmbeddingError::ModelLoadFailed {
            reason: format!("failed to configure truncation: {}", e),
        })?;

    // Single-sequence inference never needs padding.
    tokenizer.with_padding(None);

    Ok(tokenizer)
}

/// Scales `embedding` to unit L2 norm in place; zero vectors are left untouched.
pub fn l2_normalize(embedding: &mut [f32]) {
    let norm: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm > 0.0 && norm.is_finite() {
        for x in embedding.iter_mut() {
            *x /= norm;
        }
    }
}
