use std::path::PathBuf;
use thiserror::Error;

use crate::constants::DimValidationError;

/// Failures of the embedding capability.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding model not found at path: {path}")]
    ModelNotFound { path: PathBuf },

    #[error("failed to load embedding model: {reason}")]
    ModelLoadFailed { reason: String },

    #[error("embedding inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("tokenization failed: {reason}")]
    TokenizationFailed { reason: String },

    #[error("invalid embedder configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The capability returned a vector with zero (or non-finite) norm.
    #[error("degenerate embedding: {reason}")]
    DegenerateVector { reason: String },

    #[error("embedding dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl From<candle_core::Error> for EmbeddingError {
    fn from(err: candle_core::Error) -> Self {
        EmbeddingError::InferenceFailed {
            reason: err.to_string(),
        }
    }
}

impl From<std::io::Error> for EmbeddingError {
    fn from(err: std::io::Error) -> Self {
        EmbeddingError::ModelLoadFailed {
            reason: err.to_string(),
        }
    }
}

impl From<DimValidationError> for EmbeddingError {
    fn from(err: DimValidationError) -> Self {
        match err {
            DimValidationError::ZeroDimension => EmbeddingError::DegenerateVector {
                reason: "embedding has zero dimensions".to_string(),
            },
            DimValidationError::DimensionMismatch { expected, actual } => {
                EmbeddingError::DimensionMismatch { expected, actual }
            }
        }
    }
}
