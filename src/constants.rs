//! Cross-cutting, shared constants.
//!
//! The scoring policy values live here so the analyzer defaults, the env overrides and the
//! tests all agree on one source.
//!
//! # Dimension Invariants
//!
//! The embedding dimension is only a default. Embedders report their own dimension at runtime;
//! use [`validate_embedding_dim`] at module boundaries to catch mismatches early.

/// Output dimension of the stub embedder (matches all-MiniLM-L6-v2).
pub const DEFAULT_EMBEDDING_DIM: usize = 384;

/// Max tokens fed to the sentence embedding model.
pub const DEFAULT_MAX_SEQ_LEN: usize = 256;

/// Weight of the keyword signal in the blend.
pub const DEFAULT_LEXICAL_WEIGHT: f64 = 0.6;

/// Weight of the embedding-similarity signal in the blend.
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.4;

/// Inputs with fewer trimmed characters than this skip scoring entirely.
pub const DEFAULT_MIN_TEXT_CHARS: usize = 20;

/// Confidence reported for the short-input fallback.
pub const DEFAULT_FALLBACK_CONFIDENCE: f64 = 0.3;

/// Compatibility reported when either side carries no personality data.
pub const NEUTRAL_COMPATIBILITY: f64 = 0.5;

/// Tolerance for "sums to 1.0" checks on finalized distributions.
pub const DISTRIBUTION_TOLERANCE: f64 = 1e-6;

/// Error returned when dimension validation fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimValidationError {
    /// Embedding dimension cannot be zero.
    ZeroDimension,
    /// Runtime dimension does not match expected dimension.
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for DimValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "embedding dimension cannot be zero"),
            Self::DimensionMismatch { expected, actual } => {
                write!(
                    f,
                    "dimension mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for DimValidationError {}

/// Validates that a runtime embedding dimension matches the expected dimension.
///
/// # Example
///
/// ```
/// use huematch::constants::{validate_embedding_dim, DEFAULT_EMBEDDING_DIM};
///
/// validate_embedding_dim(384, DEFAULT_EMBEDDING_DIM).unwrap();
/// ```
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimValidationError> {
    if expected == 0 {
        return Err(DimValidationError::ZeroDimension);
    }
    if actual != expected {
        return Err(DimValidationError::DimensionMismatch { expected, actual });
    }
    Ok(())
}
