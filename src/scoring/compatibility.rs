//! Compatibility between two personality vectors.

use crate::constants::NEUTRAL_COMPATIBILITY;

use super::error::ScoringError;
use super::similarity::cosine_similarity;

/// Rescaled cosine similarity of two personality vectors, in `[0, 1]`.
///
/// - Either side empty: [`NEUTRAL_COMPATIBILITY`] (no personality data yet).
/// - Either side all zeros: [`NEUTRAL_COMPATIBILITY`] (direction undefined).
/// - Lengths differ or a component is not finite: [`ScoringError::MalformedVector`].
///
/// Otherwise `(cos + 1) / 2`, so 1 is full alignment, 0 full opposition and 0.5 orthogonal.
/// Symmetric in its arguments.
pub fn compatibility(a: &[f64], b: &[f64]) -> Result<f64, ScoringError> {
    if a.is_empty() || b.is_empty() {
        return Ok(NEUTRAL_COMPATIBILITY);
    }

    if a.len() != b.len() {
        return Err(ScoringError::MalformedVector {
            reason: format!("vector lengths differ: {} vs {}", a.len(), b.len()),
        });
    }

    if let Some(bad) = a.iter().chain(b).find(|v| !v.is_finite()) {
        return Err(ScoringError::MalformedVector {
            reason: format!("vector contains non-finite value {}", bad),
        });
    }

    Ok(cosine_similarity(a, b)
        .map(|similarity| ((similarity + 1.0) / 2.0).clamp(0.0, 1.0))
        .unwrap_or(NEUTRAL_COMPATIBILITY))
}
