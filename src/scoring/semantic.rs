//! Zero-shot embedding similarity between input text and each category's keyword text.
//!
//! Category profiles (the embedding of each category's keywords joined by spaces) are computed
//! once when the scorer is built, in a single batched call, so scoring a text costs one
//! embedding call. The scorer is immutable afterwards and can be shared across threads.

use std::sync::Arc;

use tracing::{debug, info};

use crate::catalog::{Category, CategoryCatalog};
use crate::constants::validate_embedding_dim;
use crate::embedding::{Embedder, EmbeddingError};

use super::error::{ScoringError, ScoringStage};
use super::similarity::cosine_similarity;
use super::types::CategoryScores;

pub struct SemanticScorer<E> {
    catalog: Arc<CategoryCatalog>,
    embedder: E,
    profiles: Vec<Vec<f32>>,
    dim: usize,
}

impl<E> std::fmt::Debug for SemanticScorer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SemanticScorer")
            .field("categories", &self.catalog.len())
            .field("dim", &self.dim)
            .finish()
    }
}

impl<E: Embedder> SemanticScorer<E> {
    /// Embeds every category's representative text.
    pub fn new(catalog: Arc<CategoryCatalog>, embedder: E) -> Result<Self, ScoringError> {
        let texts: Vec<String> = catalog.iter().map(Category::representative_text).collect();
        let refs: Vec<&str> = texts.iter().map(String::as_str).collect();

        let profiles = embedder
            .embed_batch(&refs)
            .map_err(|e| ScoringError::embedding(ScoringStage::CategoryProfiles, e))?;

        if profiles.len() != catalog.len() {
            return Err(ScoringError::embedding(
                ScoringStage::CategoryProfiles,
                EmbeddingError::InferenceFailed {
                    reason: format!(
                        "expected {} profile embeddings, got {}",
                        catalog.len(),
                        profiles.len()
                    ),
                },
            ));
        }

        let dim = profiles.first().map(Vec::len).unwrap_or_default();
        for (category, profile) in catalog.iter().zip(&profiles) {
            let stage = || ScoringStage::CategoryProfile {
                category: category.name().to_string(),
            };

            if profile.len() != dim {
                return Err(ScoringError::embedding(
                    stage(),
                    EmbeddingError::DimensionMismatch {
                        expected: dim,
                        actual: profile.len(),
                    },
                ));
            }
            check_norm(profile).map_err(|e| ScoringError::embedding(stage(), e))?;
        }

        info!(
            categories = catalog.len(),
            dim,
            stub = embedder.is_stub(),
            "Category profiles embedded"
        );

        Ok(Self {
            catalog,
            embedder,
            profiles,
            dim,
        })
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn embedder(&self) -> &E {
        &self.embedder
    }

    /// Dimension shared by the profiles and every accepted input embedding.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Cosine similarity of `normalized` to each category profile, left in `[-1, 1]`.
    pub fn score(&self, normalized: &str) -> Result<CategoryScores, ScoringError> {
        let embedding = self
            .embedder
            .embed(normalized)
            .map_err(|e| ScoringError::embedding(ScoringStage::InputText, e))?;

        validate_embedding_dim(embedding.len(), self.dim)
            .map_err(|e| ScoringError::embedding(ScoringStage::InputText, e.into()))?;
        check_norm(&embedding).map_err(|e| ScoringError::embedding(ScoringStage::InputText, e))?;

        let mut entries = Vec::with_capacity(self.profiles.len());
        for (category, profile) in self.catalog.iter().zip(&self.profiles) {
            let similarity = cosine_similarity(&embedding, profile).ok_or_else(|| {
                ScoringError::embedding(
                    ScoringStage::InputText,
                    EmbeddingError::DegenerateVector {
                        reason: format!("similarity to '{}' is undefined", category.name()),
                    },
                )
            })?;
            entries.push((category.name().to_string(), similarity));
        }

        debug!(
            text_len = normalized.len(),
            categories = entries.len(),
            "Semantic scores computed"
        );

        Ok(CategoryScores::from_entries(entries))
    }
}

fn check_norm(vector: &[f32]) -> Result<(), EmbeddingError> {
    let norm_sq: f64 = vector.iter().map(|&x| f64::from(x) * f64::from(x)).sum();

    if !norm_sq.is_finite() {
        return Err(EmbeddingError::DegenerateVector {
            reason: "vector contains non-finite values".to_string(),
        });
    }
    if norm_sq == 0.0 {
        return Err(EmbeddingError::DegenerateVector {
            reason: "vector has zero norm".to_string(),
        });
    }
    Ok(())
}
