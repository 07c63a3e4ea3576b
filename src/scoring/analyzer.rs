use std::sync::Arc;

use tracing::{debug, warn};

use crate::catalog::CategoryCatalog;
use crate::embedding::Embedder;
use crate::text::normalize_text;

use super::compatibility::compatibility;
use super::config::AnalyzerConfig;
use super::error::ScoringError;
use super::lexical::LexicalScorer;
use super::semantic::SemanticScorer;
use super::types::{AnalysisBasis, AnalysisResult, CategoryScores, ScoreDistribution};

/// Maps free text to a colour-personality distribution.
///
/// Holds no per-user state: every call to [`analyze`](Self::analyze) builds a fresh
/// [`AnalysisResult`]. Share one analyzer across threads (e.g. in an `Arc`) and run independent
/// analyses in parallel.
pub struct PersonalityAnalyzer<E> {
    catalog: Arc<CategoryCatalog>,
    lexical: LexicalScorer,
    semantic: SemanticScorer<E>,
    config: AnalyzerConfig,
}

impl<E> std::fmt::Debug for PersonalityAnalyzer<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersonalityAnalyzer")
            .field("categories", &self.catalog.len())
            .field("semantic", &self.semantic)
            .field("config", &self.config)
            .finish()
    }
}

impl<E: Embedder> PersonalityAnalyzer<E> {
    /// Validates `config` and embeds the category profiles.
    pub fn new(
        catalog: Arc<CategoryCatalog>,
        embedder: E,
        config: AnalyzerConfig,
    ) -> Result<Self, ScoringError> {
        config.validate()?;

        let lexical = LexicalScorer::new(Arc::clone(&catalog));
        let semantic = SemanticScorer::new(Arc::clone(&catalog), embedder)?;

        Ok(Self {
            catalog,
            lexical,
            semantic,
            config,
        })
    }

    /// Analyzer over the built-in catalog with default policy.
    pub fn with_builtin_catalog(embedder: E) -> Result<Self, ScoringError> {
        Self::new(
            Arc::new(CategoryCatalog::builtin()),
            embedder,
            AnalyzerConfig::default(),
        )
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &AnalyzerConfig {
        &self.config
    }

    pub fn lexical(&self) -> &LexicalScorer {
        &self.lexical
    }

    pub fn semantic(&self) -> &SemanticScorer<E> {
        &self.semantic
    }

    /// Classifies `text`.
    ///
    /// Trimmed inputs shorter than `min_text_chars` return the neutral fallback without touching
    /// the embedder. Otherwise lexical and semantic scores are blended, normalized, and reduced
    /// to a dominant category and a confidence. Only embedding failures are errors.
    pub fn analyze(&self, text: &str) -> Result<AnalysisResult, ScoringError> {
        let char_count = text.trim().chars().count();
        if char_count < self.config.min_text_chars {
            warn!(
                char_count,
                min_text_chars = self.config.min_text_chars,
                "Input below minimum length, using neutral fallback"
            );
            return Ok(self.short_input_result());
        }

        let normalized = normalize_text(text);
        let lexical = self.lexical.score(&normalized);
        let semantic = self.semantic.score(&normalized)?;
        let blended = self.blend(&lexical, &semantic);

        let (distribution, basis) = match ScoreDistribution::normalize(&blended) {
            Some(distribution) => (distribution, AnalysisBasis::Scored),
            None => {
                warn!(
                    char_count,
                    "All blended scores are zero, using uniform distribution"
                );
                (
                    ScoreDistribution::uniform(&self.catalog),
                    AnalysisBasis::ZeroSignal,
                )
            }
        };

        let result = self.finalize(distribution, basis);

        debug!(
            dominant = result.dominant_category(),
            confidence = result.confidence(),
            basis = ?result.basis(),
            "Analysis complete"
        );

        Ok(result)
    }

    /// Runs [`analyze`](Self::analyze) on each text; one result per input, in order.
    pub fn analyze_batch(&self, texts: &[&str]) -> Vec<Result<AnalysisResult, ScoringError>> {
        texts.iter().map(|text| self.analyze(text)).collect()
    }

    /// Blends lexical and semantic scores per category.
    ///
    /// Negative semantic similarity is clamped to 0 first, so a blended score is never negative.
    pub fn blend(&self, lexical: &CategoryScores, semantic: &CategoryScores) -> CategoryScores {
        let entries = lexical
            .iter()
            .zip(semantic.values())
            .map(|((name, lex), sem)| {
                let score =
                    self.config.lexical_weight * lex + self.config.semantic_weight * sem.max(0.0);
                (name.to_string(), score)
            })
            .collect();

        CategoryScores::from_entries(entries)
    }

    /// [`compatibility`] plus a check that non-empty vectors match this catalog's size.
    pub fn compatibility(&self, a: &[f64], b: &[f64]) -> Result<f64, ScoringError> {
        for vector in [a, b] {
            if !vector.is_empty() && vector.len() != self.catalog.len() {
                return Err(ScoringError::MalformedVector {
                    reason: format!(
                        "expected {} components, got {}",
                        self.catalog.len(),
                        vector.len()
                    ),
                });
            }
        }

        compatibility(a, b)
    }

    fn short_input_result(&self) -> AnalysisResult {
        let distribution = ScoreDistribution::uniform(&self.catalog);
        let dominant = self.catalog.default_category().to_string();
        let description = self
            .catalog
            .description(&dominant)
            .unwrap_or_default()
            .to_string();
        let vector = distribution.to_personality_vector(&self.catalog);

        AnalysisResult::new(
            dominant,
            description,
            distribution,
            vector,
            self.config.fallback_confidence,
            AnalysisBasis::ShortInput,
        )
    }

    fn finalize(&self, distribution: ScoreDistribution, basis: AnalysisBasis) -> AnalysisResult {
        let dominant = distribution
            .dominant()
            .map(|(name, _)| name.to_string())
            .unwrap_or_else(|| self.catalog.default_category().to_string());
        let description = self
            .catalog
            .description(&dominant)
            .unwrap_or_default()
            .to_string();
        let confidence = distribution.confidence();
        let vector = distribution.to_personality_vector(&self.catalog);

        AnalysisResult::new(dominant, description, distribution, vector, confidence, basis)
    }
}
