//! Personality scoring.
//!
//! Pipeline for one text:
//!
//! 1. Short-input guard: trimmed text under `min_text_chars` returns the catalog's default
//!    category with a uniform distribution and the fixed fallback confidence.
//! 2. [`LexicalScorer`]: fraction of each category's keywords present as whole words.
//! 3. [`SemanticScorer`]: cosine similarity between the text embedding and each category's
//!    profile embedding.
//! 4. [`PersonalityAnalyzer::blend`]: `lexical_weight * lexical + semantic_weight * max(semantic, 0)`.
//! 5. Normalization to a [`ScoreDistribution`]; an all-zero blend falls back to uniform.
//! 6. Dominant category (first maximum in catalog order), confidence (top-two gap), and the
//!    [`PersonalityVector`] (distribution read in category-name order).
//!
//! The two fallbacks stay separate: one is decided by input length before any scoring, the
//! other by the computed scores. [`AnalysisResult::basis`] records which one fired.
//!
//! [`compatibility`] compares two personality vectors independently of any analyzer.

pub mod analyzer;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod lexical;
pub mod semantic;
pub mod similarity;
pub mod types;


pub use analyzer::PersonalityAnalyzer;
pub use compatibility::compatibility;
pub use config::AnalyzerConfig;
pub use error::{ANALYSIS_UNAVAILABLE, ScoringError, ScoringStage};
pub use lexical::LexicalScorer;
pub use semantic::SemanticScorer;
pub use similarity::cosine_similarity;
pub use types::{AnalysisBasis, AnalysisResult, CategoryScores, PersonalityVector, ScoreDistribution};
