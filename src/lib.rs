//! Huematch library crate (used by the CLI and integration tests).
//!
//! Classifies free-text self-descriptions into one of a fixed set of colour personalities and
//! scores how compatible two analyzed people are.
//!
//! # Public API Surface
//!
//! ## Analysis
//! - [`PersonalityAnalyzer`] - Blends keyword and embedding scores into an [`AnalysisResult`]
//! - [`AnalyzerConfig`] - Blend weights and the short-input policy
//! - [`compatibility`] - Rescaled cosine similarity of two [`PersonalityVector`]s
//!
//! ## Catalog
//! - [`CategoryCatalog`], [`Category`] - The colour personalities and their keywords
//!
//! ## Embedding
//! - [`Embedder`] - Text embedding capability
//! - [`BertEmbedder`] - Sentence embeddings from a local BERT-family model
//! - [`HashingEmbedder`] - Deterministic stub used without model files
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`] - `HUEMATCH_*` environment configuration
//!
//! # Example
//!
//! ```
//! use huematch::{HashingEmbedder, PersonalityAnalyzer};
//!
//! let analyzer = PersonalityAnalyzer::with_builtin_catalog(HashingEmbedder::default()).unwrap();
//! let result = analyzer
//!     .analyze("I'm ambitious and driven, I love to compete and achieve my goals.")
//!     .unwrap();
//! assert_eq!(result.dominant_category(), "Ruby Red");
//! ```

pub mod catalog;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod hashing;
pub mod scoring;
pub mod text;

pub use catalog::{BUILTIN_DEFAULT_CATEGORY, CatalogError, Category, CategoryCatalog};
pub use config::{Config, ConfigError};
pub use constants::{DimValidationError, validate_embedding_dim};
pub use embedding::{
    BertEmbedder, Embedder, EmbedderConfig, EmbeddingError, FnEmbedder, HashingEmbedder,
    load_embedder,
};
pub use hashing::hash_to_u64;
pub use scoring::{
    ANALYSIS_UNAVAILABLE, AnalysisBasis, AnalysisResult, AnalyzerConfig, PersonalityAnalyzer,
    PersonalityVector, ScoreDistribution, ScoringError, compatibility,
};
pub use text::normalize_text;
