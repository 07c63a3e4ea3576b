use std::fmt;

use thiserror::Error;

use crate::embedding::EmbeddingError;

/// Message shown to end users when the embedding capability is down.
pub const ANALYSIS_UNAVAILABLE: &str = "analysis temporarily unavailable";

/// Where in the pipeline an embedding call failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScoringStage {
    /// Embedding the caller's text.
    InputText,
    /// Embedding all representative texts in one batch.
    CategoryProfiles,
    /// Embedding a category's representative text.
    CategoryProfile { category: String },
}

impl fmt::Display for ScoringStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringStage::InputText => write!(f, "input text embedding"),
            ScoringStage::CategoryProfiles => write!(f, "category profile embedding"),
            ScoringStage::CategoryProfile { category } => {
                write!(f, "category profile embedding ({})", category)
            }
        }
    }
}

#[derive(Debug, Error)]
pub enum ScoringError {
    /// The embedding capability failed or returned a degenerate vector.
    #[error("embedding failed during {stage}: {source}")]
    EmbeddingFailed {
        stage: ScoringStage,
        #[source]
        source: EmbeddingError,
    },

    /// Personality vectors violate the input contract (e.g. mismatched lengths).
    #[error("malformed vector input: {reason}")]
    MalformedVector { reason: String },

    /// Analyzer policy values are out of range.
    #[error("invalid analyzer configuration: {reason}")]
    InvalidConfig { reason: String },
}

impl ScoringError {
    pub(crate) fn embedding(stage: ScoringStage, source: EmbeddingError) -> Self {
        ScoringError::EmbeddingFailed { stage, source }
    }

    /// Returns `true` for failures of the embedding capability (as opposed to caller input).
    pub fn is_embedding_failure(&self) -> bool {
        matches!(self, ScoringError::EmbeddingFailed { .. })
    }

    /// Text suitable for an end user: capability failures are reported generically, input
    /// problems keep their detail.
    pub fn user_message(&self) -> String {
        match self {
            ScoringError::EmbeddingFailed { .. } => ANALYSIS_UNAVAILABLE.to_string(),
            other => other.to_string(),
        }
    }
}
