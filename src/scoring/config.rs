use crate::constants::{
    DEFAULT_FALLBACK_CONFIDENCE, DEFAULT_LEXICAL_WEIGHT, DEFAULT_MIN_TEXT_CHARS,
    DEFAULT_SEMANTIC_WEIGHT,
};

use super::error::ScoringError;

/// Policy knobs for [`PersonalityAnalyzer`](super::PersonalityAnalyzer).
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyzerConfig {
    /// Weight of the keyword score in the blend. Default: `0.6`.
    pub lexical_weight: f64,
    /// Weight of the (clamped) semantic score in the blend. Default: `0.4`.
    pub semantic_weight: f64,
    /// Trimmed inputs shorter than this (in chars) get the neutral fallback. Default: `20`.
    pub min_text_chars: usize,
    /// Confidence reported by the short-input fallback. Default: `0.3`.
    pub fallback_confidence: f64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            lexical_weight: DEFAULT_LEXICAL_WEIGHT,
            semantic_weight: DEFAULT_SEMANTIC_WEIGHT,
            min_text_chars: DEFAULT_MIN_TEXT_CHARS,
            fallback_confidence: DEFAULT_FALLBACK_CONFIDENCE,
        }
    }
}

impl AnalyzerConfig {
    pub const ENV_LEXICAL_WEIGHT: &'static str = "HUEMATCH_LEXICAL_WEIGHT";
    pub const ENV_SEMANTIC_WEIGHT: &'static str = "HUEMATCH_SEMANTIC_WEIGHT";
    pub const ENV_MIN_TEXT_CHARS: &'static str = "HUEMATCH_MIN_TEXT_CHARS";
    pub const ENV_FALLBACK_CONFIDENCE: &'static str = "HUEMATCH_FALLBACK_CONFIDENCE";

    /// Reads overrides from the environment; unparsable values keep their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            lexical_weight: parse_env(Self::ENV_LEXICAL_WEIGHT).unwrap_or(defaults.lexical_weight),
            semantic_weight: parse_env(Self::ENV_SEMANTIC_WEIGHT)
                .unwrap_or(defaults.semantic_weight),
            min_text_chars: parse_env(Self::ENV_MIN_TEXT_CHARS).unwrap_or(defaults.min_text_chars),
            fallback_confidence: parse_env(Self::ENV_FALLBACK_CONFIDENCE)
                .unwrap_or(defaults.fallback_confidence),
        }
    }

    pub fn with_weights(mut self, lexical_weight: f64, semantic_weight: f64) -> Self {
        self.lexical_weight = lexical_weight;
        self.semantic_weight = semantic_weight;
        self
    }

    pub fn with_min_text_chars(mut self, min_text_chars: usize) -> Self {
        self.min_text_chars = min_text_chars;
        self
    }

    pub fn with_fallback_confidence(mut self, fallback_confidence: f64) -> Self {
        self.fallback_confidence = fallback_confidence;
        self
    }

    pub fn validate(&self) -> Result<(), ScoringError> {
        for (name, value) in [
            ("lexical_weight", self.lexical_weight),
            ("semantic_weight", self.semantic_weight),
            ("fallback_confidence", self.fallback_confidence),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(ScoringError::InvalidConfig {
                    reason: format!("{name} must be between 0.0 and 1.0, got {value}"),
                });
            }
        }

        if self.lexical_weight + self.semantic_weight <= 0.0 {
            return Err(ScoringError::InvalidConfig {
                reason: "lexical_weight and semantic_weight cannot both be zero".to_string(),
            });
        }

        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
