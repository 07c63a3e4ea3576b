//! Keyword-fraction scoring.

use std::collections::HashSet;
use std::sync::Arc;

use crate::catalog::CategoryCatalog;
use crate::text::{normalize_text, tokenize};

use super::types::CategoryScores;

/// A catalog keyword after normalization: one token, or a run of tokens for phrases such as
/// `down-to-earth`.
#[derive(Debug, Clone)]
enum KeywordPattern {
    Token(String),
    Phrase(Vec<String>),
}

impl KeywordPattern {
    fn compile(keyword: &str) -> Option<Self> {
        let normalized = normalize_text(keyword);
        let mut tokens: Vec<String> = tokenize(&normalized).map(str::to_string).collect();
        match tokens.len() {
            0 => None,
            1 => tokens.pop().map(KeywordPattern::Token),
            _ => Some(KeywordPattern::Phrase(tokens)),
        }
    }

    fn matches(&self, words: &HashSet<&str>, tokens: &[&str]) -> bool {
        match self {
            KeywordPattern::Token(token) => words.contains(token.as_str()),
            KeywordPattern::Phrase(phrase) => tokens
                .windows(phrase.len())
                .any(|window| window.iter().zip(phrase).all(|(a, b)| *a == b.as_str())),
        }
    }
}

/// Scores text by the fraction of each category's keywords present as whole words.
#[derive(Debug, Clone)]
pub struct LexicalScorer {
    catalog: Arc<CategoryCatalog>,
    patterns: Vec<(Vec<KeywordPattern>, usize)>,
}

impl LexicalScorer {
    /// Precompiles keyword patterns for `catalog`.
    pub fn new(catalog: Arc<CategoryCatalog>) -> Self {
        let patterns = catalog
            .iter()
            .map(|category| {
                let compiled = category
                    .keywords()
                    .iter()
                    .filter_map(|k| KeywordPattern::compile(k))
                    .collect();
                (compiled, category.keywords().len())
            })
            .collect();

        Self { catalog, patterns }
    }

    pub fn catalog(&self) -> &CategoryCatalog {
        &self.catalog
    }

    /// Scores already-normalized text. Every value is in `[0, 1]`.
    pub fn score(&self, normalized: &str) -> CategoryScores {
        let tokens: Vec<&str> = tokenize(normalized).collect();
        let words: HashSet<&str> = tokens.iter().copied().collect();

        let entries = self
            .catalog
            .iter()
            .zip(&self.patterns)
            .map(|(category, (patterns, keyword_count))| {
                let matched = patterns
                    .iter()
                    .filter(|pattern| pattern.matches(&words, &tokens))
                    .count();
                let score = if *keyword_count == 0 {
                    0.0
                } else {
                    matched as f64 / *keyword_count as f64
                };
                (category.name().to_string(), score)
            })
            .collect();

        CategoryScores::from_entries(entries)
    }

    /// Normalizes raw text, then scores it.
    pub fn score_text(&self, text: &str) -> CategoryScores {
        self.score(&normalize_text(text))
    }
}
