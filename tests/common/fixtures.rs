//! Fake embedders, catalogs and narratives.

use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use huematch::embedding::{Embedder, EmbeddingError};
use tempfile::TempDir;

pub const TEST_DIM: usize = 8;

/// One narrative per built-in colour, each using only that colour's keywords.
pub const NARRATIVES: [(&str, &str); 8] = [
    (
        "Ruby Red",
        "I'm ambitious and driven, I love to compete, lead, and achieve my goals through challenge.",
    ),
    (
        "Ocean Blue",
        "I care about people and listen with empathy and compassion.",
    ),
    (
        "Sunlight Yellow",
        "Travel and adventure give me freedom, I explore and stay optimistic.",
    ),
    (
        "Forest Green",
        "I seek balance, peace and harmony in nature, staying calm and patient.",
    ),
    (
        "Amber Gold",
        "I mentor and teach others, sharing wisdom and knowledge as a generous guide.",
    ),
    (
        "Lavender Purple",
        "I create art and design with vision, an intuitive and original artistic mind.",
    ),
    (
        "Coral Pink",
        "My friends say I am playful, cheerful and upbeat, we laugh with joy.",
    ),
    (
        "Earth Brown",
        "Family and roots matter, I am honest, loyal, practical and reliable.",
    ),
];

pub const TWO_COLOUR_CATALOG: &str = r#"{
    "default_category": "Slate Grey",
    "categories": [
        {"name": "Neon Green", "keywords": ["loud", "bold", "party"], "description": "The Spark"},
        {"name": "Slate Grey", "keywords": ["quiet", "steady", "reading"], "description": "The Calm Observer"}
    ]
}"#;

/// Writes `json` to a catalog file inside a fresh temp dir.
pub fn write_catalog(json: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join("catalog.json");
    fs::write(&path, json).expect("write catalog");
    (dir, path)
}

/// Returns the same non-zero vector for every text.
#[derive(Debug, Default)]
pub struct ConstantEmbedder;

impl Embedder for ConstantEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Ok(vec![1.0; TEST_DIM])
    }

    fn embedding_dim(&self) -> usize {
        TEST_DIM
    }
}

/// Fails every call, as an unreachable model backend would.
#[derive(Debug, Default)]
pub struct FailingEmbedder;

impl Embedder for FailingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        Err(EmbeddingError::InferenceFailed {
            reason: "backend unreachable".to_string(),
        })
    }

    fn embedding_dim(&self) -> usize {
        TEST_DIM
    }
}

/// Serves `healthy_calls` good vectors, then fails or degrades according to `mode`.
#[derive(Debug)]
pub struct DegradingEmbedder {
    healthy_calls: usize,
    calls: AtomicUsize,
    mode: Degradation,
}

#[derive(Debug, Clone, Copy)]
pub enum Degradation {
    /// Returns the zero vector.
    Zero,
    /// Returns a vector one component longer than before.
    WrongDimension,
    /// Returns an error.
    Fail,
}

impl DegradingEmbedder {
    pub fn new(healthy_calls: usize, mode: Degradation) -> Self {
        Self {
            healthy_calls,
            calls: AtomicUsize::new(0),
            mode,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Embedder for DegradingEmbedder {
    fn embed(&self, _text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.healthy_calls {
            return Ok(vec![1.0; TEST_DIM]);
        }

        match self.mode {
            Degradation::Zero => Ok(vec![0.0; TEST_DIM]),
            Degradation::WrongDimension => Ok(vec![1.0; TEST_DIM + 1]),
            Degradation::Fail => Err(EmbeddingError::InferenceFailed {
                reason: "backend went away".to_string(),
            }),
        }
    }

    fn embedding_dim(&self) -> usize {
        TEST_DIM
    }
}
