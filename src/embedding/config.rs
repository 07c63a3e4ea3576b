use std::path::{Path, PathBuf};

use crate::constants::{DEFAULT_EMBEDDING_DIM, DEFAULT_MAX_SEQ_LEN};
use crate::embedding::error::EmbeddingError;

/// Configuration for [`BertEmbedder`](super::BertEmbedder) and the stub fallback.
#[derive(Debug, Clone)]
pub struct EmbedderConfig {
    /// Model directory holding `config.json`, `model.safetensors` and `tokenizer.json`.
    /// `None` selects the deterministic stub embedder.
    pub model_dir: Option<PathBuf>,
    /// Max tokens per input; longer inputs are truncated.
    pub max_seq_len: usize,
    /// Output dimension of the stub embedder.
    pub stub_dim: usize,
}

impl Default for EmbedderConfig {
    fn default() -> Self {
        Self {
            model_dir: None,
            max_seq_len: DEFAULT_MAX_SEQ_LEN,
            stub_dim: DEFAULT_EMBEDDING_DIM,
        }
    }
}

impl EmbedderConfig {
    /// Env var used to locate the model directory.
    pub const ENV_MODEL_PATH: &'static str = "HUEMATCH_MODEL_PATH";
    /// Env var overriding the max sequence length.
    pub const ENV_MAX_SEQ_LEN: &'static str = "HUEMATCH_MAX_SEQ_LEN";

    /// Creates a config pointing at a model directory.
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
            ..Default::default()
        }
    }

    /// Stub-mode config (no model files required).
    pub fn stub() -> Self {
        Self::default()
    }

    /// Loads config from environment variables (missing values keep defaults).
    pub fn from_env() -> Self {
        let model_dir = std::env::var(Self::ENV_MODEL_PATH)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        let max_seq_len = std::env::var(Self::ENV_MAX_SEQ_LEN)
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(DEFAULT_MAX_SEQ_LEN);

        Self {
            model_dir,
            max_seq_len,
            ..Default::default()
        }
    }

    pub fn with_max_seq_len(mut self, max_seq_len: usize) -> Self {
        self.max_seq_len = max_seq_len;
        self
    }

    /// Returns `true` if no model directory is configured.
    pub fn is_stub(&self) -> bool {
        self.model_dir.is_none()
    }

    pub fn config_path(&self) -> Option<PathBuf> {
        self.model_dir.as_deref().map(|dir| dir.join("config.json"))
    }

    pub fn weights_path(&self) -> Option<PathBuf> {
        self.model_dir
            .as_deref()
            .map(|dir| dir.join("model.safetensors"))
    }

    pub fn tokenizer_path(&self) -> Option<PathBuf> {
        self.model_dir.as_deref().map(|dir| dir.join("tokenizer.json"))
    }

    /// Validates numeric limits and, when a model is configured, that its files exist.
    pub fn validate(&self) -> Result<(), EmbeddingError> {
        if self.max_seq_len == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "max_seq_len must be greater than 0".to_string(),
            });
        }

        if self.stub_dim == 0 {
            return Err(EmbeddingError::InvalidConfig {
                reason: "stub_dim must be greater than 0".to_string(),
            });
        }

        if let Some(dir) = &self.model_dir {
            if dir.as_os_str().is_empty() {
                return Err(EmbeddingError::InvalidConfig {
                    reason: "model_dir cannot be empty when provided".to_string(),
                });
            }
            if !dir.is_dir() {
                return Err(EmbeddingError::ModelNotFound { path: dir.clone() });
            }
            for required in ["config.json", "model.safetensors", "tokenizer.json"] {
                require_file(dir, required)?;
            }
        }

        Ok(())
    }
}

fn require_file(dir: &Path, name: &str) -> Result<(), EmbeddingError> {
    let path = dir.join(name);
    if path.is_file() {
        Ok(())
    } else {
        Err(EmbeddingError::ModelNotFound { path })
    }
}
