//! Environment-backed configuration.
//!
//! Every setting has a default. Override with `HUEMATCH_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use tracing::info;

use crate::catalog::CategoryCatalog;
use crate::embedding::EmbedderConfig;
use crate::scoring::AnalyzerConfig;

/// Process configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `HUEMATCH_*` overrides on top of defaults.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Embedding model location and limits. No model directory means stub mode.
    pub embedder: EmbedderConfig,

    /// JSON catalog file. `None` uses the built-in eight-colour catalog.
    pub catalog_path: Option<PathBuf>,

    /// Blend weights and short-input policy.
    pub analyzer: AnalyzerConfig,
}

impl Config {
    pub const ENV_CATALOG_PATH: &'static str = "HUEMATCH_CATALOG_PATH";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Self {
        Self {
            embedder: EmbedderConfig::from_env(),
            catalog_path: Self::parse_optional_path_from_env(Self::ENV_CATALOG_PATH),
            analyzer: AnalyzerConfig::from_env(),
        }
    }

    pub fn with_model_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.embedder.model_dir = Some(path.into());
        self
    }

    pub fn with_catalog_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.catalog_path = Some(path.into());
        self
    }

    pub fn with_analyzer(mut self, analyzer: AnalyzerConfig) -> Self {
        self.analyzer = analyzer;
        self
    }

    /// Model directory, if one is configured.
    pub fn model_path(&self) -> Option<&PathBuf> {
        self.embedder.model_dir.as_ref()
    }

    /// Validates paths and policy values (reads no file contents).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = self.model_path() {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }
        self.embedder.validate()?;

        if let Some(ref path) = self.catalog_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_file() {
                return Err(ConfigError::NotAFile { path: path.clone() });
            }
        }

        self.analyzer.validate()?;

        Ok(())
    }

    /// Embedder settings to pass to [`load_embedder`](crate::embedding::load_embedder).
    pub fn embedder_config(&self) -> EmbedderConfig {
        self.embedder.clone()
    }

    /// Loads the configured catalog file, or the built-in catalog when none is set.
    pub fn load_catalog(&self) -> Result<CategoryCatalog, ConfigError> {
        match &self.catalog_path {
            Some(path) => Ok(CategoryCatalog::load(path)?),
            None => {
                info!("No catalog path configured, using built-in catalog");
                Ok(CategoryCatalog::builtin())
            }
        }
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }
}
