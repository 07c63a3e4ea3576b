//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::embedding::EmbeddingError;
use crate::scoring::ScoringError;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Specified path does not exist on the filesystem.
    #[error("path does not exist: {path}")]
    PathNotFound { path: PathBuf },

    /// Path exists but is not a file (when a file was expected).
    #[error("path is not a file: {path}")]
    NotAFile { path: PathBuf },

    /// Path exists but is not a directory (when a directory was expected).
    #[error("path is not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Model directory is incomplete or limits are out of range.
    #[error("invalid embedder configuration: {0}")]
    Embedder(#[from] EmbeddingError),

    /// Blend weights or short-input policy are out of range.
    #[error(transparent)]
    Analyzer(#[from] ScoringError),

    /// Catalog file could not be read or failed validation.
    #[error("failed to load catalog: {0}")]
    Catalog(#[from] CatalogError),
}
