//! Catalog error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or loading a [`CategoryCatalog`](super::CategoryCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A catalog needs at least one category.
    #[error("catalog must contain at least one category")]
    Empty,

    /// Category names must be non-empty.
    #[error("category name must not be empty")]
    EmptyName,

    /// Two categories share a name.
    #[error("duplicate category name: {name}")]
    DuplicateCategory { name: String },

    /// A category was declared without keywords.
    #[error("category '{category}' has no keywords")]
    NoKeywords { category: String },

    /// A keyword is empty, not lowercase, or carries surrounding whitespace.
    #[error("category '{category}' has invalid keyword '{keyword}': {reason}")]
    InvalidKeyword {
        category: String,
        keyword: String,
        reason: &'static str,
    },

    /// A keyword appears twice within one category.
    #[error("category '{category}' lists keyword '{keyword}' more than once")]
    DuplicateKeyword { category: String, keyword: String },

    /// The designated default category is not in the catalog.
    #[error("default category '{name}' is not defined in the catalog")]
    UnknownDefault { name: String },

    /// Catalog file could not be read.
    #[error("failed to read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON could not be parsed.
    #[error("failed to parse catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
}
