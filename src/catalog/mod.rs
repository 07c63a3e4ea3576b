//! Category catalog: the fixed set of colour personalities and their keywords.
//!
//! A catalog is built once at startup (either [`CategoryCatalog::builtin`] or a JSON file via
//! [`CategoryCatalog::load`]) and then shared read-only, typically behind an `Arc`. Nothing in
//! this crate mutates a catalog after construction.
//!
//! Declaration order matters: it is the tie-break order for the dominant category. Personality
//! vectors use a second order, category names ascending, exposed as [`CategoryCatalog::sorted_indices`].

mod builtin;
pub mod error;

#[cfg(test)]
mod tests;

pub use builtin::BUILTIN_DEFAULT_CATEGORY;
pub use error::CatalogError;

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

/// One personality archetype.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    name: String,
    keywords: Vec<String>,
    description: String,
}

impl Category {
    /// Builds and validates a category.
    pub fn new<N, I, S, D>(name: N, keywords: I, description: D) -> Result<Self, CatalogError>
    where
        N: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
        D: Into<String>,
    {
        let category = Self {
            name: name.into(),
            keywords: keywords.into_iter().map(Into::into).collect(),
            description: description.into(),
        };
        category.validate()?;
        Ok(category)
    }

    /// Checks the keyword invariants: non-empty, lowercase, trimmed, no duplicates.
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.name.trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }

        if self.keywords.is_empty() {
            return Err(CatalogError::NoKeywords {
                category: self.name.clone(),
            });
        }

        let mut seen = HashSet::with_capacity(self.keywords.len());
        for keyword in &self.keywords {
            let reason = if keyword.is_empty() {
                Some("keyword is empty")
            } else if keyword.trim() != keyword {
                Some("keyword has surrounding whitespace")
            } else if keyword.to_lowercase() != *keyword {
                Some("keyword is not lowercase")
            } else {
                None
            };

            if let Some(reason) = reason {
                return Err(CatalogError::InvalidKeyword {
                    category: self.name.clone(),
                    keyword: keyword.clone(),
                    reason,
                });
            }

            if !seen.insert(keyword.as_str()) {
                return Err(CatalogError::DuplicateKeyword {
                    category: self.name.clone(),
                    keyword: keyword.clone(),
                });
            }
        }

        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Keywords joined by single spaces; this is what gets embedded for the category.
    pub fn representative_text(&self) -> String {
        self.keywords.join(" ")
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default)]
    default_category: Option<String>,
    categories: Vec<Category>,
}

/// Immutable, validated set of categories.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryCatalog {
    default_category: String,
    categories: Vec<Category>,
    #[serde(skip)]
    sorted_indices: Vec<usize>,
}

impl CategoryCatalog {
    /// Builds a catalog from categories in declaration order.
    ///
    /// `default_category` names the neutral category used by the short-input fallback; `None`
    /// picks the first declared category.
    pub fn new(
        categories: Vec<Category>,
        default_category: Option<String>,
    ) -> Result<Self, CatalogError> {
        let first = categories.first().ok_or(CatalogError::Empty)?;
        let default_category = default_category.unwrap_or_else(|| first.name.clone());

        let mut names = HashSet::with_capacity(categories.len());
        for category in &categories {
            category.validate()?;
            if !names.insert(category.name.as_str()) {
                return Err(CatalogError::DuplicateCategory {
                    name: category.name.clone(),
                });
            }
        }

        if !names.contains(default_category.as_str()) {
            return Err(CatalogError::UnknownDefault {
                name: default_category,
            });
        }

        Ok(Self::from_validated(categories, default_category))
    }

    /// The eight colour personalities shipped with the crate.
    pub fn builtin() -> Self {
        Self::from_validated(
            builtin::builtin_categories(),
            BUILTIN_DEFAULT_CATEGORY.to_string(),
        )
    }

    /// Parses a catalog from JSON: `{"default_category": ..., "categories": [...]}`.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.categories, file.default_category)
    }

    /// Loads a catalog from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let catalog = Self::from_json_str(&content)?;

        info!(
            path = %path.display(),
            categories = catalog.len(),
            default_category = %catalog.default_category,
            "Category catalog loaded"
        );

        Ok(catalog)
    }

    fn from_validated(categories: Vec<Category>, default_category: String) -> Self {
        let mut sorted_indices: Vec<usize> = (0..categories.len()).collect();
        sorted_indices.sort_by(|&a, &b| categories[a].name.cmp(&categories[b].name));

        Self {
            default_category,
            categories,
            sorted_indices,
        }
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Categories in declaration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.categories.iter()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    /// Declaration index of `name`.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.categories.iter().position(|c| c.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn description(&self, name: &str) -> Option<&str> {
        self.get(name).map(Category::description)
    }

    /// Name of the neutral category used by the short-input fallback.
    pub fn default_category(&self) -> &str {
        &self.default_category
    }

    /// Category names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(Category::name)
    }

    /// Declaration indices ordered by category name ascending (personality vector order).
    pub fn sorted_indices(&self) -> &[usize] {
        &self.sorted_indices
    }

    /// Category names ascending; position `i` labels component `i` of a personality vector.
    pub fn sorted_names(&self) -> Vec<&str> {
        self.sorted_indices
            .iter()
            .map(|&i| self.categories[i].name.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a CategoryCatalog {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.categories.iter()
    }
}
