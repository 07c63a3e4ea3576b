use std::fmt;

use serde::de::{Error as _, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::catalog::CategoryCatalog;
use crate::constants::DISTRIBUTION_TOLERANCE;

use super::compatibility::compatibility;
use super::error::ScoringError;

fn serialize_entries<S: Serializer>(
    entries: &[(String, f64)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(entries.len()))?;
    for (name, score) in entries {
        map.serialize_entry(name, score)?;
    }
    map.end()
}

/// Reads a `{name: score}` map, keeping document order and rejecting repeated names.
fn deserialize_entries<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(String, f64)>, D::Error> {
    struct EntriesVisitor;

    impl<'de> Visitor<'de> for EntriesVisitor {
        type Value = Vec<(String, f64)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map of category name to score")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut entries: Vec<(String, f64)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some((name, score)) = map.next_entry::<String, f64>()? {
                if entries.iter().any(|(n, _)| *n == name) {
                    return Err(A::Error::custom(format!("duplicate category '{name}'")));
                }
                entries.push((name, score));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(EntriesVisitor)
}

/// Per-category scores in catalog declaration order (not normalized).
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    entries: Vec<(String, f64)>,
}

impl CategoryScores {
    pub(crate) fn from_entries(entries: Vec<(String, f64)>) -> Self {
        Self { entries }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.entries.iter().map(|(_, s)| *s)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.values().sum()
    }
}

impl Serialize for CategoryScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(&self.entries, serializer)
    }
}

impl<'de> Deserialize<'de> for CategoryScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserialize_entries(deserializer).map(Self::from_entries)
    }
}

/// Finalized distribution: one non-negative entry per catalog category, summing to 1.0.
///
/// Entries keep catalog declaration order, which is also the dominant-category tie-break order.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreDistribution {
    entries: Vec<(String, f64)>,
}

impl ScoreDistribution {
    /// Equal mass `1 / len` on every category.
    pub fn uniform(catalog: &CategoryCatalog) -> Self {
        let mass = 1.0 / catalog.len() as f64;
        Self {
            entries: catalog.names().map(|n| (n.to_string(), mass)).collect(),
        }
    }

    /// Divides every score by the total. Returns `None` when the total is not positive, which
    /// leaves the fallback decision to the caller.
    pub fn normalize(scores: &CategoryScores) -> Option<Self> {
        let total = scores.sum();
        if total <= 0.0 || !total.is_finite() {
            return None;
        }

        Some(Self {
            entries: scores
                .entries
                .iter()
                .map(|(name, score)| (name.clone(), score / total))
                .collect(),
        })
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.entries.iter().map(|(n, s)| (n.as_str(), *s))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sum(&self) -> f64 {
        self.entries.iter().map(|(_, s)| s).sum()
    }

    /// Non-negative entries summing to 1.0 within [`DISTRIBUTION_TOLERANCE`].
    pub fn is_finalized(&self) -> bool {
        !self.entries.is_empty()
            && self.entries.iter().all(|(_, s)| *s >= 0.0)
            && (self.sum() - 1.0).abs() <= DISTRIBUTION_TOLERANCE
    }

    /// Highest-scoring category; on ties the first in declaration order wins.
    pub fn dominant(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (name, score) in self.iter() {
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((name, score)),
            }
        }
        best
    }

    /// Gap between the two highest scores (the top score itself for a single category).
    pub fn confidence(&self) -> f64 {
        let mut values: Vec<f64> = self.entries.iter().map(|(_, s)| *s).collect();
        values.sort_by(|a, b| b.total_cmp(a));

        let confidence = match values.as_slice() {
            [] => 0.0,
            [only] => *only,
            [first, second, ..] => first - second,
        };

        confidence.clamp(0.0, 1.0)
    }

    /// Reads the distribution in category-name ascending order.
    pub fn to_personality_vector(&self, catalog: &CategoryCatalog) -> PersonalityVector {
        PersonalityVector(
            catalog
                .sorted_indices()
                .iter()
                .filter_map(|&i| self.entries.get(i).map(|(_, s)| *s))
                .collect(),
        )
    }
}

impl Serialize for ScoreDistribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_entries(&self.entries, serializer)
    }
}

/// Accepts only finalized distributions, so a persisted distribution reads back with the same
/// guarantees it was written with.
impl<'de> Deserialize<'de> for ScoreDistribution {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let distribution = Self {
            entries: deserialize_entries(deserializer)?,
        };
        if !distribution.is_finalized() {
            return Err(D::Error::custom(
                "distribution must be non-empty, non-negative and sum to 1.0",
            ));
        }
        Ok(distribution)
    }
}

/// Distribution values ordered by category name ascending.
///
/// The fixed ordering is what makes vectors from independent analyses comparable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonalityVector(Vec<f64>);

impl PersonalityVector {
    pub fn new(values: Vec<f64>) -> Self {
        Self(values)
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<f64> {
        self.0
    }

    /// Compatibility with another vector, see [`compatibility`].
    pub fn compatibility(&self, other: &PersonalityVector) -> Result<f64, ScoringError> {
        compatibility(&self.0, &other.0)
    }
}

impl From<Vec<f64>> for PersonalityVector {
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl AsRef<[f64]> for PersonalityVector {
    fn as_ref(&self) -> &[f64] {
        &self.0
    }
}

/// Which branch produced an [`AnalysisResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisBasis {
    /// Lexical and semantic scores were blended and normalized.
    Scored,
    /// Input was too short to score; neutral fallback.
    ShortInput,
    /// Every blended score was zero; uniform fallback.
    ZeroSignal,
}

impl AnalysisBasis {
    pub fn is_fallback(&self) -> bool {
        !matches!(self, AnalysisBasis::Scored)
    }
}

/// Outcome of one analysis. Created once per input and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    dominant_category: String,
    description: String,
    distribution: ScoreDistribution,
    personality_vector: PersonalityVector,
    confidence: f64,
    basis: AnalysisBasis,
}

impl AnalysisResult {
    pub(crate) fn new(
        dominant_category: String,
        description: String,
        distribution: ScoreDistribution,
        personality_vector: PersonalityVector,
        confidence: f64,
        basis: AnalysisBasis,
    ) -> Self {
        Self {
            dominant_category,
            description,
            distribution,
            personality_vector,
            confidence,
            basis,
        }
    }

    pub fn dominant_category(&self) -> &str {
        &self.dominant_category
    }

    /// Display description of the dominant category.
    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn distribution(&self) -> &ScoreDistribution {
        &self.distribution
    }

    pub fn personality_vector(&self) -> &PersonalityVector {
        &self.personality_vector
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn basis(&self) -> AnalysisBasis {
        self.basis
    }

    /// Splits the result into its persisted parts.
    pub fn into_parts(self) -> (String, ScoreDistribution, PersonalityVector, f64) {
        (
            self.dominant_category,
            self.distribution,
            self.personality_vector,
            self.confidence,
        )
    }
}

impl fmt::Display for AnalysisResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) confidence {:.2}",
            self.dominant_category, self.description, self.confidence
        )
    }
}
