//! Taxonomy documents: the static source of the card corpus.
//!
//! A taxonomy groups named entries ("diseases") under categories. Every
//! top-level entry becomes one card; ids follow category order, then entry
//! order. Subtypes and infection vectors are part of the document model
//! but do not produce cards of their own.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::category::{Category, UnknownCategory};
use super::definition::{CardDefinition, CardId};

const BUILTIN_TAXONOMY: &str = include_str!("../../data/taxonomy.json");

/// Errors raised while loading a taxonomy.
#[derive(Debug, Error)]
pub enum TaxonomyError {
    #[error("cannot read taxonomy file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed taxonomy: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    UnknownCategory(#[from] UnknownCategory),
    #[error("category {0} appears more than once")]
    DuplicateCategory(Category),
    #[error("taxonomy {0:?} contains no entries")]
    Empty(String),
}

/// A single named entry. May nest subtypes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub infection_vectors: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subtypes: Vec<Disease>,
}

/// A category block as written in the document.
///
/// The name stays a string here; it is checked against [`Category`]
/// when cards are extracted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxonomyCategory {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub diseases: Vec<Disease>,
}

/// Whole taxonomy document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Taxonomy {
    pub taxonomy_name: String,
    pub categories: Vec<TaxonomyCategory>,
}

impl Taxonomy {
    /// Parse a taxonomy from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, TaxonomyError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a taxonomy file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, TaxonomyError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// The taxonomy bundled with the crate.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_json_str(BUILTIN_TAXONOMY)
    }

    /// Enumerate the cards of this taxonomy in corpus order.
    ///
    /// Ids start at 1 and increase across categories.
    pub fn extract_cards(&self) -> Result<Vec<CardDefinition>, TaxonomyError> {
        let mut seen = Vec::with_capacity(self.categories.len());
        let mut cards = Vec::new();
        let mut next_id = 1u32;

        for block in &self.categories {
            let category: Category = block.name.parse()?;
            if seen.contains(&category) {
                return Err(TaxonomyError::DuplicateCategory(category));
            }
            seen.push(category);

            if block.diseases.is_empty() {
                log::warn!("category {category} has no entries");
            }

            for disease in &block.diseases {
                cards.push(CardDefinition::new(
                    CardId::new(next_id),
                    disease.name.clone(),
                    disease.description.clone(),
                    category,
                ));
                next_id += 1;
            }
        }

        if cards.is_empty() {
            return Err(TaxonomyError::Empty(self.taxonomy_name.clone()));
        }

        Ok(cards)
    }
}
