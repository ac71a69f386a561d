//! Card definitions - immutable card values.
//!
//! A card is generated once from the taxonomy and never mutated or
//! duplicated afterwards. The table moves `CardId`s around; the
//! definitions stay in the `CardRegistry`.

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Unique, stable card identifier.
///
/// Assigned from enumeration order when the corpus is built, starting at 1.
/// The display form is the padded string id used by the presentation layer
/// and by lead records.
///
/// ```
/// use pathology_cards::cards::CardId;
///
/// let id = CardId::new(7);
/// assert_eq!(id.to_string(), "card-07");
/// assert_eq!(CardId::parse("card-07"), Some(id));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Parse the `card-NN` display form.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        let digits = s.strip_prefix("card-")?;
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        digits.parse().ok().map(Self)
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card-{:02}", self.0)
    }
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use pathology_cards::cards::{CardDefinition, CardId, Category};
///
/// let card = CardDefinition::new(
///     CardId::new(1),
///     "Hallucination",
///     "Confident output with no grounding in the input.",
///     Category::PerceptualRecognition,
/// );
///
/// assert!(card.is_in(Some(Category::PerceptualRecognition)));
/// assert!(card.is_in(None));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card.
    pub id: CardId,

    /// Card name.
    pub name: String,

    /// Card body text.
    pub description: String,

    /// Category the card belongs to.
    pub category: Category,
}

impl CardDefinition {
    /// Create a new card definition.
    #[must_use]
    pub fn new(
        id: CardId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category,
        }
    }

    /// Check the card against an optional category filter.
    ///
    /// `None` matches every card.
    #[must_use]
    pub fn is_in(&self, filter: Option<Category>) -> bool {
        filter.map_or(true, |category| self.category == category)
    }
}
