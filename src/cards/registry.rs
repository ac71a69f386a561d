//! Card registry: the corpus.
//!
//! The `CardRegistry` holds every card of the game in corpus order and
//! provides fast lookup by `CardId`. It is built once at startup and
//! never changes afterwards.

use rustc_hash::FxHashMap;

use super::category::Category;
use super::definition::{CardDefinition, CardId};
use super::taxonomy::{Taxonomy, TaxonomyError};

/// Ordered, immutable collection of all cards.
///
/// ## Example
///
/// ```
/// use pathology_cards::cards::{CardRegistry, CardDefinition, CardId, Category};
///
/// let mut registry = CardRegistry::new();
/// registry.register(CardDefinition::new(
///     CardId::new(1),
///     "Hallucination",
///     "Confident fiction.",
///     Category::PerceptualRecognition,
/// ));
///
/// let found = registry.get(CardId::new(1)).unwrap();
/// assert_eq!(found.name, "Hallucination");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<CardDefinition>,
    index: FxHashMap<CardId, usize>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the corpus from a taxonomy document.
    pub fn from_taxonomy(taxonomy: &Taxonomy) -> Result<Self, TaxonomyError> {
        let mut registry = Self::new();
        for card in taxonomy.extract_cards()? {
            registry.register(card);
        }
        log::info!(
            "loaded {} cards from taxonomy {:?}",
            registry.len(),
            taxonomy.taxonomy_name
        );
        Ok(registry)
    }

    /// Build the corpus from the bundled taxonomy.
    pub fn builtin() -> Result<Self, TaxonomyError> {
        Self::from_taxonomy(&Taxonomy::builtin()?)
    }

    /// Append a card to the corpus.
    ///
    /// Panics if a card with the same ID already exists.
    pub fn register(&mut self, card: CardDefinition) {
        if self.index.contains_key(&card.id) {
            panic!("Card with ID {} already registered", card.id);
        }
        self.index.insert(card.id, self.cards.len());
        self.cards.push(card);
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.index.get(&id).map(|&i| &self.cards[i])
    }

    /// Category of a card, if it is part of the corpus.
    #[must_use]
    pub fn category_of(&self, id: CardId) -> Option<Category> {
        self.get(id).map(|c| c.category)
    }

    /// Check a card against an optional category filter.
    ///
    /// Cards outside the corpus never match.
    #[must_use]
    pub fn matches(&self, id: CardId, filter: Option<Category>) -> bool {
        self.get(id).is_some_and(|c| c.is_in(filter))
    }

    /// Check if a card ID is registered.
    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.index.contains_key(&id)
    }

    /// Get the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over cards in corpus order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter()
    }

    /// All card IDs in corpus order.
    #[must_use]
    pub fn ids(&self) -> Vec<CardId> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Cards of one category, in corpus order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &CardDefinition> {
        self.cards.iter().filter(move |c| c.category == category)
    }
}
