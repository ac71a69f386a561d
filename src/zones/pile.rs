//! Ordered card sequences.
//!
//! A `Pile` is the storage behind the deck, the hand and the discard pile.
//! It supports:
//! - Insertion at either end with explicit position control
//! - Removal by card id, preserving the relative order of the rest
//! - First-match search from the front
//!
//! Backed by `im::Vector`, so cloning a pile for a snapshot is O(1).

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;

/// Where to insert a card into a pile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PilePosition {
    /// Index 0. For the deck this is the next card to draw.
    Front,
    /// Last index. For the discard pile this is the face-up top card.
    Back,
}

/// Ordered sequence of card ids without duplicates.
///
/// ## Usage
///
/// ```
/// use pathology_cards::cards::CardId;
/// use pathology_cards::zones::{Pile, PilePosition};
///
/// let mut deck = Pile::from_ids([CardId::new(1), CardId::new(2)]);
/// deck.insert(CardId::new(3), PilePosition::Front);
///
/// assert_eq!(deck.front(), Some(CardId::new(3)));
/// assert_eq!(deck.take_first(|id| id.raw() < 3), Some(CardId::new(1)));
/// assert_eq!(deck.to_vec(), vec![CardId::new(3), CardId::new(2)]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pile {
    cards: Vector<CardId>,
}

impl Pile {
    /// Create an empty pile.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pile holding `ids` in the given order.
    #[must_use]
    pub fn from_ids(ids: impl IntoIterator<Item = CardId>) -> Self {
        Self {
            cards: ids.into_iter().collect(),
        }
    }

    /// Insert a card at one end.
    ///
    /// Panics if the card is already in the pile.
    pub fn insert(&mut self, card: CardId, position: PilePosition) {
        if self.contains(card) {
            panic!("Card {} already in pile", card);
        }
        match position {
            PilePosition::Front => self.cards.push_front(card),
            PilePosition::Back => self.cards.push_back(card),
        }
    }

    /// Remove a card wherever it sits.
    ///
    /// Returns false if the card was not in the pile.
    pub fn remove(&mut self, card: CardId) -> bool {
        match self.position(card) {
            Some(index) => {
                self.cards.remove(index);
                true
            }
            None => false,
        }
    }

    /// Remove and return the first card (from the front) matching `predicate`.
    pub fn take_first<F>(&mut self, predicate: F) -> Option<CardId>
    where
        F: Fn(CardId) -> bool,
    {
        let index = self.cards.iter().position(|&id| predicate(id))?;
        Some(self.cards.remove(index))
    }

    /// Remove and return the last card.
    pub fn pop_back(&mut self) -> Option<CardId> {
        self.cards.pop_back()
    }

    /// Move every card of `other` to the back of this pile, leaving `other` empty.
    pub fn append(&mut self, other: &mut Pile) {
        self.cards.append(std::mem::take(&mut other.cards));
    }

    /// Index of a card, 0 = front.
    #[must_use]
    pub fn position(&self, card: CardId) -> Option<usize> {
        self.cards.index_of(&card)
    }

    /// Check if the pile holds a card.
    #[must_use]
    pub fn contains(&self, card: CardId) -> bool {
        self.cards.contains(&card)
    }

    /// First card.
    #[must_use]
    pub fn front(&self) -> Option<CardId> {
        self.cards.front().copied()
    }

    /// Last card.
    #[must_use]
    pub fn back(&self) -> Option<CardId> {
        self.cards.back().copied()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the pile is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate front to back.
    pub fn iter(&self) -> impl Iterator<Item = CardId> + '_ {
        self.cards.iter().copied()
    }

    /// Copy the pile into a `Vec`, front first.
    #[must_use]
    pub fn to_vec(&self) -> Vec<CardId> {
        self.iter().collect()
    }

    /// Reorder the pile in place with `reorder`.
    pub fn reorder<F>(&mut self, reorder: F)
    where
        F: FnOnce(&mut [CardId]),
    {
        let mut ids = self.to_vec();
        reorder(&mut ids);
        self.cards = ids.into_iter().collect();
    }
}
