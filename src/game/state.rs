//! The table aggregate and its transitions.
//!
//! `GameState` owns the four card locations, the selection pointer and the
//! category filter. Every transition takes `&mut self` and updates all the
//! fields it touches before returning, so no half-applied state is ever
//! observable.
//!
//! ## Conventions
//!
//! - Deck front (index 0) is the next card to draw.
//! - Discard back (last index) is the face-up top card.
//! - Selection is an id, never a second owner of a card.
//! - Ill-formed requests return `Outcome::Ignored` and change nothing.

use serde::Serialize;
use thiserror::Error;

use super::command::Outcome;
use crate::cards::{CardId, CardRegistry, Category};
use crate::core::Shuffler;
use crate::zones::{Pile, PilePosition, Zone};

/// A broken table invariant, reported by `GameState::check_invariants`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    #[error("{card} is in both {first} and {second}")]
    Duplicated {
        card: CardId,
        first: Zone,
        second: Zone,
    },
    #[error("{0} has left the table")]
    Missing(CardId),
    #[error("{0} is not part of the corpus")]
    Foreign(CardId),
    #[error("selection {card} is not addressable (in {zone:?})")]
    IllegalSelection { card: CardId, zone: Option<Zone> },
    #[error("current card {card} is outside filter {filter}")]
    FilterMismatch { card: CardId, filter: Category },
}

/// Complete table state.
///
/// Created empty; `new_game` deals the corpus into the deck.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct GameState {
    deck: Pile,
    current: Option<CardId>,
    hand: Pile,
    discard: Pile,
    selected: Option<CardId>,
    category_filter: Option<Category>,
}

impl GameState {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Queries ===

    /// Face-down draw pile, front first.
    #[must_use]
    pub fn deck(&self) -> &Pile {
        &self.deck
    }

    /// The face-up card under consideration.
    #[must_use]
    pub fn current(&self) -> Option<CardId> {
        self.current
    }

    /// Kept cards, in the order they were kept.
    #[must_use]
    pub fn hand(&self) -> &Pile {
        &self.hand
    }

    /// Discard pile, oldest first.
    #[must_use]
    pub fn discard(&self) -> &Pile {
        &self.discard
    }

    /// Face-up top of the discard pile.
    #[must_use]
    pub fn discard_top(&self) -> Option<CardId> {
        self.discard.back()
    }

    /// The focused card, if any.
    #[must_use]
    pub fn selected(&self) -> Option<CardId> {
        self.selected
    }

    /// Active category filter.
    #[must_use]
    pub fn category_filter(&self) -> Option<Category> {
        self.category_filter
    }

    /// Find which zone holds a card.
    #[must_use]
    pub fn locate(&self, card: CardId) -> Option<Zone> {
        if self.current == Some(card) {
            Some(Zone::Current)
        } else if self.hand.contains(card) {
            Some(Zone::Hand)
        } else if self.deck.contains(card) {
            Some(Zone::Deck)
        } else if self.discard.contains(card) {
            Some(Zone::Discard)
        } else {
            None
        }
    }

    /// Whether a card can be focused: the current card, a hand card or the
    /// discard top. Buried cards are not addressable.
    #[must_use]
    pub fn is_addressable(&self, card: CardId) -> bool {
        self.current == Some(card) || self.hand.contains(card) || self.discard_top() == Some(card)
    }

    /// Total number of cards on the table.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.deck.len() + usize::from(self.current.is_some()) + self.hand.len() + self.discard.len()
    }

    // === Transitions ===

    /// Shuffle the whole corpus into the deck and clear everything else.
    pub fn new_game(&mut self, registry: &CardRegistry, shuffler: &mut impl Shuffler) -> Outcome {
        let mut ids = registry.ids();
        shuffler.shuffle(&mut ids);

        *self = Self {
            deck: Pile::from_ids(ids),
            ..Self::default()
        };

        log::info!("new game: {} cards in deck", self.deck.len());
        Outcome::Dealt
    }

    /// Draw the first deck card allowed by the category filter.
    ///
    /// Only valid on an empty table slot; with a current card present the
    /// request is ignored so that card is never overwritten.
    pub fn draw_next(&mut self, registry: &CardRegistry) -> Outcome {
        if let Some(current) = self.current {
            log::warn!("draw ignored: {current} is still on the table");
            return Outcome::Ignored;
        }
        self.draw_matching(registry)
    }

    /// Move the current card to the hand and draw its replacement.
    pub fn keep(&mut self, registry: &CardRegistry) -> Outcome {
        let Some(card) = self.current.take() else {
            log::warn!("keep ignored: no current card");
            return Outcome::Ignored;
        };

        self.hand.insert(card, PilePosition::Back);
        log::debug!("kept {card}");
        self.draw_matching(registry)
    }

    /// Discard the selected card.
    ///
    /// A selected hand card goes to the discard pile and focus returns to
    /// the current card. A selected current card goes to the discard pile
    /// and a replacement is drawn. Any other selection is ignored.
    pub fn discard_selected(&mut self, registry: &CardRegistry) -> Outcome {
        let Some(card) = self.selected else {
            log::warn!("discard ignored: nothing selected");
            return Outcome::Ignored;
        };

        if self.hand.remove(card) {
            self.discard.insert(card, PilePosition::Back);
            self.selected = self.current;
            log::debug!("discarded {card} from hand");
            Outcome::Applied
        } else if self.current == Some(card) {
            self.current = None;
            self.discard.insert(card, PilePosition::Back);
            log::debug!("discarded current card {card}");
            self.draw_matching(registry)
        } else {
            log::warn!("discard ignored: {card} is not in hand or on the table");
            Outcome::Ignored
        }
    }

    /// Focus a visible card.
    ///
    /// Ids that are not the current card, a hand card or the discard top are
    /// ignored.
    pub fn select(&mut self, card: CardId) -> Outcome {
        if !self.is_addressable(card) {
            log::warn!("select ignored: {card} is not addressable");
            return Outcome::Ignored;
        }
        self.selected = Some(card);
        Outcome::Selected(card)
    }

    /// Bring the discard top back as the current card.
    ///
    /// The current card returns to the front of the deck. A selected hand
    /// card is also returned, in front of it.
    pub fn reclaim_from_discard(&mut self, registry: &CardRegistry) -> Outcome {
        let Some(top) = self.discard.pop_back() else {
            log::warn!("reclaim ignored: discard pile is empty");
            return Outcome::Ignored;
        };

        let hand_card = self.selected.filter(|&id| self.hand.contains(id));

        self.return_current_to_deck();
        if let Some(card) = hand_card {
            self.hand.remove(card);
            self.deck.insert(card, PilePosition::Front);
        }

        log::debug!("reclaimed {top} from discard");
        self.promote(top, registry)
    }

    /// Bring any card forward by id.
    ///
    /// The current card and hand cards are only focused. A buried deck or
    /// discard card becomes the current card, and the previous current card
    /// returns to the front of the deck.
    pub fn search_jump_to(&mut self, card: CardId, registry: &CardRegistry) -> Outcome {
        match self.locate(card) {
            Some(Zone::Current | Zone::Hand) => {
                self.selected = Some(card);
                Outcome::Selected(card)
            }
            Some(zone @ (Zone::Deck | Zone::Discard)) => {
                self.return_current_to_deck();
                let pile = match zone {
                    Zone::Deck => &mut self.deck,
                    _ => &mut self.discard,
                };
                pile.remove(card);

                log::debug!("jumped to {card} from {zone}");
                self.promote(card, registry)
            }
            None => {
                log::warn!("search jump ignored: {card} is not on the table");
                Outcome::Ignored
            }
        }
    }

    /// Change the category filter.
    ///
    /// Buried discards are shuffled back into the deck, leaving only the
    /// top card on the pile. If the current card falls outside the new
    /// category it is discarded and the first matching deck card replaces
    /// it.
    pub fn set_category_filter(
        &mut self,
        category: Option<Category>,
        registry: &CardRegistry,
        shuffler: &mut impl Shuffler,
    ) -> Outcome {
        self.category_filter = category;

        let top = self.discard.pop_back();
        if !self.discard.is_empty() {
            log::debug!("shuffling {} buried discards into the deck", self.discard.len());
            self.deck.append(&mut self.discard);
            self.deck.reorder(|ids| shuffler.shuffle(ids));
        }
        if let Some(card) = top {
            self.discard.insert(card, PilePosition::Back);
        }

        match self.current {
            Some(card) if category.is_some() && !registry.matches(card, category) => {
                self.current = None;
                self.discard.insert(card, PilePosition::Back);
                log::debug!("{card} does not match the new filter, discarded");
                self.draw_matching(registry)
            }
            _ => Outcome::Applied,
        }
    }

    // === Helpers ===

    fn draw_matching(&mut self, registry: &CardRegistry) -> Outcome {
        let filter = self.category_filter;
        match self.deck.take_first(|id| registry.matches(id, filter)) {
            Some(card) => {
                self.current = Some(card);
                self.selected = Some(card);
                log::debug!("drew {card}, {} left in deck", self.deck.len());
                Outcome::Drawn(card)
            }
            None => {
                self.current = None;
                self.selected = None;
                log::debug!("nothing to draw (filter {filter:?})");
                Outcome::NothingToDraw
            }
        }
    }

    fn return_current_to_deck(&mut self) {
        if let Some(card) = self.current.take() {
            self.deck.insert(card, PilePosition::Front);
        }
    }

    /// Make `card` (already detached from every pile) the current card.
    ///
    /// An explicit promotion wins over the filter: if the card is outside
    /// the active category, the filter is lifted.
    fn promote(&mut self, card: CardId, registry: &CardRegistry) -> Outcome {
        if self.category_filter.is_some() && !registry.matches(card, self.category_filter) {
            log::info!("{card} is outside filter {:?}, lifting filter", self.category_filter);
            self.category_filter = None;
        }
        self.current = Some(card);
        self.selected = Some(card);
        Outcome::Promoted(card)
    }

    // === Invariants ===

    /// Check conservation, selection legality and filter consistency.
    ///
    /// Returns the first violation found.
    pub fn check_invariants(&self, registry: &CardRegistry) -> Result<(), InvariantViolation> {
        let placed = self
            .deck
            .iter()
            .map(|id| (id, Zone::Deck))
            .chain(self.current.map(|id| (id, Zone::Current)))
            .chain(self.hand.iter().map(|id| (id, Zone::Hand)))
            .chain(self.discard.iter().map(|id| (id, Zone::Discard)));

        let mut seen: rustc_hash::FxHashMap<CardId, Zone> = rustc_hash::FxHashMap::default();
        for (card, zone) in placed {
            if !registry.contains(card) {
                return Err(InvariantViolation::Foreign(card));
            }
            if let Some(first) = seen.insert(card, zone) {
                return Err(InvariantViolation::Duplicated {
                    card,
                    first,
                    second: zone,
                });
            }
        }

        if let Some(missing) = registry.iter().map(|c| c.id).find(|id| !seen.contains_key(id)) {
            return Err(InvariantViolation::Missing(missing));
        }

        if let Some(card) = self.selected {
            if !self.is_addressable(card) {
                return Err(InvariantViolation::IllegalSelection {
                    card,
                    zone: self.locate(card),
                });
            }
        }

        if let (Some(filter), Some(card)) = (self.category_filter, self.current) {
            if !registry.matches(card, Some(filter)) {
                return Err(InvariantViolation::FilterMismatch { card, filter });
            }
        }

        Ok(())
    }
}
