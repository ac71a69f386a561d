//! Read-only table snapshot for the presentation layer.
//!
//! Face-down information stays hidden: the deck is exposed as a count only,
//! and the discard pile as a count plus its top card.

use serde::Serialize;

use super::state::GameState;
use crate::cards::{CardDefinition, CardRegistry, Category};
use crate::zones::Zone;

/// What the player can see.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView<'a> {
    pub deck_count: usize,
    pub current: Option<&'a CardDefinition>,
    pub hand: Vec<&'a CardDefinition>,
    pub discard_count: usize,
    pub discard_top: Option<&'a CardDefinition>,
    pub selected: Option<&'a CardDefinition>,
    /// Zone of the selected card: current, hand or discard (top).
    pub selected_zone: Option<Zone>,
    pub category_filter: Option<Category>,
    pub animating: bool,
}

impl<'a> TableView<'a> {
    /// Build a snapshot of `state`.
    #[must_use]
    pub fn new(registry: &'a CardRegistry, state: &GameState, animating: bool) -> Self {
        let selected = state.selected();

        Self {
            deck_count: state.deck().len(),
            current: state.current().and_then(|id| registry.get(id)),
            hand: state.hand().iter().filter_map(|id| registry.get(id)).collect(),
            discard_count: state.discard().len(),
            discard_top: state.discard_top().and_then(|id| registry.get(id)),
            selected: selected.and_then(|id| registry.get(id)),
            selected_zone: selected.and_then(|id| state.locate(id)),
            category_filter: state.category_filter(),
            animating,
        }
    }

    /// Keep is offered while the current card has focus.
    #[must_use]
    pub fn can_keep(&self) -> bool {
        self.current.is_some() && self.selected_zone == Some(Zone::Current)
    }

    /// Discard is offered for a focused current card or hand card.
    #[must_use]
    pub fn can_discard(&self) -> bool {
        matches!(self.selected_zone, Some(Zone::Current | Zone::Hand))
    }

    /// The discard pile can be clicked whenever it has cards.
    #[must_use]
    pub fn can_reclaim(&self) -> bool {
        self.discard_count > 0
    }

    /// The empty table slot offers a draw while the deck has cards.
    #[must_use]
    pub fn can_draw(&self) -> bool {
        self.current.is_none() && self.deck_count > 0
    }

    /// The discard top is shown face up only while it has focus.
    #[must_use]
    pub fn is_discard_top_selected(&self) -> bool {
        self.selected_zone == Some(Zone::Discard)
    }
}
