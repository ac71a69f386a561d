//! Player commands and their outcomes.
//!
//! A `Command` is what the presentation layer sends; an `Outcome` is what
//! the table reports back. Every applied command is kept as a
//! `CommandRecord` in the game's history.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Category};

/// Something the player asked the table to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Command {
    /// Reshuffle the corpus and clear the table.
    NewGame,
    /// Draw onto the empty table slot.
    DrawNext,
    /// Keep the current card.
    Keep,
    /// Discard the selected card.
    Discard,
    /// Focus a visible card.
    Select(CardId),
    /// Bring the discard top back to the table.
    ReclaimFromDiscard,
    /// Bring a card forward from wherever it is.
    SearchJumpTo(CardId),
    /// Change or clear the category filter.
    SetCategoryFilter(Option<Category>),
}

/// What a command did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A fresh game was dealt.
    Dealt,
    /// A card came off the deck onto the table.
    Drawn(CardId),
    /// A draw was attempted but no deck card qualified; the table slot is empty.
    NothingToDraw,
    /// A card was pulled from the discard pile or the deck out of turn.
    Promoted(CardId),
    /// Only the selection moved.
    Selected(CardId),
    /// The state changed without a new current card.
    Applied,
    /// The request did not apply to the current state; nothing changed.
    Ignored,
}

impl Outcome {
    /// Whether the command left the state untouched.
    #[must_use]
    pub fn is_ignored(self) -> bool {
        self == Outcome::Ignored
    }

    /// The card that became current, if any.
    #[must_use]
    pub fn new_current(self) -> Option<CardId> {
        match self {
            Outcome::Drawn(card) | Outcome::Promoted(card) => Some(card),
            _ => None,
        }
    }
}

/// A command in the game history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandRecord {
    /// Position in the history, starting at 0 for the deal.
    pub sequence: u32,
    pub command: Command,
    pub outcome: Outcome,
}
