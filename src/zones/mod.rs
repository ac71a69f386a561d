//! Card locations on the table.
//!
//! Every card in play sits in exactly one of four zones. The deck, the hand
//! and the discard pile are ordered `Pile`s; the current card is a single
//! slot held directly by `GameState`.
//!
//! ## Key Types
//!
//! - `Zone`: Which of the four locations a card is in
//! - `Pile`: Ordered storage for the multi-card zones
//! - `PilePosition`: Front or back insertion

pub mod pile;

pub use pile::{Pile, PilePosition};

use serde::{Deserialize, Serialize};

/// The four card locations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Face-down draw pile.
    Deck,
    /// The face-up card under consideration.
    Current,
    /// Cards the player kept.
    Hand,
    /// Cards set aside; only the last one is face up.
    Discard,
}

impl Zone {
    /// Whether cards in this zone are hidden from the player.
    ///
    /// The discard pile counts as face-down: only its top card is shown,
    /// and that is decided per card, not per zone.
    #[must_use]
    pub const fn is_face_down(self) -> bool {
        matches!(self, Zone::Deck | Zone::Discard)
    }
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Zone::Deck => "deck",
            Zone::Current => "current",
            Zone::Hand => "hand",
            Zone::Discard => "discard",
        };
        f.write_str(name)
    }
}
