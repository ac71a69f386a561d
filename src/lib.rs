//! # pathology-cards
//!
//! Card table state machine for the AI pathologies deck.
//!
//! A fixed corpus of cards, built once from a taxonomy, is dealt into a
//! face-down deck. The player draws one card at a time onto the table, keeps
//! it in their hand or discards it, and can pull cards back from the discard
//! pile, jump to any card by search, or restrict draws to one category.
//!
//! ## Design Principles
//!
//! 1. **One Aggregate**: `GameState` owns every card location and changes
//!    them together, so no half-applied transition is observable.
//!
//! 2. **Total Transitions**: Commands never fail. Requests that do not fit
//!    the current state are ignored and reported as `Outcome::Ignored`.
//!
//! 3. **Injected Randomness**: Shuffling goes through the `Shuffler` trait;
//!    tests pin the order, production seeds a ChaCha8 `GameRng`.
//!
//! 4. **Ids, Not Owners**: Piles and the selection hold `CardId`s; card
//!    values live once in the `CardRegistry`.
//!
//! ## Modules
//!
//! - `core`: RNG, `Shuffler`, configuration
//! - `cards`: Categories, card definitions, taxonomy loading, the corpus
//! - `zones`: The four card locations and ordered `Pile` storage
//! - `game`: State, commands, driver, animation flag, read-only view
//! - `search`: Free-text search with match context
//! - `collaborators`: Lead submission and report retrieval interfaces

pub mod cards;
pub mod collaborators;
pub mod core;
pub mod game;
pub mod search;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, IdentityShuffle, SearchConfig, Shuffler};

pub use crate::cards::{CardDefinition, CardId, CardRegistry, Category, Taxonomy, TaxonomyError};

pub use crate::zones::{Pile, PilePosition, Zone};

pub use crate::game::{
    AnimationTicket, Command, CommandRecord, Game, GameState, InvariantViolation, Outcome, TableView,
};

pub use crate::search::{search_cards, MatchField, SearchHit};

pub use crate::collaborators::{
    LeadCard, LeadRecord, LeadSubmitter, MemoryLeadStore, ReportService,
};
