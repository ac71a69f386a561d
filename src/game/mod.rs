//! The card table state machine.
//!
//! ## Key Types
//!
//! - `GameState`: Deck, current card, hand, discard pile, selection, filter
//! - `Game`: Driver owning the corpus, state, shuffler and animation
//! - `Command` / `Outcome`: What the player asks for, what happened
//! - `CommandRecord`: One entry of the game history
//! - `DrawAnimation`: Cosmetic draw flag owned by the latest draw
//! - `TableView`: Read-only snapshot for rendering
//!
//! ## Failure Semantics
//!
//! Transitions are total. A command that does not fit the current state
//! (keep with nothing on the table, discard a buried card, ...) returns
//! `Outcome::Ignored` and leaves the state untouched. An exhausted or
//! unsatisfiable draw is the represented outcome `NothingToDraw`, not an
//! error.

pub mod animation;
pub mod command;
pub mod engine;
pub mod state;
pub mod view;

pub use animation::{AnimationTicket, DrawAnimation};
pub use command::{Command, CommandRecord, Outcome};
pub use engine::Game;
pub use state::{GameState, InvariantViolation};
pub use view::TableView;
