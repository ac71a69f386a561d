//! Core building blocks: randomness and configuration.
//!
//! Everything here is independent of the card corpus. The table state
//! machine in `game` is parameterized over the `Shuffler` defined here.

pub mod config;
pub mod rng;

pub use config::{ConfigError, GameConfig, SearchConfig};
pub use rng::{GameRng, IdentityShuffle, ReverseShuffle, Shuffler};
