//! Shuffling and random number generation.
//!
//! The shuffle is the only nondeterministic element of the card table, so it
//! sits behind the [`Shuffler`] trait. Production code uses [`GameRng`]
//! (ChaCha8, seeded by the caller); tests inject [`IdentityShuffle`] or
//! [`ReverseShuffle`] to get a fixed permutation.
//!
//! ```
//! use pathology_cards::cards::CardId;
//! use pathology_cards::core::{GameRng, Shuffler};
//!
//! let mut rng1 = GameRng::new(42);
//! let mut rng2 = GameRng::new(42);
//!
//! let mut a: Vec<CardId> = (1..=6).map(CardId::new).collect();
//! let mut b = a.clone();
//! rng1.shuffle(&mut a);
//! rng2.shuffle(&mut b);
//!
//! // Same seed, same permutation
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use crate::cards::CardId;

/// Source of uniform random permutations for card sequences.
///
/// Implementations must give every permutation equal probability
/// (Fisher-Yates or equivalent) unless they exist to pin an order in tests.
pub trait Shuffler {
    /// Permute `cards` in place.
    fn shuffle(&mut self, cards: &mut [CardId]);
}

/// Deterministic RNG backing the default shuffler.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl Shuffler for GameRng {
    fn shuffle(&mut self, cards: &mut [CardId]) {
        cards.shuffle(&mut self.inner);
    }
}

/// Leaves every sequence in its current order.
///
/// A fresh game then deals the corpus in enumeration order.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityShuffle;

impl Shuffler for IdentityShuffle {
    fn shuffle(&mut self, _cards: &mut [CardId]) {}
}

/// Reverses every sequence it is asked to shuffle.
#[derive(Clone, Copy, Debug, Default)]
pub struct ReverseShuffle;

impl Shuffler for ReverseShuffle {
    fn shuffle(&mut self, cards: &mut [CardId]) {
        cards.reverse();
    }
}

impl<S: Shuffler + ?Sized> Shuffler for &mut S {
    fn shuffle(&mut self, cards: &mut [CardId]) {
        (**self).shuffle(cards);
    }
}
