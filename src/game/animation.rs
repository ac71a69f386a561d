//! Draw animation flag.
//!
//! Purely cosmetic: the presentation layer shows a slide-in while the flag
//! is set and clears it when its timer fires. Each draw starts a new
//! generation, and only the ticket of the latest draw can clear the flag,
//! so a timer left over from an earlier draw never cuts a newer animation
//! short.

use serde::{Deserialize, Serialize};

/// Handle for one draw animation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnimationTicket(u64);

/// Animation flag owned by the most recent draw.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DrawAnimation {
    generation: u64,
    active: bool,
}

impl DrawAnimation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the animation for a new draw.
    pub fn start(&mut self) -> AnimationTicket {
        self.generation += 1;
        self.active = true;
        AnimationTicket(self.generation)
    }

    /// Clear the flag if `ticket` belongs to the latest draw.
    ///
    /// Returns true if the flag was cleared.
    pub fn finish(&mut self, ticket: AnimationTicket) -> bool {
        if self.active && ticket.0 == self.generation {
            self.active = false;
            true
        } else {
            false
        }
    }

    /// Stop any running animation; outstanding tickets become stale.
    pub fn cancel(&mut self) {
        self.generation += 1;
        self.active = false;
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticket of the running animation.
    #[must_use]
    pub fn ticket(&self) -> Option<AnimationTicket> {
        self.active.then_some(AnimationTicket(self.generation))
    }
}
