//! Cumulative round scoring.

use crate::types::{Mark, Outcome};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Round tallies since the last full reset.
///
/// Counters only ever grow by one per completed round; [`Score::reset`] is
/// the only way back to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Score {
    /// Rounds won by X.
    x: u32,
    /// Rounds won by O.
    o: u32,
    /// Drawn rounds.
    draw: u32,
}

impl Score {
    /// Creates a zeroed score.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed round.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Winner(Mark::X) => &mut self.x,
            Outcome::Winner(Mark::O) => &mut self.o,
            Outcome::Draw => &mut self.draw,
        };
        *counter = counter.saturating_add(1);
        debug!(x = self.x, o = self.o, draw = self.draw, "Score updated");
    }

    /// Number of completed rounds.
    pub fn total(&self) -> u32 {
        self.x + self.o + self.draw
    }

    /// Zeroes every counter.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
