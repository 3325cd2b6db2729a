//! Error types for the game core.
//!
//! Rejected moves are not errors; see [`crate::MoveResult`]. These types
//! cover broken internal invariants only.

use derive_more::{Display, Error};

/// The opponent was asked for a move it cannot make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum OpponentError {
    /// Every cell is occupied, so the round should already have ended.
    #[display("Opponent asked to move on a full board")]
    BoardFull,
}
