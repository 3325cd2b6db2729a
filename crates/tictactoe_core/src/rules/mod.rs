//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. They never touch session state, so the
//! opponent can call them on hypothetical boards.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{WIN_LINES, check_winner, winning_line};

use crate::types::{Board, RoundOutcome};
use tracing::instrument;

/// Evaluates a board: a completed line wins, else a full board draws.
#[instrument(skip(board))]
pub fn evaluate_outcome(board: &Board) -> RoundOutcome {
    if let Some(mark) = check_winner(board) {
        RoundOutcome::Won(mark)
    } else if is_full(board) {
        RoundOutcome::Draw
    } else {
        RoundOutcome::InProgress
    }
}
