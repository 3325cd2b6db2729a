//! Heuristic computer opponent.
//!
//! The policy is a fixed priority list evaluated top to bottom:
//!
//! 1. complete a line of its own,
//! 2. block the human's completing move,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take any random free cell.
//!
//! It is deliberately beatable.

use crate::error::OpponentError;
use crate::position::Position;
use crate::random::RandomSource;
use crate::rules::evaluate_outcome;
use crate::types::{Board, Mark, RoundOutcome};
use derive_getters::Getters;
use tracing::{debug, instrument, warn};

/// Which rule produced a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum Reason {
    /// Completes a line for the opponent.
    Win,
    /// Occupies the cell the human needs to complete a line.
    Block,
    /// Takes the center.
    Center,
    /// Takes a free corner.
    Corner,
    /// Takes any free cell.
    Fallback,
}

/// A selected cell and the rule that selected it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct Choice {
    /// Board index (0-8).
    index: usize,
    /// Rule that fired.
    reason: Reason,
}

/// Opponent that plays one mark against a human playing the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct HeuristicOpponent {
    /// Mark the opponent places.
    ai_mark: Mark,
    /// Mark the human places.
    human_mark: Mark,
}

impl HeuristicOpponent {
    /// Creates an opponent playing `ai_mark` against its opposite.
    pub fn new(ai_mark: Mark) -> Self {
        Self {
            ai_mark,
            human_mark: ai_mark.opponent(),
        }
    }

    /// Selects a move on `board`.
    ///
    /// # Errors
    ///
    /// Returns [`OpponentError::BoardFull`] when no cell is empty. A live
    /// round always has one, so this means the caller scheduled a move for a
    /// round that had already ended.
    #[instrument(skip(self, board, rng), fields(ai = %self.ai_mark))]
    pub fn choose(
        &self,
        board: &Board,
        rng: &mut dyn RandomSource,
    ) -> Result<Choice, OpponentError> {
        let open = Position::valid_moves(board);
        if open.is_empty() {
            warn!("No empty cell left for the opponent");
            return Err(OpponentError::BoardFull);
        }

        let (position, reason) = if let Some(pos) = completing_move(board, &open, self.ai_mark) {
            (pos, Reason::Win)
        } else if let Some(pos) = completing_move(board, &open, self.human_mark) {
            (pos, Reason::Block)
        } else if open.contains(&Position::CENTER) {
            (Position::CENTER, Reason::Center)
        } else {
            let corners: Vec<Position> = open.iter().copied().filter(|p| p.is_corner()).collect();
            if corners.is_empty() {
                (open[rng.pick(open.len())], Reason::Fallback)
            } else {
                (corners[rng.pick(corners.len())], Reason::Corner)
            }
        };

        let choice = Choice {
            index: position.to_index(),
            reason,
        };
        debug!(%position, reason = %choice.reason, "Opponent chose cell");
        Ok(choice)
    }
}

/// First open position (ascending) where `mark` would win outright.
fn completing_move(board: &Board, open: &[Position], mark: Mark) -> Option<Position> {
    open.iter().copied().find(|pos| {
        evaluate_outcome(&board.with_mark(pos.to_index(), mark)) == RoundOutcome::Won(mark)
    })
}

/// Picks a cell for `ai_mark` against `human_mark`.
///
/// # Errors
///
/// Returns [`OpponentError::BoardFull`] when the board has no empty cell.
pub fn choose_move(
    board: &Board,
    ai_mark: Mark,
    human_mark: Mark,
    rng: &mut dyn RandomSource,
) -> Result<usize, OpponentError> {
    let opponent = HeuristicOpponent { ai_mark, human_mark };
    opponent.choose(board, rng).map(|choice| choice.index)
}
