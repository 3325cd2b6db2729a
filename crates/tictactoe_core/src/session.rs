//! The single mutable game session.
//!
//! A [`GameSession`] owns the board, the turn, the round flag, the mode and
//! the score. Every engine operation is a method on it; the presentation
//! layer owns exactly one session and passes it around by reference.

use crate::error::OpponentError;
use crate::mode::Mode;
use crate::opponent::{Choice, HeuristicOpponent};
use crate::random::RandomSource;
use crate::render::{CellView, RenderState};
use crate::rules::{evaluate_outcome, winning_line};
use crate::score::Score;
use crate::types::{Board, CELL_COUNT, Mark, Outcome, RoundOutcome};
use tracing::{debug, info, instrument};

/// Why a move was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rejection {
    /// The round has already ended.
    #[display("The round is over")]
    RoundOver,
    /// The target cell already holds a mark.
    #[display("Square is already occupied")]
    Occupied,
    /// The index is not a board cell.
    #[display("Position out of bounds (must be 0-8)")]
    OutOfBounds,
    /// The selecting player does not own the current turn.
    #[display("It is not your turn")]
    NotYourTurn,
}

/// Result of a move attempt. Rejection leaves the session untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveResult {
    /// The mark was placed; carries the board evaluation after the move.
    Applied(RoundOutcome),
    /// Nothing changed.
    Rejected(Rejection),
}

impl MoveResult {
    /// Whether the move changed the board.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveResult::Applied(_))
    }
}

/// What made the opponent due.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpponentTrigger {
    /// A round started with the opponent to move.
    RoundStart,
    /// The human just moved and the round is still live.
    HumanMoved,
}

/// What the presentation layer must do after an inbound action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Followup {
    /// Nothing further.
    Idle,
    /// Schedule a deferred opponent move.
    Opponent(OpponentTrigger),
}

/// Board, turn, round flag, mode and score for one play surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSession {
    board: Board,
    current_turn: Mark,
    round_active: bool,
    mode: Mode,
    score: Score,
    status: String,
}

impl GameSession {
    /// Creates a session in [`Mode::PvP`] with a zero score and X to move.
    #[instrument]
    pub fn new() -> Self {
        let mut session = Self {
            board: Board::new(),
            current_turn: Mark::X,
            round_active: true,
            mode: Mode::PvP,
            score: Score::new(),
            status: String::new(),
        };
        session.refresh_status();
        info!("Created game session");
        session
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mark whose turn it is. Frozen once the round ends.
    pub fn current_turn(&self) -> Mark {
        self.current_turn
    }

    /// Whether moves are still accepted.
    pub fn round_active(&self) -> bool {
        self.round_active
    }

    /// Current mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Cumulative score.
    pub fn score(&self) -> &Score {
        &self.score
    }

    /// Status line for the presentation layer.
    pub fn status(&self) -> &str {
        &self.status
    }

    /// Whether the heuristic opponent owns the live turn.
    pub fn opponent_to_move(&self) -> bool {
        self.round_active && self.mode.ai_mark() == Some(self.current_turn)
    }

    /// Switches mode and starts a fresh round with X to move.
    #[instrument(skip(self), fields(from = %self.mode))]
    pub fn set_mode(&mut self, mode: Mode) -> Followup {
        info!(to = %mode, "Switching mode");
        self.mode = mode;
        self.start_new_round(true)
    }

    /// Clears the board and reopens the round.
    ///
    /// The turn goes back to X only when `reset_starter` is set; otherwise
    /// whoever was frozen on the turn when the last round ended opens.
    #[instrument(skip(self))]
    pub fn start_new_round(&mut self, reset_starter: bool) -> Followup {
        self.board = Board::new();
        self.round_active = true;
        if reset_starter {
            self.current_turn = Mark::X;
        }
        self.refresh_status();
        debug!(turn = %self.current_turn, mode = %self.mode, "New round");

        if self.opponent_to_move() {
            Followup::Opponent(OpponentTrigger::RoundStart)
        } else {
            Followup::Idle
        }
    }

    /// Places `mark` at `index` and advances the round.
    ///
    /// Turn ownership is the caller's concern (see [`Self::select_cell`]);
    /// after an accepted move the turn simply flips.
    #[instrument(skip(self), fields(turn = %self.current_turn))]
    pub fn apply_move(&mut self, index: usize, mark: Mark) -> MoveResult {
        if !self.round_active {
            debug!("Move rejected: round over");
            return MoveResult::Rejected(Rejection::RoundOver);
        }
        if index >= CELL_COUNT {
            debug!("Move rejected: out of bounds");
            return MoveResult::Rejected(Rejection::OutOfBounds);
        }
        if !self.board.place(index, mark) {
            debug!("Move rejected: occupied");
            return MoveResult::Rejected(Rejection::Occupied);
        }

        let outcome = evaluate_outcome(&self.board);
        match outcome.terminal() {
            Some(terminal) => self.end_round(terminal),
            None => {
                self.current_turn = self.current_turn.opponent();
                self.refresh_status();
            }
        }
        debug!(?outcome, "Move applied");
        MoveResult::Applied(outcome)
    }

    /// Handles a human selecting a cell, checking that the human owns the
    /// turn.
    ///
    /// Against the AI only the human mark may be played this way, and an
    /// accepted move that leaves the round open makes the opponent due.
    #[instrument(skip(self))]
    pub fn select_cell(&mut self, index: usize) -> (MoveResult, Followup) {
        match self.mode.human_mark() {
            Some(human) => {
                if !self.round_active {
                    return (MoveResult::Rejected(Rejection::RoundOver), Followup::Idle);
                }
                if self.current_turn != human {
                    debug!("Selection ignored: opponent's turn");
                    return (MoveResult::Rejected(Rejection::NotYourTurn), Followup::Idle);
                }
                let result = self.apply_move(index, human);
                let followup = if result.is_applied() && self.round_active {
                    Followup::Opponent(OpponentTrigger::HumanMoved)
                } else {
                    Followup::Idle
                };
                (result, followup)
            }
            None => (self.apply_move(index, self.current_turn), Followup::Idle),
        }
    }

    /// Closes the round, scores it and sets the result message.
    #[instrument(skip(self))]
    pub fn end_round(&mut self, outcome: Outcome) {
        if !self.round_active {
            debug!(%outcome, "Round already ended, not scored again");
            return;
        }
        self.round_active = false;
        self.score.record(outcome);
        self.status = self.result_message(outcome);
        info!(%outcome, total = self.score.total(), "Round ended");
    }

    /// Zeroes the score. Board and turn are left alone.
    #[instrument(skip(self))]
    pub fn reset_score(&mut self) {
        self.score.reset();
    }

    /// Zeroes the score and starts a new round with X to move.
    #[instrument(skip(self))]
    pub fn reset_all(&mut self) -> Followup {
        self.reset_score();
        self.start_new_round(true)
    }

    /// Runs the deferred opponent move.
    ///
    /// Preconditions are checked again here because the move may have been
    /// scheduled before a reset or mode switch: if the mode has no AI, the
    /// AI does not own the turn, or the round is over, nothing happens and
    /// `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`OpponentError::BoardFull`] if the round is live on a full
    /// board, which the engine never produces.
    #[instrument(skip(self, rng), fields(mode = %self.mode, turn = %self.current_turn))]
    pub fn play_opponent(
        &mut self,
        rng: &mut dyn RandomSource,
    ) -> Result<Option<Choice>, OpponentError> {
        let Some(ai) = self.mode.ai_mark() else {
            debug!("Opponent move superseded: no AI in this mode");
            return Ok(None);
        };
        if !self.opponent_to_move() {
            debug!("Opponent move superseded: not the AI's live turn");
            return Ok(None);
        }

        let choice = HeuristicOpponent::new(ai).choose(&self.board, rng)?;
        let result = self.apply_move(*choice.index(), ai);
        debug!(?result, reason = %choice.reason(), "Opponent moved");
        Ok(Some(choice))
    }

    /// Projects the session into what a presenter draws.
    pub fn render_state(&self) -> RenderState {
        let cells = std::array::from_fn(|index| {
            let mark = self.board.get(index).and_then(|square| square.mark());
            CellView::new(index, mark, self.round_active && mark.is_none())
        });
        RenderState::new(
            cells,
            self.status.clone(),
            self.score,
            !self.round_active,
            self.mode,
            self.current_turn,
            winning_line(&self.board),
        )
    }

    fn refresh_status(&mut self) {
        self.status = match self.mode.human_mark() {
            Some(human) if self.current_turn == human => format!("Your turn ({human})"),
            Some(_) => "AI is thinking...".to_string(),
            None => format!("{}'s turn", self.current_turn),
        };
    }

    fn result_message(&self, outcome: Outcome) -> String {
        match (outcome, self.mode) {
            (Outcome::Draw, _) => "Draw game!".to_string(),
            (Outcome::Winner(mark), Mode::PvAI) if Some(mark) == Mode::PvAI.ai_mark() => {
                "AI wins this round!".to_string()
            }
            (Outcome::Winner(_), Mode::PvAI) => "You win this round!".to_string(),
            (Outcome::Winner(_), Mode::PvP) => format!("{outcome}!"),
        }
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
