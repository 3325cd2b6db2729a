//! Tic-tac-toe game core.
//!
//! Pure game and AI logic with no I/O:
//!
//! - **Engine**: [`GameSession`] owns the board, turn, round flag, mode and
//!   score; [`rules::evaluate_outcome`] decides wins and draws.
//! - **Opponent**: [`HeuristicOpponent`] picks moves by a fixed priority
//!   (win, block, center, corner, random) with randomness injected through
//!   [`RandomSource`].
//! - **Presentation boundary**: [`GameSession::render_state`] projects the
//!   session into a [`RenderState`] for any [`Presenter`].
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameSession, Mark, MoveResult, RoundOutcome};
//!
//! let mut session = GameSession::new();
//! for index in [0, 3, 1, 4] {
//!     let mark = session.current_turn();
//!     assert!(session.apply_move(index, mark).is_applied());
//! }
//! let result = session.apply_move(2, Mark::X);
//! assert_eq!(result, MoveResult::Applied(RoundOutcome::Won(Mark::X)));
//! assert_eq!(*session.score().x(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod mode;
mod opponent;
mod position;
mod random;
mod render;
pub mod rules;
mod score;
mod session;
mod types;

pub use error::OpponentError;
pub use mode::Mode;
pub use opponent::{Choice, HeuristicOpponent, Reason, choose_move};
pub use position::Position;
pub use random::{RandomSource, ScriptedRandom, SeededRandom};
pub use render::{CellView, Presenter, RenderState};
pub use rules::evaluate_outcome;
pub use score::Score;
pub use session::{Followup, GameSession, MoveResult, OpponentTrigger, Rejection};
pub use types::{Board, CELL_COUNT, Mark, Outcome, RoundOutcome, Square};
