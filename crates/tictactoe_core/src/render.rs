//! Presentation boundary: a pure projection of the session and the trait
//! that front ends implement to draw it.

use crate::mode::Mode;
use crate::score::Score;
use crate::types::{CELL_COUNT, Mark};
use derive_getters::Getters;
use serde::Serialize;

/// One cell as the presentation layer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct CellView {
    /// Board index (0-8).
    index: usize,
    /// Mark in the cell, if any.
    mark: Option<Mark>,
    /// Whether selecting the cell can do anything.
    interactable: bool,
}

impl CellView {
    pub(crate) fn new(index: usize, mark: Option<Mark>, interactable: bool) -> Self {
        Self {
            index,
            mark,
            interactable,
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct RenderState {
    /// Cells in row-major order.
    cells: [CellView; CELL_COUNT],
    /// Status or result message.
    status: String,
    /// Score triple.
    score: Score,
    /// Whether the round has ended.
    round_over: bool,
    /// Active mode.
    mode: Mode,
    /// Mark on the turn (frozen after the round ends).
    current_turn: Mark,
    /// Completed line, when the round was won.
    winning_line: Option<[usize; 3]>,
}

impl RenderState {
    pub(crate) fn new(
        cells: [CellView; CELL_COUNT],
        status: String,
        score: Score,
        round_over: bool,
        mode: Mode,
        current_turn: Mark,
        winning_line: Option<[usize; 3]>,
    ) -> Self {
        Self {
            cells,
            status,
            score,
            round_over,
            mode,
            current_turn,
            winning_line,
        }
    }
}

/// Something that can draw a [`RenderState`].
pub trait Presenter {
    /// Error raised by the drawing surface.
    type Error;

    /// Draws one frame.
    fn render(&mut self, state: &RenderState) -> Result<(), Self::Error>;
}
