//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// A player's symbol.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum Mark {
    /// Player X (opens a freshly reset session).
    X,
    /// Player O.
    O,
}

impl Mark {
    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a mark.
    Occupied(Mark),
}

impl Square {
    /// Returns the mark in this square, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Square::Empty => None,
            Square::Occupied(mark) => Some(mark),
        }
    }
}

/// 3x3 tic-tac-toe board.
///
/// Live boards are only mutated by the engine. Anyone may build a
/// hypothetical copy with [`Board::with_mark`] or [`Board::from_squares`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit squares in row-major order.
    pub fn from_squares(squares: [Square; CELL_COUNT]) -> Self {
        Self { squares }
    }

    /// Builds a board from a compact layout such as `"XO. .X. ..O"`.
    ///
    /// `X` and `O` (either case) are marks, `.` or `_` is an empty cell and
    /// whitespace is ignored. Returns `None` unless exactly nine cells are
    /// described.
    pub fn parse(layout: &str) -> Option<Self> {
        let mut squares = [Square::Empty; CELL_COUNT];
        let mut count = 0;
        for ch in layout.chars().filter(|c| !c.is_whitespace()) {
            let square = match ch {
                'X' | 'x' => Square::Occupied(Mark::X),
                'O' | 'o' => Square::Occupied(Mark::O),
                '.' | '_' => Square::Empty,
                _ => return None,
            };
            *squares.get_mut(count)? = square;
            count += 1;
        }
        (count == CELL_COUNT).then_some(Self { squares })
    }

    /// Gets the square at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Square> {
        self.squares.get(index).copied()
    }

    /// Checks if a square is empty. Out-of-range indices are never empty.
    pub fn is_empty(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Square::Empty))
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; CELL_COUNT] {
        &self.squares
    }

    /// Indices of the empty squares in ascending order.
    pub fn empty_indices(&self) -> Vec<usize> {
        (0..CELL_COUNT).filter(|&i| self.is_empty(i)).collect()
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// The copy is returned unchanged if the index is out of range.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(square) = next.squares.get_mut(index) {
            *square = Square::Occupied(mark);
        }
        next
    }

    /// Places a mark on an empty in-range square. Returns whether it did.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) -> bool {
        match self.squares.get_mut(index) {
            Some(square) if *square == Square::Empty => {
                *square = Square::Occupied(mark);
                true
            }
            _ => false,
        }
    }

    /// Formats the board as a human-readable string.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(mark) => mark.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// No line is complete and empty squares remain.
    InProgress,
    /// A mark completed a line.
    Won(Mark),
    /// The board is full and nobody won.
    Draw,
}

impl RoundOutcome {
    /// Converts to a terminal [`Outcome`], or `None` while in progress.
    pub fn terminal(self) -> Option<Outcome> {
        match self {
            RoundOutcome::InProgress => None,
            RoundOutcome::Won(mark) => Some(Outcome::Winner(mark)),
            RoundOutcome::Draw => Some(Outcome::Draw),
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A mark won the round.
    Winner(Mark),
    /// The round ended in a draw.
    Draw,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Winner(mark) => write!(f, "{} wins", mark),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
