//! Play modes.

use crate::types::Mark;
use serde::{Deserialize, Serialize};

/// Who sits across the board from the first human.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Mode {
    /// Two humans alternate on one surface.
    #[default]
    #[serde(rename = "pvp")]
    #[strum(serialize = "pvp")]
    PvP,
    /// Human `X` against the heuristic opponent playing `O`.
    #[serde(rename = "ai")]
    #[strum(serialize = "ai")]
    PvAI,
}

impl Mode {
    /// Mark played by the human in [`Mode::PvAI`].
    pub const HUMAN: Mark = Mark::X;

    /// Mark played by the opponent in [`Mode::PvAI`].
    pub const AI: Mark = Mark::O;

    /// The AI's mark, or `None` when no AI plays in this mode.
    pub fn ai_mark(self) -> Option<Mark> {
        match self {
            Mode::PvP => None,
            Mode::PvAI => Some(Self::AI),
        }
    }

    /// The human's mark when playing against the AI.
    pub fn human_mark(self) -> Option<Mark> {
        match self {
            Mode::PvP => None,
            Mode::PvAI => Some(Self::HUMAN),
        }
    }

    /// Returns display name.
    pub fn name(self) -> &'static str {
        match self {
            Mode::PvP => "Player vs Player",
            Mode::PvAI => "Player vs AI",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_parse_and_display() {
        assert_eq!(Mode::from_str("pvp").unwrap(), Mode::PvP);
        assert_eq!(Mode::from_str("ai").unwrap(), Mode::PvAI);
        assert!(Mode::from_str("online").is_err());
        assert_eq!(Mode::PvAI.to_string(), "ai");
    }

    #[test]
    fn test_marks_per_mode() {
        assert_eq!(Mode::PvAI.human_mark(), Some(Mark::X));
        assert_eq!(Mode::PvAI.ai_mark(), Some(Mark::O));
        assert_eq!(Mode::PvP.ai_mark(), None);
    }
}
