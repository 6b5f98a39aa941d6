//! Classifies a board from the human player's point of view.

use super::rules::{WinLine, is_full, line_complete};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// State of the game, named for the human player.
///
/// `Win` means the human has a completed line, `Loss` means the bot does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum GameOutcome {
    /// Game goes on.
    Continue,
    /// Human player completed a line.
    Win,
    /// Bot completed a line.
    Loss,
    /// Full board, no completed line.
    Draw,
}

impl GameOutcome {
    /// True for every outcome except [`GameOutcome::Continue`].
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::Continue
    }

    /// Message shown to the human player.
    pub fn message(self) -> &'static str {
        match self {
            GameOutcome::Continue => "Your move",
            GameOutcome::Win => "You won",
            GameOutcome::Loss => "You lost",
            GameOutcome::Draw => "Draw",
        }
    }
}

/// Outcome plus the completed line, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    /// Classification of the board.
    pub outcome: GameOutcome,
    /// Completed line for `Win` and `Loss`, `None` otherwise.
    pub line: Option<WinLine>,
}

/// Evaluates `board` with `acting` as the bot and `other` as the human.
///
/// Completed lines are checked before fullness, so a full board holding a
/// line is never reported as a draw.
pub fn evaluate(board: &Board, acting: Mark, other: Mark) -> Evaluation {
    if let Some(line) = line_complete(board, acting) {
        return Evaluation {
            outcome: GameOutcome::Loss,
            line: Some(line),
        };
    }

    if let Some(line) = line_complete(board, other) {
        return Evaluation {
            outcome: GameOutcome::Win,
            line: Some(line),
        };
    }

    let outcome = if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::Continue
    };
    Evaluation {
        outcome,
        line: None,
    }
}
