//! Error types for board parsing, move application and configuration.

use super::position::Position;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Board text could not be turned into a [`Board`](crate::Board).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum MalformedBoardError {
    /// Text does not hold exactly nine characters.
    #[display("Board must have 9 squares, found {found}")]
    WrongLength {
        /// Number of characters found.
        found: usize,
    },

    /// A character is not one of the three board symbols.
    #[display("Unrecognized symbol {symbol:?} at square {index}")]
    UnknownSymbol {
        /// The offending character.
        symbol: char,
        /// Square index of the character.
        index: usize,
    },

    /// Mark counts cannot come from alternating play (strict mode only).
    #[display("Impossible board: {crosses} crosses against {zeros} zeros")]
    ImpossibleBalance {
        /// Number of crosses on the board.
        crosses: usize,
        /// Number of zeros on the board.
        zeros: usize,
    },
}

/// A mark was placed where it cannot go.
///
/// This signals a bug in a strategy or caller, not bad user input.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum InvalidMoveError {
    /// Index outside 0-8.
    #[display("Square index {index} is out of bounds (must be 0-8)")]
    OutOfBounds {
        /// The rejected index.
        index: usize,
    },

    /// The square at the position is already occupied.
    #[display("Square {position} is already occupied")]
    SquareOccupied {
        /// The occupied position.
        position: Position,
    },

    /// A strategy was asked to move on a board with no empty square.
    #[display("No empty square left to play")]
    NoEmptySquare,
}

/// Error returned by [`Bot::play`](crate::Bot::play).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum BotError {
    /// The incoming board was rejected.
    #[display("{_0}")]
    MalformedBoard(#[error(source)] MalformedBoardError),
    /// The bot produced an illegal move.
    #[display("{_0}")]
    InvalidMove(#[error(source)] InvalidMoveError),
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
