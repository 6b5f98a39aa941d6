//! Preconditions on moves and consistency checks on incoming boards.

use super::error::{InvalidMoveError, MalformedBoardError};
use super::position::Position;
use super::types::{Board, Mark};
use tracing::warn;

/// Precondition: the square at the move's position must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Fails with [`InvalidMoveError::SquareOccupied`] when `position` is taken.
    pub fn check(board: &Board, position: Position) -> Result<(), InvalidMoveError> {
        if board.is_empty(position) {
            Ok(())
        } else {
            Err(InvalidMoveError::SquareOccupied { position })
        }
    }
}

/// Invariant: crosses and zeros differ by at most one.
///
/// Boards reached by alternating play always satisfy this. The bot infers
/// whose turn it is from the counts, so a board violating it may be
/// played with the wrong mark.
pub struct BalanceConsistent;

impl BalanceConsistent {
    /// Returns true when the counts could come from alternating play.
    pub fn holds(board: &Board) -> bool {
        let crosses = board.count(Mark::Cross);
        let zeros = board.count(Mark::Zero);

        let valid = crosses.abs_diff(zeros) <= 1;
        if !valid {
            warn!(crosses, zeros, "Board balance is not reachable by alternating play");
        }
        valid
    }

    /// Strict form of [`BalanceConsistent::holds`].
    pub fn check(board: &Board) -> Result<(), MalformedBoardError> {
        if Self::holds(board) {
            Ok(())
        } else {
            Err(MalformedBoardError::ImpossibleBalance {
                crosses: board.count(Mark::Cross),
                zeros: board.count(Mark::Zero),
            })
        }
    }
}
