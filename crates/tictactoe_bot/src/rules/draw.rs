//! Draw detection.

use super::super::{Board, Mark};
use super::win::line_complete;

/// Checks if the board is full (all squares occupied).
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A full board on which neither mark holds a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board)
        && line_complete(board, Mark::Cross).is_none()
        && line_complete(board, Mark::Zero).is_none()
}
