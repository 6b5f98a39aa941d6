//! Rule-based strategy without search.

use super::Strategy;
use crate::position::Position;
use crate::rules::line_complete;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Picks the first square matched by a fixed list of rules:
///
/// 1. complete a line for the acting mark,
/// 2. block a line the other mark would complete,
/// 3. take the center,
/// 4. take a corner,
/// 5. take an edge.
///
/// Within a rule the lowest index wins. Weaker than minimax and not
/// guaranteed to hold a draw.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternStrategy;

impl Strategy for PatternStrategy {
    fn name(&self) -> &'static str {
        "pattern"
    }

    #[instrument(skip(self, board))]
    fn select_cell(&self, board: &Board, acting: Mark, other: Mark) -> Option<Position> {
        if let Some(pos) = completing_square(board, acting) {
            debug!(%pos, "Taking winning square");
            return Some(pos);
        }
        if let Some(pos) = completing_square(board, other) {
            debug!(%pos, "Blocking opponent line");
            return Some(pos);
        }

        let choice = std::iter::once(Position::Center)
            .chain(Position::CORNERS)
            .chain(Position::EDGES)
            .find(|pos| board.is_empty(*pos));
        debug!(?choice, "Taking positional square");
        choice
    }
}

/// Lowest empty square that completes a line for `mark`.
fn completing_square(board: &Board, mark: Mark) -> Option<Position> {
    board
        .successors(mark)
        .find(|(_, next)| line_complete(next, mark).is_some())
        .map(|(pos, _)| pos)
}
