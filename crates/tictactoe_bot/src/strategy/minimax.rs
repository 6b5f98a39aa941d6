//! Exhaustive minimax search.

use super::{Strategy, terminal_utility};
use crate::position::Position;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Searches every continuation to the end of the game.
///
/// Ties between equally good squares go to the lowest index.
#[derive(Debug, Clone, Copy, Default)]
pub struct MinimaxStrategy;

impl Strategy for MinimaxStrategy {
    fn name(&self) -> &'static str {
        "minimax"
    }

    #[instrument(skip(self, board))]
    fn select_cell(&self, board: &Board, acting: Mark, other: Mark) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;

        for (pos, next) in board.successors(acting) {
            let score = minimax(&next, other, acting, other);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
            }
        }

        debug!(?best, "Minimax selected square");
        best.map(|(pos, _)| pos)
    }
}

/// Value of `board` for `acting` with `to_move` about to play.
fn minimax(board: &Board, to_move: Mark, acting: Mark, other: Mark) -> i32 {
    if let Some(utility) = terminal_utility(board, acting, other) {
        return utility;
    }

    let scores = board
        .successors(to_move)
        .map(|(_, next)| minimax(&next, to_move.opponent(), acting, other));

    // A non-terminal board always has an empty square.
    let value = if to_move == acting {
        scores.max()
    } else {
        scores.min()
    };
    value.unwrap_or(0)
}
