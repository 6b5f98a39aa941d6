//! Minimax with alpha-beta pruning.

use super::{Strategy, terminal_utility};
use crate::position::Position;
use crate::types::{Board, Mark};
use tracing::{debug, instrument};

/// Minimax search that skips branches which cannot change the result.
///
/// Selects exactly the square [`MinimaxStrategy`](super::MinimaxStrategy)
/// selects, including the lowest-index tie-break.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaBetaStrategy;

impl Strategy for AlphaBetaStrategy {
    fn name(&self) -> &'static str {
        "alpha-beta"
    }

    #[instrument(skip(self, board))]
    fn select_cell(&self, board: &Board, acting: Mark, other: Mark) -> Option<Position> {
        let mut best: Option<(Position, i32)> = None;
        let mut alpha = i32::MIN;

        for (pos, next) in board.successors(acting) {
            // A child scoring above alpha comes back exact; anything at or
            // below alpha cannot displace the earlier square anyway.
            let score = alpha_beta(&next, other, acting, other, alpha, i32::MAX);
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((pos, score));
                alpha = score;
            }
        }

        debug!(?best, "Alpha-beta selected square");
        best.map(|(pos, _)| pos)
    }
}

/// Fail-soft alpha-beta value of `board` for `acting`.
fn alpha_beta(
    board: &Board,
    to_move: Mark,
    acting: Mark,
    other: Mark,
    mut alpha: i32,
    mut beta: i32,
) -> i32 {
    if let Some(utility) = terminal_utility(board, acting, other) {
        return utility;
    }

    let next_to_move = to_move.opponent();
    if to_move == acting {
        let mut value = i32::MIN;
        for (_, next) in board.successors(to_move) {
            value = value.max(alpha_beta(&next, next_to_move, acting, other, alpha, beta));
            if value >= beta {
                break;
            }
            alpha = alpha.max(value);
        }
        value
    } else {
        let mut value = i32::MAX;
        for (_, next) in board.successors(to_move) {
            value = value.min(alpha_beta(&next, next_to_move, acting, other, alpha, beta));
            if value <= alpha {
                break;
            }
            beta = beta.min(value);
        }
        value
    }
}
