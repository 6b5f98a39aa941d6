//! Helpers shared by the integration tests.

use std::collections::HashSet;
use tictactoe_bot::{Board, GameOutcome, evaluate, infer_marks};

/// Every board reachable from the empty board by alternating play with
/// cross moving first, excluding finished games.
pub fn reachable_open_boards() -> Vec<Board> {
    let mut seen = HashSet::new();
    let mut open = Vec::new();
    let mut stack = vec![Board::new()];

    while let Some(board) = stack.pop() {
        if !seen.insert(board) {
            continue;
        }
        let (to_move, other) = infer_marks(&board);
        if evaluate(&board, to_move, other).outcome != GameOutcome::Continue {
            continue;
        }
        open.push(board);
        stack.extend(board.successors(to_move).map(|(_, next)| next));
    }

    open
}
