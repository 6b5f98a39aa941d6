//! Properties every strategy must satisfy on every reachable board.

mod common;

use common::reachable_open_boards;
use tictactoe_bot::{
    AlphaBetaStrategy, MinimaxStrategy, PatternStrategy, Strategy, StrategyKind, infer_marks,
};

#[test]
fn test_reachable_board_count() {
    // 5478 legal positions, 958 of them finished.
    assert_eq!(reachable_open_boards().len(), 4520);
}

#[test]
fn test_minimax_and_alpha_beta_agree_everywhere() {
    for board in reachable_open_boards() {
        let (acting, other) = infer_marks(&board);
        let full = MinimaxStrategy.select_cell(&board, acting, other);
        let pruned = AlphaBetaStrategy.select_cell(&board, acting, other);
        assert_eq!(
            full, pruned,
            "strategies diverge on\n{}",
            board.display(&Default::default())
        );
    }
}

#[test]
fn test_every_strategy_picks_an_empty_square() {
    let strategies: [&dyn Strategy; 3] = [&MinimaxStrategy, &AlphaBetaStrategy, &PatternStrategy];
    for board in reachable_open_boards() {
        let (acting, other) = infer_marks(&board);
        for strategy in strategies {
            let pos = strategy
                .select_cell(&board, acting, other)
                .unwrap_or_else(|| panic!("{} found no square", strategy.name()));
            assert!(
                board.is_empty(pos),
                "{} picked occupied {} on\n{}",
                strategy.name(),
                pos,
                board.display(&Default::default())
            );
        }
    }
}

#[test]
fn test_strategy_is_shareable_across_threads() {
    let strategy: std::sync::Arc<dyn Strategy> = std::sync::Arc::from(StrategyKind::AlphaBeta.build());
    let boards = reachable_open_boards();
    let (left, right) = boards.split_at(boards.len() / 2);

    std::thread::scope(|scope| {
        for half in [left, right] {
            let strategy = std::sync::Arc::clone(&strategy);
            scope.spawn(move || {
                for board in half.iter().step_by(31) {
                    let (acting, other) = infer_marks(board);
                    let pos = strategy.select_cell(board, acting, other);
                    assert_eq!(pos, MinimaxStrategy.select_cell(board, acting, other));
                }
            });
        }
    });
}
