//! End-to-end requests through `Bot::play`.

use tictactoe_bot::{
    Bot, BotConfig, BotError, GameOutcome, InvalidMoveError, MalformedBoardError, Mark,
    PatternStrategy, Position, Strategy, StrategyKind, SymbolSet, WinLine,
};

fn bot(kind: StrategyKind) -> Bot {
    Bot::new(BotConfig::new(kind))
}

const KINDS: [StrategyKind; 3] = [
    StrategyKind::Minimax,
    StrategyKind::AlphaBeta,
    StrategyKind::Pattern,
];

#[test]
fn test_completing_top_row() {
    for kind in KINDS {
        let result = bot(kind).play("×× ￮￮    ").unwrap();
        assert_eq!(result.chosen_cell(), Some(Position::TopRight), "{kind}");
        assert_eq!(result.outcome(), GameOutcome::Loss, "{kind}");
        assert_eq!(result.winning_line().map(WinLine::index), Some(0), "{kind}");
    }
}

#[test]
fn test_human_already_won() {
    for kind in KINDS {
        // Human plays cross and holds the main diagonal.
        let result = bot(kind).play("×￮ ￮×   ×").unwrap();
        assert_eq!(result.chosen_cell(), None);
        assert_eq!(result.outcome(), GameOutcome::Win);
        assert_eq!(result.winning_line(), Some(WinLine::MainDiagonal));
    }
}

#[test]
fn test_game_continues_after_quiet_move() {
    let result = bot(StrategyKind::AlphaBeta).play("×        ").unwrap();
    assert_eq!(result.outcome(), GameOutcome::Continue);
    assert_eq!(result.winning_line(), None);
    // Against a corner opening only the center holds the draw.
    assert_eq!(result.chosen_cell(), Some(Position::Center));
}

#[test]
fn test_pattern_immediate_win() {
    // Zero holds 2 and 5; completing the right column beats blocking.
    let result = bot(StrategyKind::Pattern).play("××￮ ×￮   ").unwrap();
    assert_eq!(result.chosen_cell(), Some(Position::BottomRight));
    assert_eq!(result.outcome(), GameOutcome::Loss);
    assert_eq!(result.winning_line(), Some(WinLine::RightColumn));
}

#[test]
fn test_pattern_block() {
    // Cross threatens the left column, zero has no winning square.
    let result = bot(StrategyKind::Pattern).play("×   ￮ ×  ").unwrap();
    assert_eq!(result.chosen_cell(), Some(Position::MiddleLeft));
    assert_eq!(result.outcome(), GameOutcome::Continue);
}

#[test]
fn test_pattern_can_be_beaten() {
    // Opposite-corner trap: pattern takes a corner and cross forks.
    let strategy = PatternStrategy;
    let board = tictactoe_bot::Board::parse("×   ￮   ×").unwrap();
    let pos = strategy.select_cell(&board, Mark::Zero, Mark::Cross);
    assert_eq!(pos, Some(Position::TopRight));

    let minimax = bot(StrategyKind::Minimax).play("×   ￮   ×").unwrap();
    assert_ne!(minimax.chosen_cell(), pos);
}

#[test]
fn test_custom_symbols() {
    let symbols = SymbolSet::new('X', 'O', '.').unwrap();
    let bot = Bot::new(BotConfig::new(StrategyKind::AlphaBeta).with_symbols(symbols));
    let result = bot.play("XX.OO....").unwrap();
    assert_eq!(result.chosen_cell(), Some(Position::TopRight));

    assert_eq!(
        bot.play("×× ￮￮    "),
        Err(BotError::MalformedBoard(MalformedBoardError::UnknownSymbol {
            symbol: '×',
            index: 0
        }))
    );
}

#[test]
fn test_malformed_input() {
    let bot = bot(StrategyKind::Minimax);
    assert!(matches!(
        bot.play(""),
        Err(BotError::MalformedBoard(MalformedBoardError::WrongLength { found: 0 }))
    ));
    assert!(matches!(
        bot.play("×× ￮￮   ?"),
        Err(BotError::MalformedBoard(MalformedBoardError::UnknownSymbol { index: 8, .. }))
    ));
}

#[test]
fn test_play_is_repeatable() {
    let bot = bot(StrategyKind::Minimax);
    let first = bot.play(" ×  ￮    ").unwrap();
    for _ in 0..3 {
        assert_eq!(bot.play(" ×  ￮    ").unwrap(), first);
    }
}

#[test]
fn test_invalid_move_error_is_exposed() {
    let err = tictactoe_bot::Board::new()
        .with_move(4, Mark::Cross)
        .and_then(|b| b.with_move(4, Mark::Zero))
        .unwrap_err();
    assert_eq!(
        err,
        InvalidMoveError::SquareOccupied {
            position: Position::Center
        }
    );
}
