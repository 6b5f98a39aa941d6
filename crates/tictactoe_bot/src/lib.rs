//! Tic-tac-toe bot - picks the automated player's next move
//!
//! The caller hands over the board as nine characters and gets back the
//! square the bot took, the game outcome and the completed line, if any.
//!
//! # Architecture
//!
//! - **Board model**: immutable [`Board`] values, text parsing, win lines
//! - **Evaluator**: [`evaluate`] classifies a board for the human player
//! - **Strategies**: [`MinimaxStrategy`], [`AlphaBetaStrategy`] and
//!   [`PatternStrategy`] behind the [`Strategy`] trait
//! - **Orchestrator**: [`Bot::play`] ties the pieces together
//!
//! # Example
//!
//! ```
//! use tictactoe_bot::{Bot, BotConfig, GameOutcome, StrategyKind, WinLine};
//!
//! let bot = Bot::new(BotConfig::new(StrategyKind::AlphaBeta));
//! let result = bot.play("×× ￮￮    ")?;
//! assert_eq!(result.chosen_cell().map(|p| p.to_index()), Some(2));
//! assert_eq!(result.outcome(), GameOutcome::Loss);
//! assert_eq!(result.winning_line(), Some(WinLine::TopRow));
//! # Ok::<(), tictactoe_bot::BotError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod contracts;
mod error;
mod evaluator;
mod orchestrator;
mod position;
mod rules;
mod strategy;
mod symbols;
mod types;

// Crate-level exports - Board model
pub use position::Position;
pub use rules::{WinLine, is_draw, is_full, line_complete};
pub use symbols::SymbolSet;
pub use types::{Board, Mark, Square};

// Crate-level exports - Evaluation
pub use contracts::{BalanceConsistent, SquareIsEmpty};
pub use evaluator::{Evaluation, GameOutcome, evaluate};

// Crate-level exports - Strategies
pub use strategy::{AlphaBetaStrategy, MinimaxStrategy, PatternStrategy, Strategy, StrategyKind};

// Crate-level exports - Orchestration
pub use config::BotConfig;
pub use orchestrator::{Bot, MoveResult, infer_marks};

// Crate-level exports - Errors
pub use error::{BotError, ConfigError, InvalidMoveError, MalformedBoardError};
