//! Move orchestration: one board in, one bot move out.

use super::config::BotConfig;
use super::contracts::BalanceConsistent;
use super::error::{BotError, InvalidMoveError};
use super::evaluator::{GameOutcome, evaluate};
use super::position::Position;
use super::rules::WinLine;
use super::strategy::Strategy;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, info, instrument};

/// Answer to a [`Bot::play`] request.
///
/// `chosen_cell` is `None` when the game was already over on arrival.
/// `winning_line` is set only for [`GameOutcome::Win`] and
/// [`GameOutcome::Loss`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveResult {
    outcome: GameOutcome,
    chosen_cell: Option<Position>,
    winning_line: Option<WinLine>,
}

impl MoveResult {
    /// Outcome after the bot's move, named for the human player.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Square the bot played.
    pub fn chosen_cell(&self) -> Option<Position> {
        self.chosen_cell
    }

    /// Completed line to highlight.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }
}

/// Works out whose turn it is from the mark counts alone.
///
/// Cross plays when crosses do not outnumber zeros, Zero otherwise.
/// Returns `(acting, other)`.
pub fn infer_marks(board: &Board) -> (Mark, Mark) {
    let balance = board.count(Mark::Cross) as isize - board.count(Mark::Zero) as isize;
    let acting = if balance <= 0 { Mark::Cross } else { Mark::Zero };
    (acting, acting.opponent())
}

/// Automated opponent driving one [`Strategy`].
#[derive(Debug)]
pub struct Bot {
    strategy: Box<dyn Strategy>,
    config: BotConfig,
}

impl Bot {
    /// Creates a bot using the strategy named in `config`.
    pub fn new(config: BotConfig) -> Self {
        Self {
            strategy: config.strategy().build(),
            config,
        }
    }

    /// Creates a bot around a custom strategy.
    pub fn with_strategy(strategy: Box<dyn Strategy>, config: BotConfig) -> Self {
        Self { strategy, config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// Returns the active strategy.
    pub fn strategy(&self) -> &dyn Strategy {
        self.strategy.as_ref()
    }

    /// Parses `board_text` and plays one move on it.
    ///
    /// # Errors
    ///
    /// [`BotError::MalformedBoard`] when the text is not a board, and
    /// [`BotError::InvalidMove`] when the strategy returns an unusable square.
    #[instrument(skip(self), fields(strategy = self.strategy.name()))]
    pub fn play(&self, board_text: &str) -> Result<MoveResult, BotError> {
        let board = Board::parse_with(board_text, self.config.symbols())?;
        self.play_board(&board)
    }

    /// Plays one move on an already parsed board.
    pub fn play_board(&self, board: &Board) -> Result<MoveResult, BotError> {
        if *self.config.strict_balance() {
            BalanceConsistent::check(board)?;
        } else {
            BalanceConsistent::holds(board);
        }

        let (acting, other) = infer_marks(board);
        debug!(%acting, %other, "Inferred marks");

        let before = evaluate(board, acting, other);
        if before.outcome.is_terminal() {
            debug!(outcome = %before.outcome, "Game already over");
            return Ok(MoveResult {
                outcome: before.outcome,
                chosen_cell: None,
                winning_line: before.line,
            });
        }

        let started = Instant::now();
        let chosen = self
            .strategy
            .select_cell(board, acting, other)
            .ok_or(InvalidMoveError::NoEmptySquare)?;
        let elapsed_ms = started.elapsed().as_millis() as u64;
        if *self.config.report_timing() {
            info!(strategy = self.strategy.name(), elapsed_ms, "Found square to play");
        } else {
            debug!(strategy = self.strategy.name(), elapsed_ms, "Found square to play");
        }

        let next = board.with_mark(chosen, acting)?;
        let after = evaluate(&next, acting, other);
        debug!(%chosen, outcome = %after.outcome, "Bot moved");

        Ok(MoveResult {
            outcome: after.outcome,
            chosen_cell: Some(chosen),
            winning_line: after.line,
        })
    }
}

impl Default for Bot {
    fn default() -> Self {
        Self::new(BotConfig::default())
    }
}
