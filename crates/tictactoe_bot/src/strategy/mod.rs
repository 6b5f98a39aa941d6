//! Move-selection strategies.
//!
//! Every strategy answers the same question: which empty square should the
//! acting mark take? Terminal checks and move application live in the
//! orchestrator, so implementations only pick among empty squares.

mod alpha_beta;
mod minimax;
mod pattern;

pub use alpha_beta::AlphaBetaStrategy;
pub use minimax::MinimaxStrategy;
pub use pattern::PatternStrategy;

use super::evaluator::{GameOutcome, evaluate};
use super::position::Position;
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Picks a square for the acting mark.
///
/// Implementations hold no per-call state: both marks arrive as arguments,
/// so one instance may serve concurrent callers.
pub trait Strategy: std::fmt::Debug + Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Chooses an empty square for `acting`, with `other` as the opponent.
    ///
    /// Only meaningful while the board evaluates to
    /// [`GameOutcome::Continue`]. Returns `None` when no square is empty.
    fn select_cell(&self, board: &Board, acting: Mark, other: Mark) -> Option<Position>;
}

/// Available strategies, as named in config files and on the command line.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum StrategyKind {
    /// Full game-tree search.
    #[default]
    Minimax,
    /// Game-tree search with alpha-beta pruning.
    AlphaBeta,
    /// Fixed priority rules, no search.
    Pattern,
}

impl StrategyKind {
    /// Builds the strategy.
    pub fn build(self) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Minimax => Box::new(MinimaxStrategy),
            StrategyKind::AlphaBeta => Box::new(AlphaBetaStrategy),
            StrategyKind::Pattern => Box::new(PatternStrategy),
        }
    }
}

/// Utility of a finished game for the acting mark, `None` while it goes on.
///
/// +1 when `acting` holds a line, -1 when `other` does, 0 for a draw.
pub(crate) fn terminal_utility(board: &Board, acting: Mark, other: Mark) -> Option<i32> {
    match evaluate(board, acting, other).outcome {
        GameOutcome::Loss => Some(1),
        GameOutcome::Win => Some(-1),
        GameOutcome::Draw => Some(0),
        GameOutcome::Continue => None,
    }
}
