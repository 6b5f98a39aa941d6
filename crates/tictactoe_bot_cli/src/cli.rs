//! Command-line interface for tictactoe-bot.

use clap::{Parser, Subcommand};
use tictactoe_bot::StrategyKind;

/// Tic-tac-toe bot - computes the automated player's next move
#[derive(Parser, Debug)]
#[command(name = "tictactoe-bot")]
#[command(about = "Computes the next move for a tic-tac-toe bot", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play one bot move on the given board
    Play {
        /// Board as nine characters in row-major order
        #[arg(short, long)]
        board: String,

        /// Strategy to use (minimax, alpha-beta, pattern); overrides the config
        #[arg(short, long)]
        strategy: Option<StrategyKind>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Let two bots play a whole game against each other
    Duel {
        /// Strategy for the cross bot (moves first)
        #[arg(long, default_value = "minimax")]
        cross: StrategyKind,

        /// Strategy for the zero bot
        #[arg(long, default_value = "pattern")]
        zero: StrategyKind,
    },
}
