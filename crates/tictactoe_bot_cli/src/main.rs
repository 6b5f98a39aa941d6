//! Tic-tac-toe bot - command-line front end
//!
//! Reads a board, asks the bot for its move and prints the answer.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use std::path::Path;
use tictactoe_bot::{Board, Bot, BotConfig, GameOutcome, Mark, MoveResult, StrategyKind, infer_marks};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            board,
            strategy,
            json,
        } => run_play(config, &board, strategy, json),
        Command::Duel { cross, zero } => run_duel(config, cross, zero),
    }
}

/// Loads the config file if one was given, defaults otherwise.
#[instrument]
fn load_config(path: Option<&Path>) -> Result<BotConfig> {
    match path {
        Some(path) => BotConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display())),
        None => {
            debug!("No config file, using defaults");
            Ok(BotConfig::default())
        }
    }
}

/// Plays a single move and prints the result.
#[instrument(skip(config))]
fn run_play(
    config: BotConfig,
    board: &str,
    strategy: Option<StrategyKind>,
    json: bool,
) -> Result<()> {
    let config = match strategy {
        Some(kind) => config.with_strategy(kind),
        None => config,
    };
    let bot = Bot::new(config);
    let result = bot.play(board)?;

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        print_result(&result);
    }
    Ok(())
}

fn print_result(result: &MoveResult) {
    match result.chosen_cell() {
        Some(pos) => println!("Bot plays {}", pos),
        None => println!("Game already over"),
    }
    if result.outcome() != GameOutcome::Continue {
        println!("{}", result.outcome().message());
    }
    if let Some(line) = result.winning_line() {
        println!("Winning line {} ({:?})", line.index(), line);
    }
}

/// Runs a full game between two bots, cross first.
#[instrument(skip(config))]
fn run_duel(config: BotConfig, cross: StrategyKind, zero: StrategyKind) -> Result<()> {
    let symbols = *config.symbols();
    let cross_bot = Bot::new(config.clone().with_strategy(cross));
    let zero_bot = Bot::new(config.with_strategy(zero));
    info!(%cross, %zero, "Starting duel");

    let mut board = Board::new();
    loop {
        let (acting, _) = infer_marks(&board);
        let bot = match acting {
            Mark::Cross => &cross_bot,
            Mark::Zero => &zero_bot,
        };

        let result = bot.play_board(&board)?;
        let Some(pos) = result.chosen_cell() else {
            bail!("game ended before {} could move", acting);
        };
        board = board.with_mark(pos, acting)?;

        println!("{} ({}) plays {}", acting, bot.strategy().name(), pos);
        println!("{}\n", board.display(&symbols));

        // Outcomes are named from the waiting side's point of view.
        match result.outcome() {
            GameOutcome::Continue => continue,
            GameOutcome::Loss => println!("{} ({}) wins", acting, bot.strategy().name()),
            GameOutcome::Win => println!("{} wins", acting.opponent()),
            GameOutcome::Draw => println!("Draw"),
        }
        if let Some(line) = result.winning_line() {
            println!("Winning line {} ({:?})", line.index(), line);
        }
        return Ok(());
    }
}
