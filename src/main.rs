//! Tic-tac-toe - unified CLI
//!
//! Terminal UI by default, headless scripted play on request.

#![warn(missing_docs)]

mod cli;
mod tui;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe_duel::{AppConfig, GameStatus, Mode, run_script};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load(cli.config.as_deref())?;

    match cli.command {
        None => tui::run_tui(config, None).await,
        Some(Command::Tui { vs_computer }) => {
            let mode = vs_computer.then_some(Mode::HumanVsComputer);
            tui::run_tui(config, mode).await
        }
        Some(Command::Script {
            moves,
            vs_computer,
            seed,
            json,
        }) => run_script_command(&config, moves, vs_computer, seed, json),
    }
}

/// Plays a move list headlessly and prints the outcome.
#[instrument(skip(config, moves))]
fn run_script_command(
    config: &AppConfig,
    moves: Vec<u8>,
    vs_computer: bool,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    let mode = if vs_computer {
        Mode::HumanVsComputer
    } else {
        Mode::HumanVsHuman
    };
    let moves: Vec<usize> = moves.into_iter().map(usize::from).collect();
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!(%mode, moves = moves.len(), "Running scripted game");
    let session = run_script(mode, &moves, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&session)?);
    } else {
        println!("{}\n", session.board().display());
        match session.status() {
            GameStatus::InProgress => {
                println!("Game in progress, Player {}'s turn", session.current_player())
            }
            GameStatus::Won { winner, line } => println!("Player {} wins! {:?}", winner, line),
            GameStatus::Draw => println!("Game ended in a draw!"),
        }
    }

    Ok(())
}
