//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe in the terminal, against a friend or the computer
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml if present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the terminal UI
    Tui {
        /// Start straight into a game against the computer
        #[arg(long)]
        vs_computer: bool,
    },

    /// Play a list of moves without a terminal UI and print the result
    Script {
        /// Squares to play, 0-8 in row-major order
        #[arg(required = true, value_parser = clap::value_parser!(u8).range(0..=8))]
        moves: Vec<u8>,

        /// Let the computer answer as O after every move
        #[arg(long)]
        vs_computer: bool,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the final session as JSON
        #[arg(long)]
        json: bool,
    },
}
