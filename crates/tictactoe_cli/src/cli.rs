//! Command-line interface for the tic-tac-toe host.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively, reading one command per line from stdin
    Play,

    /// Apply a list of moves to a fresh session and print the result
    Replay {
        /// Comma-separated 0-based cell indices, e.g. 0,3,1,4,2
        #[arg(short, long, value_delimiter = ',')]
        moves: Vec<usize>,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
    },
}
