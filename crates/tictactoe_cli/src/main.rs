//! Terminal host for a tic-tac-toe session.
//!
//! The host owns one [`GameSession`], feeds it player input and re-renders
//! the projection after every command.

#![warn(missing_docs)]

mod cli;
mod input;
mod render;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use input::{Action, parse_action};
use std::io::{self, BufRead, Write};
use tictactoe::GameSession;
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Play => {
            let stdin = io::stdin();
            run_play(stdin.lock(), io::stdout().lock())?;
            Ok(())
        }
        Command::Replay { moves, json } => run_replay(&moves, json, io::stdout().lock()),
    }
}

/// Runs the interactive loop until `quit` or end of input.
#[instrument(skip_all)]
fn run_play<R: BufRead, W: Write>(input: R, mut out: W) -> Result<GameSession> {
    info!("Starting interactive session");
    let mut session = GameSession::new();

    writeln!(out, "{}", render::render(&session))?;
    write!(out, "> ")?;
    out.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(out, "> ")?;
            out.flush()?;
            continue;
        }

        match parse_action(&line) {
            Ok(Action::Quit) => break,
            Ok(Action::Place(pos)) => {
                if let Err(e) = session.try_play_move(pos.to_index()) {
                    warn!(error = %e, "Move rejected");
                }
            }
            Ok(Action::ResetRound) => session.reset_round(),
            Ok(Action::ResetAll) => session.reset_all(),
            Err(e) => {
                warn!(error = %e, "Could not parse input");
                writeln!(
                    out,
                    "{} (cells 1-9, r = reset round, a = reset all, q = quit)",
                    e.message
                )?;
            }
        }

        writeln!(out, "{}", render::render(&session))?;
        write!(out, "> ")?;
        out.flush()?;
    }

    debug!(score = %session.score(), "Interactive session finished");
    Ok(session)
}

/// Plays `moves` (0-based) on a fresh session and prints the final state.
#[instrument(skip(out))]
fn run_replay<W: Write>(moves: &[usize], json: bool, mut out: W) -> Result<()> {
    let mut session = GameSession::new();
    for &index in moves {
        if let Err(e) = session.try_play_move(index) {
            warn!(index, error = %e, "Move rejected");
        }
    }

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&session.snapshot())?)?;
    } else {
        write!(out, "{}", render::render(&session))?;
    }
    Ok(())
}
