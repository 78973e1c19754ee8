//! Tic-tac-toe timeline - command-line front end
//!
//! Drives the game core from scripted or interactive commands.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{BufRead, Write};
use tictactoe_timeline::{Command as GameCommand, GameState, GameView, SessionConfig};
use tracing::{debug, info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = SessionConfig::load(cli.config.as_deref())?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .init();

    match cli.command {
        Command::Replay { commands, json } => run_replay(&config, &commands, json),
        Command::Play => run_interactive(&config),
    }
}

/// Apply every scripted command, then print the final view.
#[instrument(skip(config))]
fn run_replay(config: &SessionConfig, commands: &[String], json: bool) -> Result<()> {
    info!(count = commands.len(), "Replaying commands");

    let game = commands.iter().try_fold(config.new_game(), |game, raw| {
        let command: GameCommand = raw
            .parse()
            .with_context(|| format!("Invalid command '{}'", raw))?;
        Ok::<_, anyhow::Error>(game.dispatch(command))
    })?;

    print_view(&game, json)
}

/// Read commands from stdin until EOF or `quit`.
#[instrument(skip(config))]
fn run_interactive(config: &SessionConfig) -> Result<()> {
    info!("Starting interactive session");

    let mut game = config.new_game();
    print_view(&game, false)?;

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();

        if trimmed.is_empty() {
            continue;
        }
        if matches!(trimmed, "quit" | "q" | "exit") {
            break;
        }

        match trimmed.parse::<GameCommand>() {
            Ok(command) => {
                debug!(?command, "Dispatching");
                game = game.dispatch(command);
                print_view(&game, false)?;
            }
            Err(e) => {
                warn!(error = %e, "Unparseable command");
                eprintln!("{} (try: play <0-8>, jump <index>, sort, quit)", e.message);
            }
        }
    }

    Ok(())
}

fn print_view(game: &GameState, json: bool) -> Result<()> {
    let view = GameView::of(game);
    let mut stdout = std::io::stdout().lock();

    if json {
        let rendered = serde_json::to_string_pretty(&view).context("Failed to encode view")?;
        writeln!(stdout, "{}", rendered)?;
    } else {
        writeln!(stdout, "{}", view.render_text())?;
    }

    Ok(())
}
