//! Command-line interface for tictactoe_timeline.

use clap::{Parser, Subcommand};

/// Tic-tac-toe with move history and time-travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Tic-tac-toe with move history and time-travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML session config
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Apply a scripted sequence of commands and print the final view
    Replay {
        /// Commands such as `play:4`, `jump:1` or `sort`
        commands: Vec<String>,

        /// Print the view as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Read commands from stdin, printing the view after each one
    Play,
}
