//! Command-line interface for the tic-tac-toe terminal client.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_core::Mode;

/// Two-mode tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Tic-tac-toe against a friend or a heuristic AI", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the configuration file (defaults are used if it is missing)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// File that receives log output
    #[arg(long, global = true, default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Mode to open in: pvp or ai
        #[arg(long)]
        mode: Option<Mode>,

        /// Seed for the AI's tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the default configuration as TOML
    Config,
}

impl Default for Command {
    fn default() -> Self {
        Command::Play {
            mode: None,
            seed: None,
        }
    }
}
