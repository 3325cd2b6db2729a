//! Tic-tac-toe terminal client.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::AppConfig;
use tictactoe_tui::app;
use tictactoe_tui::cli::{Cli, Command};
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command.clone().unwrap_or_default() {
        Command::Config => {
            print!("{}", AppConfig::default_toml()?);
            Ok(())
        }
        Command::Play { mode, seed } => {
            app::init_logging(&cli.log_file)?;

            let mut config = AppConfig::load_or_default(&cli.config)
                .with_context(|| format!("Loading {}", cli.config.display()))?;
            if let Some(mode) = mode {
                config = config.with_mode(mode);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            info!(?config, "Configuration resolved");

            app::run(config).await
        }
    }
}
