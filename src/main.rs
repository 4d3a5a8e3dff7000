//! Entry point: set up logging, parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use football_db::{cli::FootballDb, commands};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = FootballDb::parse();

    let default_level = if app.global.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::run(app).context("football-db command failed")?;
    Ok(())
}
