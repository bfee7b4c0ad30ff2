//! Retro Tic Tac Toe - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use retro_tictactoe_tui::{
    init_file_logging, init_stderr_logging, replay, run_tui, Cli, Command, Settings,
};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(config),
        Command::Replay { moves, json } => run_replay(&moves, json),
    }
}

/// Run the terminal UI
fn run_play(config: Option<PathBuf>) -> Result<()> {
    let settings = Settings::load(config.as_deref()).context("Failed to load settings")?;
    init_file_logging(settings.logging())?;

    info!(?settings, "Settings resolved");
    run_tui(settings)
}

/// Replay a move list and print the result
fn run_replay(moves: &[usize], json: bool) -> Result<()> {
    init_stderr_logging("warn");

    let report = replay(moves);
    if json {
        println!("{}", report.to_json().context("Failed to encode replay")?);
    } else {
        println!("{}", report.render_text());
    }
    Ok(())
}
