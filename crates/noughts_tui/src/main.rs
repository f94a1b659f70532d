//! Noughts - tic-tac-toe against a minimax opponent
//!
//! Terminal front end for the [`noughts_engine`] crate: a screen state
//! machine over a ratatui terminal, with a persistent win/loss/draw tally.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod controller;
mod input;
mod screen;
mod screens;
mod stats;
mod ui;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use controller::Controller;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use stats::StatsStore;
use std::io;
use tracing::{error, info};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so output never interferes with the TUI.
    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(difficulty = %cli.difficulty, stats_file = %cli.stats_file.display(), "Starting noughts");

    let stats = StatsStore::open(&cli.stats_file);
    let mut controller = Controller::new(stats, cli.difficulty);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = controller.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        eprintln!("Error: {err:?}");
        return Err(err);
    }

    Ok(())
}
