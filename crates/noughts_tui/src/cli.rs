//! Command-line interface for noughts.

use clap::Parser;
use noughts_engine::Difficulty;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a minimax computer opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Play tic-tac-toe against a minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Initial opponent difficulty (easy, medium, hard)
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Path to the win/loss/draw tally file
    #[arg(long, default_value = "noughts_stats.txt")]
    pub stats_file: PathBuf,

    /// Path to the log file
    #[arg(long, default_value = "noughts.log")]
    pub log_file: PathBuf,
}
