//! Command-line interface for the noughts TUI.

use clap::Parser;
use std::path::PathBuf;

/// Noughts - tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts_tui")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// RNG seed for the computer opponent (seeded from entropy if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Delay in milliseconds before the computer replies
    #[arg(long, default_value = "500")]
    pub delay_ms: u64,

    /// Log file path (logs go to a file to keep the screen clean)
    #[arg(long, default_value = "noughts_tui.log")]
    pub log_file: PathBuf,
}
