//! Command-line interface for the terminal front-end.

use clap::Parser;
use tactix_engine::Difficulty;

/// Tic-tac-toe in the terminal, with a minimax computer opponent.
#[derive(Parser, Debug)]
#[command(name = "tactix")]
#[command(about = "Tic-tac-toe with a difficulty-tiered computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Difficulty tier for the computer opponent.
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Play against another human instead of the computer.
    #[arg(long)]
    pub two_player: bool,

    /// Seed for the computer's random number generator, for
    /// reproducible sessions.
    #[arg(long)]
    pub seed: Option<u64>,
}
