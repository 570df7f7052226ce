//! Command-line interface for tictac.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tictac_engine::{Player, StrategyKind};

/// Tictac - console tic-tac-toe against a search-based opponent
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Play tic-tac-toe against minimax or random play", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer, entering moves as row and column
    Play {
        /// Settings overriding the config file
        #[command(flatten)]
        overrides: ConfigOverrides,
    },

    /// Watch the configured AI play against a second strategy
    Watch {
        /// Settings overriding the config file
        #[command(flatten)]
        overrides: ConfigOverrides,

        /// Strategy for the other side
        #[arg(long, default_value = "random")]
        opponent: StrategyKind,
    },
}

impl Command {
    /// Returns the config overrides given for this command.
    pub fn overrides(&self) -> &ConfigOverrides {
        match self {
            Command::Play { overrides } | Command::Watch { overrides, .. } => overrides,
        }
    }
}

/// Per-run settings that take precedence over the config file.
#[derive(Args, Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Mark played by the computer (X moves first)
    #[arg(long)]
    pub ai_player: Option<Player>,

    /// Search strategy used by the computer
    #[arg(long)]
    pub strategy: Option<StrategyKind>,

    /// Minimax look-ahead in plies
    #[arg(short, long)]
    pub depth: Option<usize>,

    /// Board side length
    #[arg(long)]
    pub board_size: Option<usize>,

    /// Seed for random play
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long)]
    pub log_level: Option<String>,
}
