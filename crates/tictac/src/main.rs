//! Tictac - console tic-tac-toe
//!
//! Play against a minimax or random opponent, or watch two strategies
//! play each other.

#![warn(missing_docs)]

mod cli;
mod config;
mod orchestrator;
mod players;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use config::GameConfig;
use orchestrator::{Orchestrator, play_message, watch_message};
use players::{AiPlayer, Contestant, HumanPlayer};
use std::io::{self, Write};
use tictac_engine::{Player, StrategyKind, build_strategy};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref(), cli.command.overrides())?;

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_level())),
        )
        .with_writer(io::stderr)
        .init();

    info!(?config, "Starting tictac");

    match cli.command {
        Command::Play { .. } => run_play(&config),
        Command::Watch { opponent, .. } => run_watch(&config, opponent),
    }
}

/// Builds the computer player described by the config.
fn configured_ai(config: &GameConfig) -> AiPlayer {
    AiPlayer::new(build_strategy(
        *config.strategy(),
        *config.ai_player(),
        *config.depth(),
        *config.seed(),
    ))
}

/// Runs a human-versus-computer game on the console.
#[instrument(skip(config), fields(ai_player = %config.ai_player()))]
fn run_play(config: &GameConfig) -> Result<()> {
    let ai: Box<dyn Contestant> = Box::new(configured_ai(config));
    let human: Box<dyn Contestant> = Box::new(HumanPlayer::new("You", io::stdin().lock()));
    let (player_x, player_o) = match config.ai_player() {
        Player::X => (ai, human),
        Player::O => (human, ai),
    };

    let mut stdout = io::stdout().lock();
    let mut orchestrator = Orchestrator::new(*config.board_size(), player_x, player_o);
    let outcome = orchestrator.run(&mut stdout)?;
    info!(moves = orchestrator.board().move_count(), "Session finished");
    writeln!(stdout, "{}", play_message(outcome, *config.ai_player()))?;
    Ok(())
}

/// Runs a computer-versus-computer game on the console.
#[instrument(skip(config))]
fn run_watch(config: &GameConfig, opponent: StrategyKind) -> Result<()> {
    let ai_player = *config.ai_player();
    let ai: Box<dyn Contestant> = Box::new(configured_ai(config));
    let other: Box<dyn Contestant> = Box::new(AiPlayer::new(build_strategy(
        opponent,
        ai_player.opponent(),
        *config.depth(),
        config.seed().map(|seed| seed.wrapping_add(1)),
    )));
    let (player_x, player_o) = match ai_player {
        Player::X => (ai, other),
        Player::O => (other, ai),
    };

    let mut stdout = io::stdout().lock();
    let mut orchestrator = Orchestrator::new(*config.board_size(), player_x, player_o);
    let outcome = orchestrator.run(&mut stdout)?;
    info!(moves = orchestrator.board().move_count(), "Session finished");
    writeln!(stdout, "{}", watch_message(outcome))?;
    Ok(())
}
