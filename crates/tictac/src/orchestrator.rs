//! Game orchestration between two contestants.

use crate::players::Contestant;
use anyhow::Result;
use std::io::Write;
use tictac_engine::{BoardState, Outcome, Player};
use tracing::{debug, info};

/// Runs one game from an empty board until it is decided.
pub struct Orchestrator {
    board: BoardState,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
}

impl Orchestrator {
    /// Creates a new orchestrator on an empty board of the given size.
    pub fn new(size: usize, player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self {
            board: BoardState::empty(size),
            player_x,
            player_o,
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &BoardState {
        &self.board
    }

    /// Runs the game loop and returns the final outcome.
    pub fn run(&mut self, out: &mut dyn Write) -> Result<Outcome> {
        info!(
            x = %self.player_x.name(),
            o = %self.player_o.name(),
            size = self.board.size(),
            "Starting game"
        );

        // A human opening the game needs to see the board first.
        if self.player_x.is_human() {
            write!(out, "{}", self.board)?;
        }

        while !self.board.is_decided() {
            let mover = self.board.next_to_move();
            let contestant = match mover {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };
            debug!(player = %contestant.name(), mark = %mover, "Waiting for move");
            self.board = contestant.take_turn(&self.board, out)?;
        }

        let outcome = self.board.outcome();
        info!(%outcome, moves = self.board.move_count(), "Game over");
        Ok(outcome)
    }
}

/// Closing line for a game against a human, from the computer's side.
pub fn play_message(outcome: Outcome, ai_player: Player) -> String {
    let text = match outcome.winner() {
        Some(winner) if winner == ai_player => "I WON",
        Some(_) => "YOU WON",
        None => "DRAW",
    };
    format!("**** {} ****", text)
}

/// Closing line for a computer-only game.
pub fn watch_message(outcome: Outcome) -> String {
    match outcome.winner() {
        Some(winner) => format!("**** {} WINS ****", winner),
        None => "**** DRAW ****".to_string(),
    }
}
