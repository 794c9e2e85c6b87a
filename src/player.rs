//! The player interface and a random reference implementation.
//!
//! The engine itself never decides what move to play — that's a separate
//! collaborator's job, kept to the same shape a referee loop expects:
//! told which color it's playing, asked for a move each turn, and told
//! what the opponent did in between. `RandomPlayer` is the simplest
//! possible implementation of that contract, useful for driving the
//! engine end to end without a real search.

use crate::board::{Board, ResultString};
use crate::color::Color;
use crate::geometry::Move;

/// A Go-playing agent, decoupled from the board it plays on.
///
/// A referee drives a game by constructing two `Player`s, calling
/// `new_game` on each, then alternating `get_player_move`/`play_opponent_move`
/// until the board reports `is_game_over()`.
pub trait Player {
    /// Told which color this player is for the upcoming game.
    fn new_game(&mut self, color: Color);

    /// Asked to choose this player's move given the current board.
    fn get_player_move(&mut self, board: &Board) -> Move;

    /// Told the opponent's move, so the player can update any private
    /// state it keeps outside of `board`.
    fn play_opponent_move(&mut self, board: &Board, opponent_move: Move);

    /// Told the final result once the game ends.
    fn end_game(&mut self, result: ResultString);
}

/// Picks uniformly at random among the currently legal moves.
#[derive(Default)]
pub struct RandomPlayer {
    color: Option<Color>,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self { color: None }
    }
}

impl Player for RandomPlayer {
    fn new_game(&mut self, color: Color) {
        self.color = Some(color);
    }

    fn get_player_move(&mut self, board: &Board) -> Move {
        let moves = board.legal_moves();
        moves[fastrand::usize(..moves.len())]
    }

    fn play_opponent_move(&mut self, _board: &Board, _opponent_move: Move) {
        // Stateless: legality is re-derived from `board` on the next call.
    }

    fn end_game(&mut self, _result: ResultString) {}
}
