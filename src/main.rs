//! goban-core: a Go board engine demo.
//!
//! A small referee loop around the board engine: two players alternate
//! moves through the `Player` trait until the board reports the game is
//! over, and the result is printed.
//!
//! ## Usage
//!
//! - `goban-core` / `goban-core demo` - run two random players against
//!   each other and print the outcome.

use clap::{Parser, Subcommand};

use goban_core::board::Board;
use goban_core::color::Color;
use goban_core::geometry::move_name;
use goban_core::player::{Player, RandomPlayer};

/// goban-core: a Go (Weiqi) board engine
#[derive(Parser)]
#[command(name = "goban-core")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play two random players against each other and report the result
    Demo,
}

fn main() {
    match Cli::parse().command {
        Some(Commands::Demo) | None => run_demo(),
    }
}

/// Referee loop: alternates `get_player_move`/`play_opponent_move` between
/// two players until the board reports game over, then prints the result.
fn run_demo() {
    let mut board = Board::new();
    let mut black = RandomPlayer::new();
    let mut white = RandomPlayer::new();
    black.new_game(Color::Black);
    white.new_game(Color::White);

    println!("goban-core demo: random player vs. random player\n");

    while !board.is_game_over() {
        let mover_color = board.next_player();
        let mv = match mover_color {
            Color::Black => black.get_player_move(&board),
            Color::White => white.get_player_move(&board),
            Color::Empty => unreachable!("next_player() is never Empty"),
        };

        println!("{mover_color} plays {}", move_name(mv));
        board.play(mv);

        match mover_color {
            Color::Black => white.play_opponent_move(&board, mv),
            Color::White => black.play_opponent_move(&board, mv),
            Color::Empty => unreachable!("next_player() is never Empty"),
        }
    }

    let result = board.result();
    println!("\n{board}\n");
    println!("The game is over. Result: {result}");
    black.end_game(result);
    white.end_game(result);
}
