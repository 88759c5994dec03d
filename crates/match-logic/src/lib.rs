//! Match Logic for Rock Paper Scissor
//!
//! Core game logic: the beats relation, round resolution against a
//! uniformly drawn opponent, and score keeping.
//! This crate is compiled to:
//! - Native (for the terminal game)
//! - WASM (for a browser front-end)

mod random;
mod moves;
mod game;

#[cfg(feature = "wasm")]
mod wasm;

pub use random::{RandomSource, SeededRng};
pub use moves::{Move, ParseMoveError};
pub use game::{
    apply_outcome, play_rounds, resolve_against, resolve_round, Outcome, Round, ScoreTally,
    Session,
};

/// Outcome table for every (player, opponent) pair, rows and columns in
/// `Move::ALL` order
pub fn outcome_table() -> [[Outcome; 3]; 3] {
    Move::ALL.map(|p| Move::ALL.map(|c| Outcome::decide(p, c)))
}
