//! Move definitions and the beats relation

use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// A move in Rock Paper Scissor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissor,
}

impl Move {
    /// All moves in canonical order. A move's position here is the value
    /// the random source draws for it.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissor];

    /// Check if this move beats the other
    pub fn beats(&self, other: &Move) -> bool {
        matches!(
            (self, other),
            (Move::Rock, Move::Scissor)
                | (Move::Paper, Move::Rock)
                | (Move::Scissor, Move::Paper)
        )
    }

    /// The move this one defeats
    pub fn defeats(&self) -> Move {
        match self {
            Move::Rock => Move::Scissor,
            Move::Paper => Move::Rock,
            Move::Scissor => Move::Paper,
        }
    }

    pub fn index(&self) -> u32 {
        match self {
            Move::Rock => 0,
            Move::Paper => 1,
            Move::Scissor => 2,
        }
    }

    pub fn from_index(index: u32) -> Option<Move> {
        Move::ALL.get(index as usize).copied()
    }

    /// Lower-case identifier, also used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissor => "scissor",
        }
    }

    /// Button caption
    pub fn label(&self) -> &'static str {
        match self {
            Move::Rock => "ROCK",
            Move::Paper => "PAPER",
            Move::Scissor => "SCISSOR",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Text that does not name a move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseMoveError {
    input: String,
}

impl ParseMoveError {
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown move {:?} (expected rock, paper or scissor)",
            self.input
        )
    }
}

impl std::error::Error for ParseMoveError {}

impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rock" | "r" => Ok(Move::Rock),
            "paper" | "p" => Ok(Move::Paper),
            "scissor" | "scissors" | "s" => Ok(Move::Scissor),
            _ => Err(ParseMoveError {
                input: s.to_string(),
            }),
        }
    }
}
