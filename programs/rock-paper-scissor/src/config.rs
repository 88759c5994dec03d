//! Command line and environment configuration

use clap::Parser;
use match_logic::Move;

use crate::error::AppError;

/// Rock Paper Scissor against the computer
#[derive(Clone, Debug, Parser)]
#[command(name = "rock-paper-scissor", version, about)]
pub struct Config {
    /// Seed for the computer's draws; random when omitted
    #[arg(long, env = "RPS_SEED")]
    pub seed: Option<u64>,

    /// Play these moves without prompting, e.g. "rock,paper,s"
    #[arg(long, env = "RPS_MOVES")]
    pub moves: Option<String>,

    /// Print the final score as JSON on exit
    #[arg(long)]
    pub json: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Log filter (e.g. "debug", "rock_paper_scissor=trace")
    #[arg(long, env = "RPS_LOG", default_value = "warn")]
    pub log_level: String,
}

impl Config {
    /// Moves for a scripted session, or `None` for an interactive one
    pub fn scripted_moves(&self) -> Result<Option<Vec<Move>>, AppError> {
        let Some(list) = self.moves.as_deref() else {
            return Ok(None);
        };
        let moves = list
            .split(',')
            .filter(|s| !s.trim().is_empty())
            .map(str::parse)
            .collect::<Result<Vec<Move>, _>>()?;
        if moves.is_empty() {
            return Err(AppError::EmptyScript);
        }
        Ok(Some(moves))
    }
}
