//! Front-end errors

use match_logic::ParseMoveError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid scripted move: {0}")]
    InvalidMove(#[from] ParseMoveError),

    #[error("No moves given to --moves")]
    EmptyScript,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("Could not encode score: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not set up logging: {0}")]
    Logging(String),
}
