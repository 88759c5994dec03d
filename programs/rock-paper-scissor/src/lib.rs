//! Rock Paper Scissor - terminal front-end
//!
//! Draws the board, offers the three move buttons and feeds each choice
//! to the match logic. Closing the game is the QUIT button.

pub mod board;
pub mod config;
pub mod error;
pub mod state;

use dialoguer::Select;
use match_logic::{Move, ScoreTally};
use rand::Rng;
use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::Config;
pub use error::AppError;
pub use state::Game;

const QUIT_LABEL: &str = "QUIT";

/// Install the stderr log subscriber
pub fn init_tracing(filter: &str) -> Result<(), AppError> {
    let filter = EnvFilter::try_new(filter).map_err(|e| AppError::Logging(e.to_string()))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| AppError::Logging(e.to_string()))
}

/// Run a whole session as configured and return the final score
pub fn run(config: &Config) -> Result<ScoreTally, AppError> {
    if config.no_color {
        colored::control::set_override(false);
    }
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    let mut game = Game::new(seed);

    let tally = match config.scripted_moves()? {
        Some(moves) => {
            info!(seed, rounds = moves.len(), "starting scripted session");
            play_script(&mut game, &moves)
        }
        None => {
            info!(seed, "starting interactive session");
            play_interactive(&mut game)?
        }
    };

    info!(
        player = tally.player_score,
        computer = tally.opponent_score,
        rounds = game.session().rounds_played,
        "session finished"
    );
    if config.json {
        println!("{}", serde_json::to_string(&tally)?);
    }
    Ok(tally)
}

/// Play a fixed list of moves, then show the final board
pub fn play_script(game: &mut Game, moves: &[Move]) -> ScoreTally {
    for m in moves {
        let round = game.turn(*m);
        println!(
            "{:>8} vs {:<8} {}",
            round.player_move.label(),
            round.opponent_move.label(),
            round.outcome.message()
        );
    }
    println!();
    print!("{}", board::render(game.session()));
    game.session().tally
}

/// Prompt for moves until the player quits
fn play_interactive(game: &mut Game) -> Result<ScoreTally, AppError> {
    let mut items: Vec<&str> = Move::ALL.iter().map(|m| m.label()).collect();
    items.push(QUIT_LABEL);

    loop {
        println!();
        print!("{}", board::render(game.session()));
        let selection = Select::new()
            .with_prompt("Your move")
            .items(&items)
            .default(0)
            .interact()?;
        match Move::from_index(selection as u32) {
            Some(m) => {
                game.turn(m);
            }
            None => break,
        }
    }
    Ok(game.session().tally)
}
