//! WASM bindings for a browser front-end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;
use crate::{apply_outcome, resolve_round, Move, Outcome, ScoreTally, SeededRng};

fn parse_move(player_move: &str) -> Result<Move, JsError> {
    player_move
        .parse::<Move>()
        .map_err(|e| JsError::new(&e.to_string()))
}

fn parse_outcome(outcome: &str) -> Result<Outcome, JsError> {
    serde_json::from_value(serde_json::Value::String(outcome.to_string()))
        .map_err(|e| JsError::new(&format!("Invalid outcome: {}", e)))
}

/// Resolve one round for the clicked move
///
/// # Arguments
/// * `player_move` - "rock", "paper" or "scissor"
/// * `seed` - Session seed chosen by the page
/// * `round_index` - Number of rounds already played this session
///
/// # Returns
/// Serialized Round
#[wasm_bindgen]
pub fn play_round(player_move: &str, seed: u64, round_index: u32) -> Result<JsValue, JsError> {
    let player_move = parse_move(player_move)?;
    let mut rng = SeededRng::new(seed).for_round(round_index);

    let round = resolve_round(player_move, &mut rng);

    serde_wasm_bindgen::to_value(&round)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Apply an outcome to a JSON tally, returning the new tally as JSON
#[wasm_bindgen]
pub fn apply_round_outcome(tally_json: &str, outcome: &str) -> Result<String, JsError> {
    let tally: ScoreTally = serde_json::from_str(tally_json)
        .map_err(|e| JsError::new(&format!("Invalid tally: {}", e)))?;
    let outcome = parse_outcome(outcome)?;

    serde_json::to_string(&apply_outcome(tally, outcome))
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Caption for an outcome ("player_wins", "opponent_wins" or "tie")
#[wasm_bindgen]
pub fn outcome_message(outcome: &str) -> Result<String, JsError> {
    Ok(parse_outcome(outcome)?.message().to_string())
}

#[derive(serde::Serialize)]
struct MoveInfo {
    id: &'static str,
    label: &'static str,
}

/// Get the three moves with their button labels
#[wasm_bindgen]
pub fn get_moves() -> Result<JsValue, JsError> {
    let moves: Vec<MoveInfo> = Move::ALL
        .iter()
        .map(|m| MoveInfo { id: m.name(), label: m.label() })
        .collect();

    serde_wasm_bindgen::to_value(&moves)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
