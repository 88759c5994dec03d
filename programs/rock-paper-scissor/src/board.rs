//! Text rendering of the game board

use colored::{Color, Colorize};
use match_logic::{Move, Outcome, Session};

/// Caption before the first round
pub const INITIAL_MESSAGE: &str = "Make your move!";

/// Move shown on both sides before the first round
pub const INITIAL_MOVE: Move = Move::Scissor;

const GLYPH_WIDTH: usize = 20;

/// Hand drawing for a move, one entry per line
pub fn glyph(m: Move) -> [&'static str; 6] {
    match m {
        Move::Rock => [
            "    _______",
            "---'   ____)",
            "      (_____)",
            "      (_____)",
            "      (____)",
            "---.__(___)",
        ],
        Move::Paper => [
            "    _______",
            "---'   ____)____",
            "          ______)",
            "          _______)",
            "         _______)",
            "---.__________)",
        ],
        Move::Scissor => [
            "    _______",
            "---'   ____)____",
            "          ______)",
            "       __________)",
            "      (____)",
            "---.__(___)",
        ],
    }
}

/// Colour of the caption for an outcome; ties use the terminal default
pub fn outcome_color(outcome: Outcome) -> Option<Color> {
    match outcome {
        Outcome::PlayerWins => Some(Color::Green),
        Outcome::OpponentWins => Some(Color::Red),
        Outcome::Tie => None,
    }
}

fn caption(session: &Session) -> String {
    match session.last_round {
        None => INITIAL_MESSAGE.italic().to_string(),
        Some(round) => {
            let text = round.outcome.message().bold();
            match outcome_color(round.outcome) {
                Some(color) => text.color(color).to_string(),
                None => text.to_string(),
            }
        }
    }
}

/// Render the score, both moves and the caption
///
/// The computer sits on the left and the player on the right.
pub fn render(session: &Session) -> String {
    let (opponent, player) = match session.last_round {
        Some(round) => (round.opponent_move, round.player_move),
        None => (INITIAL_MOVE, INITIAL_MOVE),
    };

    let mut out = String::new();
    out.push_str(&format!(
        "{}      {}\n",
        format!("{:^w$}", "COMPUTER", w = GLYPH_WIDTH).yellow().bold(),
        format!("{:^w$}", "PLAYER", w = GLYPH_WIDTH).yellow().bold(),
    ));
    out.push_str(&format!(
        "{:^w$}  :   {:^w$}\n\n",
        session.tally.opponent_score,
        session.tally.player_score,
        w = GLYPH_WIDTH
    ));

    for (i, (left, right)) in glyph(opponent).iter().zip(glyph(player)).enumerate() {
        let middle = if i == 3 { "  VS  " } else { "      " };
        out.push_str(&format!("{:<w$}{}{}\n", left, middle, right, w = GLYPH_WIDTH));
    }
    out.push_str(&format!("{:<w$}      {}\n\n", opponent.label(), player.label(), w = GLYPH_WIDTH));
    out.push_str(&caption(session));
    out.push('\n');
    out
}
