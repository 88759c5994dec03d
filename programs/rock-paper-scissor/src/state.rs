//! Game state owned by the front-end

use match_logic::{Move, Round, SeededRng, Session};
use tracing::debug;

/// A session plus the generator the computer draws from
#[derive(Clone, Debug)]
pub struct Game {
    seed: u64,
    rng: SeededRng,
    session: Session,
}

impl Game {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SeededRng::new(seed),
            session: Session::new(),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Handle one button press
    pub fn turn(&mut self, player_move: Move) -> Round {
        let round = self.session.play(player_move, &mut self.rng);
        debug!(
            round = self.session.rounds_played,
            player = %round.player_move,
            computer = %round.opponent_move,
            outcome = ?round.outcome,
            "round resolved"
        );
        round
    }
}
