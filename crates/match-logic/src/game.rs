//! Round resolution and scoring

use serde::{Deserialize, Serialize};
use crate::moves::Move;
use crate::random::RandomSource;

/// Result classification of one round, from the player's side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    PlayerWins,
    OpponentWins,
    Tie,
}

impl Outcome {
    /// Decide the outcome of `player` against `opponent`
    pub fn decide(player: Move, opponent: Move) -> Self {
        if player == opponent {
            Outcome::Tie
        } else if player.beats(&opponent) {
            Outcome::PlayerWins
        } else {
            Outcome::OpponentWins
        }
    }

    /// Caption shown after the round
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::PlayerWins => "Player WINS!",
            Outcome::OpponentWins => "Computer WINS!",
            Outcome::Tie => "It's a TIE!",
        }
    }
}

/// One resolved round
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Round {
    pub player_move: Move,
    pub opponent_move: Move,
    pub outcome: Outcome,
}

impl Round {
    pub fn new(player_move: Move, opponent_move: Move) -> Self {
        Self {
            player_move,
            opponent_move,
            outcome: Outcome::decide(player_move, opponent_move),
        }
    }
}

/// Running win counts for one session
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTally {
    pub player_score: u32,
    pub opponent_score: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally after one more round with the given outcome
    pub fn apply(self, outcome: Outcome) -> Self {
        match outcome {
            Outcome::PlayerWins => Self {
                player_score: self.player_score.saturating_add(1),
                ..self
            },
            Outcome::OpponentWins => Self {
                opponent_score: self.opponent_score.saturating_add(1),
                ..self
            },
            Outcome::Tie => self,
        }
    }

    /// Who is ahead so far, as the outcome the session would have if it
    /// ended now
    pub fn leader(&self) -> Outcome {
        use std::cmp::Ordering;
        match self.player_score.cmp(&self.opponent_score) {
            Ordering::Greater => Outcome::PlayerWins,
            Ordering::Less => Outcome::OpponentWins,
            Ordering::Equal => Outcome::Tie,
        }
    }
}

/// Resolve a round with the opponent drawn uniformly from `rng`
///
/// Does not touch any tally; feed the outcome to [`apply_outcome`].
pub fn resolve_round<R: RandomSource>(player_move: Move, rng: &mut R) -> Round {
    let drawn = rng.next_range(Move::ALL.len() as u32);
    let opponent_move = Move::ALL[drawn as usize % Move::ALL.len()];
    resolve_against(player_move, opponent_move)
}

/// Resolve a round against a known opponent move
pub fn resolve_against(player_move: Move, opponent_move: Move) -> Round {
    Round::new(player_move, opponent_move)
}

/// Apply a round outcome to a tally
pub fn apply_outcome(tally: ScoreTally, outcome: Outcome) -> ScoreTally {
    tally.apply(outcome)
}

/// Model state of a running game: the score and the last round shown
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub tally: ScoreTally,
    pub last_round: Option<Round>,
    pub rounds_played: u64,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve one round for `player_move` and fold it into the score
    pub fn play<R: RandomSource>(&mut self, player_move: Move, rng: &mut R) -> Round {
        let round = resolve_round(player_move, rng);
        self.record(round);
        round
    }

    /// Fold an already resolved round into the score
    pub fn record(&mut self, round: Round) {
        self.tally = apply_outcome(self.tally, round.outcome);
        self.last_round = Some(round);
        self.rounds_played += 1;
    }
}

/// Play a sequence of player moves through a fresh session
pub fn play_rounds<I, R>(moves: I, rng: &mut R) -> ScoreTally
where
    I: IntoIterator<Item = Move>,
    R: RandomSource,
{
    let mut session = Session::new();
    for player_move in moves {
        session.play(player_move, rng);
    }
    session.tally
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededRng;
    use proptest::prelude::*;

    /// Always draws the same index
    struct Fixed(u32);

    impl RandomSource for Fixed {
        fn next_range(&mut self, max: u32) -> u32 {
            self.0 % max
        }
    }

    fn any_move() -> impl Strategy<Value = Move> {
        prop_oneof![Just(Move::Rock), Just(Move::Paper), Just(Move::Scissor)]
    }

    fn any_outcome() -> impl Strategy<Value = Outcome> {
        prop_oneof![
            Just(Outcome::PlayerWins),
            Just(Outcome::OpponentWins),
            Just(Outcome::Tie)
        ]
    }

    #[test]
    fn test_literal_cases() {
        assert_eq!(Outcome::decide(Move::Rock, Move::Scissor), Outcome::PlayerWins);
        assert_eq!(Outcome::decide(Move::Scissor, Move::Rock), Outcome::OpponentWins);
        assert_eq!(Outcome::decide(Move::Paper, Move::Paper), Outcome::Tie);
        assert_eq!(Outcome::decide(Move::Paper, Move::Rock), Outcome::PlayerWins);
        assert_eq!(Outcome::decide(Move::Rock, Move::Paper), Outcome::OpponentWins);
        assert_eq!(Outcome::decide(Move::Scissor, Move::Paper), Outcome::PlayerWins);
    }

    #[test]
    fn test_all_outcomes() {
        // All 9 combinations
        let mut player_wins = 0;
        let mut opponent_wins = 0;
        let mut ties = 0;

        for p in Move::ALL {
            for c in Move::ALL {
                match resolve_against(p, c).outcome {
                    Outcome::PlayerWins => player_wins += 1,
                    Outcome::OpponentWins => opponent_wins += 1,
                    Outcome::Tie => ties += 1,
                }
            }
        }

        assert_eq!(player_wins, 3);
        assert_eq!(opponent_wins, 3);
        assert_eq!(ties, 3);
    }

    #[test]
    fn test_resolve_round_uses_drawn_move() {
        for (i, expected) in Move::ALL.iter().enumerate() {
            let round = resolve_round(Move::Rock, &mut Fixed(i as u32));
            assert_eq!(round.player_move, Move::Rock);
            assert_eq!(round.opponent_move, *expected);
            assert_eq!(round, resolve_against(Move::Rock, *expected));
        }
    }

    #[test]
    fn test_resolve_round_determinism() {
        let mut rng1 = SeededRng::new(42);
        let mut rng2 = SeededRng::new(42);

        for m in Move::ALL.iter().cycle().take(60) {
            assert_eq!(resolve_round(*m, &mut rng1), resolve_round(*m, &mut rng2));
        }
    }

    #[test]
    fn test_opponent_distribution() {
        let mut rng = SeededRng::new(2024);
        let samples = 30_000;
        let mut counts = [0u32; 3];

        for _ in 0..samples {
            let round = resolve_round(Move::Paper, &mut rng);
            counts[round.opponent_move.index() as usize] += 1;
        }

        let expected = samples as f64 / 3.0;
        for (m, count) in Move::ALL.iter().zip(counts) {
            let deviation = (count as f64 - expected).abs() / expected;
            assert!(deviation < 0.05, "{} drawn {} times of {}", m, count, samples);
        }
    }

    #[test]
    fn test_apply_outcome() {
        let tally = ScoreTally::new();
        assert_eq!(
            apply_outcome(tally, Outcome::PlayerWins),
            ScoreTally { player_score: 1, opponent_score: 0 }
        );
        assert_eq!(
            apply_outcome(tally, Outcome::OpponentWins),
            ScoreTally { player_score: 0, opponent_score: 1 }
        );
        assert_eq!(apply_outcome(tally, Outcome::Tie), tally);
    }

    #[test]
    fn test_apply_outcome_saturates() {
        let tally = ScoreTally { player_score: u32::MAX, opponent_score: 0 };
        assert_eq!(apply_outcome(tally, Outcome::PlayerWins).player_score, u32::MAX);
    }

    #[test]
    fn test_end_to_end_tally() {
        let outcomes = [
            Outcome::PlayerWins,
            Outcome::Tie,
            Outcome::OpponentWins,
            Outcome::PlayerWins,
        ];
        let tally = outcomes.iter().fold(ScoreTally::new(), |t, o| apply_outcome(t, *o));
        assert_eq!(tally, ScoreTally { player_score: 2, opponent_score: 1 });
        assert_eq!(tally.leader(), Outcome::PlayerWins);
    }

    #[test]
    fn test_session_play() {
        let mut session = Session::new();
        assert_eq!(session.last_round, None);

        // Rock against a drawn Scissor
        let round = session.play(Move::Rock, &mut Fixed(2));
        assert_eq!(round.outcome, Outcome::PlayerWins);
        assert_eq!(session.last_round, Some(round));

        // Rock against a drawn Rock
        session.play(Move::Rock, &mut Fixed(0));
        // Scissor against a drawn Rock
        let last = session.play(Move::Scissor, &mut Fixed(0));

        assert_eq!(session.rounds_played, 3);
        assert_eq!(session.tally, ScoreTally { player_score: 1, opponent_score: 1 });
        assert_eq!(session.last_round, Some(last));
        assert_eq!(session.tally.leader(), Outcome::Tie);
    }

    #[test]
    fn test_play_rounds_matches_session() {
        let moves = [Move::Rock, Move::Paper, Move::Scissor, Move::Rock, Move::Rock];

        let tally = play_rounds(moves, &mut SeededRng::new(7));

        let mut rng = SeededRng::new(7);
        let mut session = Session::new();
        for m in moves {
            session.play(m, &mut rng);
        }
        assert_eq!(tally, session.tally);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::PlayerWins.message(), "Player WINS!");
        assert_eq!(Outcome::OpponentWins.message(), "Computer WINS!");
        assert_eq!(Outcome::Tie.message(), "It's a TIE!");
    }

    #[test]
    fn test_round_serialization() {
        let round = resolve_against(Move::Rock, Move::Paper);
        let json = serde_json::to_value(round).unwrap();
        assert_eq!(json["player_move"], "rock");
        assert_eq!(json["opponent_move"], "paper");
        assert_eq!(json["outcome"], "opponent_wins");
    }

    proptest! {
        #[test]
        fn prop_tie_iff_equal(p in any_move(), c in any_move()) {
            let round = resolve_against(p, c);
            prop_assert_eq!(round.outcome == Outcome::Tie, p == c);
        }

        #[test]
        fn prop_outcome_antisymmetric(p in any_move(), c in any_move()) {
            let forward = Outcome::decide(p, c);
            let backward = Outcome::decide(c, p);
            let mirrored = match forward {
                Outcome::PlayerWins => Outcome::OpponentWins,
                Outcome::OpponentWins => Outcome::PlayerWins,
                Outcome::Tie => Outcome::Tie,
            };
            prop_assert_eq!(backward, mirrored);
        }

        #[test]
        fn prop_tally_counts_outcomes(outcomes in proptest::collection::vec(any_outcome(), 0..200)) {
            let tally = outcomes.iter().fold(ScoreTally::new(), |t, o| apply_outcome(t, *o));
            let wins = outcomes.iter().filter(|o| **o == Outcome::PlayerWins).count();
            let losses = outcomes.iter().filter(|o| **o == Outcome::OpponentWins).count();
            prop_assert_eq!(tally.player_score as usize, wins);
            prop_assert_eq!(tally.opponent_score as usize, losses);
        }

        #[test]
        fn prop_session_score_bounded(seed in any::<u64>(), moves in proptest::collection::vec(any_move(), 0..100)) {
            let mut rng = SeededRng::new(seed);
            let mut session = Session::new();
            for m in &moves {
                let round = session.play(*m, &mut rng);
                prop_assert_eq!(round.player_move, *m);
            }
            let scored = session.tally.player_score as u64 + session.tally.opponent_score as u64;
            prop_assert!(scored <= session.rounds_played);
            prop_assert_eq!(session.rounds_played, moves.len() as u64);
        }
    }
}
