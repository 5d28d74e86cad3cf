use score_types::{
    GameResult, MatchFormat, MatchSnapshot, PointEvent, PointScore, SetScore, Side, TiebreakScore,
};
use tracing::debug;

use crate::ScoringEngine;
use crate::derivation::ordered;

/// Games and sets won so far, fed one `GameResult` at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchTally {
    format: MatchFormat,
    completed_sets: Vec<SetScore>,
    current_set: SetScore,
}

impl MatchTally {
    pub fn new(format: MatchFormat) -> Self {
        Self {
            format,
            completed_sets: Vec::new(),
            current_set: SetScore::default(),
        }
    }

    pub fn format(&self) -> MatchFormat {
        self.format
    }

    pub fn completed_sets(&self) -> &[SetScore] {
        &self.completed_sets
    }

    pub fn current_set(&self) -> SetScore {
        self.current_set
    }

    pub fn sets_won(&self, side: Side) -> usize {
        self.completed_sets
            .iter()
            .filter(|set| set.leader() == Some(side))
            .count()
    }

    /// Whether the next game of the current set is played as a tiebreak.
    pub fn in_tiebreak(&self) -> bool {
        let games = self.games_per_set();
        self.format.tiebreak && self.current_set.top == games && self.current_set.bottom == games
    }

    /// Record a finished game. Returns the set it completed, if any.
    pub fn record_game(&mut self, result: GameResult) -> Option<SetScore> {
        match result.winner {
            Side::Top => self.current_set.top = self.current_set.top.saturating_add(1),
            Side::Bottom => self.current_set.bottom = self.current_set.bottom.saturating_add(1),
        }

        if self.is_set_decided(self.current_set) {
            let finished = std::mem::take(&mut self.current_set);
            debug!(
                top = finished.top,
                bottom = finished.bottom,
                set = self.completed_sets.len() + 1,
                "Set completed"
            );
            self.completed_sets.push(finished);
            Some(finished)
        } else {
            None
        }
    }

    pub fn snapshot(&self, point: PointScore) -> MatchSnapshot {
        MatchSnapshot {
            completed_sets: self.completed_sets.clone(),
            current_set: self.current_set,
            point,
        }
    }

    fn games_per_set(&self) -> u32 {
        u32::from(self.format.games_per_set.max(1))
    }

    fn is_set_decided(&self, set: SetScore) -> bool {
        let Some(leader) = set.leader() else {
            return false;
        };
        let games = self.games_per_set();
        let won = set.get(leader);
        let lost = set.get(leader.opponent());

        let tiebreak_taken =
            self.format.tiebreak && won == games + 1 && lost == games;
        tiebreak_taken || (won >= games && won - lost >= 2)
    }
}

/// Full scoreboard after every event, with sets and tiebreaks.
///
/// Standard games follow the same carry-over rule as `score_at_event`, and the
/// point that takes a set to a tiebreak opens the tiebreak at 1-0.
pub fn derive_match(events: &[PointEvent], format: MatchFormat) -> Vec<MatchSnapshot> {
    let mut tally = MatchTally::new(format);
    let mut point = PointScore::default();
    let mut snapshots = Vec::with_capacity(events.len());

    for event in ordered(events) {
        let winner = event.winner;
        point = match point {
            PointScore::Game(score) => {
                let outcome = ScoringEngine::award_point(score, winner, true);
                if outcome.game_ended {
                    tally.record_game(GameResult { winner });
                }
                if outcome.game_ended && tally.in_tiebreak() {
                    PointScore::Tiebreak(tiebreak_opening(winner))
                } else {
                    PointScore::Game(outcome.score)
                }
            }
            PointScore::Tiebreak(score) => {
                let outcome = ScoringEngine::award_tiebreak_point(score, winner, true);
                if outcome.tiebreak_ended {
                    tally.record_game(GameResult { winner });
                }
                outcome.point
            }
        };
        snapshots.push(tally.snapshot(point));
    }

    debug!(
        points = snapshots.len(),
        sets_completed = tally.completed_sets().len(),
        "Derived match snapshots"
    );
    snapshots
}

fn tiebreak_opening(winner: Side) -> TiebreakScore {
    let mut score = TiebreakScore::default();
    match winner {
        Side::Top => score.top = 1,
        Side::Bottom => score.bottom = 1,
    }
    score
}
