use score_types::{GameScore, PointScore, PointValue, Side, TiebreakScore};
use tracing::trace;

/// Points needed to take a tiebreak, with a two point margin.
pub const TIEBREAK_POINTS: u32 = 7;

/// Result of awarding one point in a standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointOutcome {
    pub score: GameScore,
    pub game_ended: bool,
}

impl PointOutcome {
    fn continuing(score: GameScore) -> Self {
        Self {
            score,
            game_ended: false,
        }
    }
}

/// Result of awarding one point in a tiebreak. Once the tiebreak is decided
/// `point` holds the opening score of the following game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiebreakOutcome {
    pub point: PointScore,
    pub tiebreak_ended: bool,
}

pub struct ScoringEngine;

impl ScoringEngine {
    /// Award one point to `winner` under standard game rules (advantage scoring).
    ///
    /// When the point wins the game the returned score is the opening score of
    /// the next game: love-all, or 15-0 to the winner when
    /// `carry_first_point_on_win` is set.
    pub fn award_point(
        score: GameScore,
        winner: Side,
        carry_first_point_on_win: bool,
    ) -> PointOutcome {
        debug_assert!(score.is_valid(), "invalid game score {:?}", score);

        let loser = winner.opponent();
        let outcome = match (score.get(winner), score.get(loser)) {
            (PointValue::Advantage, _) => Self::game_won(winner, carry_first_point_on_win),
            (_, PointValue::Advantage) => PointOutcome::continuing(GameScore::DEUCE),
            (PointValue::Forty, PointValue::Forty) => {
                PointOutcome::continuing(score.with(winner, PointValue::Advantage))
            }
            (PointValue::Forty, _) => Self::game_won(winner, carry_first_point_on_win),
            (value, _) => PointOutcome::continuing(score.with(winner, step_up(value))),
        };

        debug_assert!(outcome.score.is_valid(), "invalid game score {:?}", outcome.score);
        outcome
    }

    /// Award one point in a tiebreak: first to seven with a two point margin.
    pub fn award_tiebreak_point(
        score: TiebreakScore,
        winner: Side,
        carry_first_point_on_win: bool,
    ) -> TiebreakOutcome {
        let mut next = score;
        match winner {
            Side::Top => next.top = next.top.saturating_add(1),
            Side::Bottom => next.bottom = next.bottom.saturating_add(1),
        }

        let won = next.get(winner);
        let lost = next.get(winner.opponent());
        if won >= TIEBREAK_POINTS && won - lost >= 2 {
            trace!(?winner, top = next.top, bottom = next.bottom, "tiebreak won");
            TiebreakOutcome {
                point: PointScore::Game(Self::opening_score(winner, carry_first_point_on_win)),
                tiebreak_ended: true,
            }
        } else {
            TiebreakOutcome {
                point: PointScore::Tiebreak(next),
                tiebreak_ended: false,
            }
        }
    }

    /// Score a new game opens with after `winner` took the previous one.
    pub fn opening_score(winner: Side, carry_first_point_on_win: bool) -> GameScore {
        if carry_first_point_on_win {
            GameScore::first_point_for(winner)
        } else {
            GameScore::LOVE_ALL
        }
    }

    fn game_won(winner: Side, carry_first_point_on_win: bool) -> PointOutcome {
        trace!(?winner, "game won");
        PointOutcome {
            score: Self::opening_score(winner, carry_first_point_on_win),
            game_ended: true,
        }
    }
}

fn step_up(value: PointValue) -> PointValue {
    match value {
        PointValue::Love => PointValue::Fifteen,
        PointValue::Fifteen => PointValue::Thirty,
        PointValue::Thirty => PointValue::Forty,
        // 40 and AD are resolved by the rule table before stepping
        PointValue::Forty | PointValue::Advantage => value,
    }
}

/// One step back along 40 -> 30 -> 15 -> 0; love is the floor.
pub(crate) fn step_down(value: PointValue) -> PointValue {
    match value {
        PointValue::Advantage => PointValue::Forty,
        PointValue::Forty => PointValue::Thirty,
        PointValue::Thirty => PointValue::Fifteen,
        PointValue::Fifteen | PointValue::Love => PointValue::Love,
    }
}
