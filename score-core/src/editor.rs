use score_types::{EditAction, EditableScoreState, GameScore, Side};
use tracing::debug;

use crate::ScoringEngine;
use crate::scoring::step_down;

/// Manual score editing with a single undo slot for game-winning points.
pub struct ScoreEditor;

impl ScoreEditor {
    pub fn apply(state: &EditableScoreState, action: EditAction) -> EditableScoreState {
        let next = match action {
            EditAction::Increment { side } => Self::increment(state, side),
            EditAction::Decrement { side } => Self::decrement(state, side),
        };
        debug!(?action, from = %state.score, to = %next.score, undo = next.can_undo(), "Applied score edit");
        next
    }

    /// Award a point to `side`. A game-winning point keeps the pre-win score
    /// so the next decrement can restore it exactly.
    pub fn increment(state: &EditableScoreState, side: Side) -> EditableScoreState {
        let outcome = ScoringEngine::award_point(state.score, side, true);
        EditableScoreState {
            score: outcome.score,
            previous: outcome.game_ended.then_some(state.score),
        }
    }

    /// Take a point back from `side`.
    ///
    /// Right after a game-winning point this undoes that point whichever side
    /// is named. From an advantage either side's decrement returns to deuce.
    /// Otherwise the named side steps back one level, never below love.
    pub fn decrement(state: &EditableScoreState, side: Side) -> EditableScoreState {
        if let Some(previous) = state.previous {
            return EditableScoreState::new(previous);
        }

        let score = state.score;
        let next = match score.advantage() {
            Some(_) => GameScore::DEUCE,
            None => score.with(side, step_down(score.get(side))),
        };

        debug_assert!(next.is_valid(), "invalid game score {:?}", next);
        EditableScoreState::new(next)
    }
}
