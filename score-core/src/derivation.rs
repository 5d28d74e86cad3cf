use std::collections::BTreeSet;

use score_types::{GameScore, MatchScoreState, PointEvent, SequenceId, Side, TimelineEntry};
use tracing::debug;

use crate::ScoringEngine;

/// Score shown after `target`: every event with a sequence id up to and
/// including `target`, folded in ascending order with carry-over.
///
/// Each call sorts and folds from the first event. For repeated lookups over
/// the same events, derive a [`ScoreTimeline`] once and use
/// [`ScoreTimeline::score_at`].
pub fn score_at_event(events: &[PointEvent], target: SequenceId) -> GameScore {
    ordered(events)
        .into_iter()
        .filter(|event| event.sequence_id <= target)
        .fold(GameScore::LOVE_ALL, |score, event| {
            ScoringEngine::award_point(score, event.winner, true).score
        })
}

/// Sequence ids of the points that open a game on the scoreboard.
pub fn game_start_boundaries(events: &[PointEvent]) -> BTreeSet<SequenceId> {
    ScoreTimeline::derive(events).boundaries()
}

/// Events sorted by sequence id without touching the caller's slice.
pub(crate) fn ordered(events: &[PointEvent]) -> Vec<&PointEvent> {
    let mut sorted: Vec<&PointEvent> = events.iter().collect();
    sorted.sort_by_key(|event| event.sequence_id);
    sorted
}

fn is_game_opening(score: GameScore) -> bool {
    score == GameScore::first_point_for(Side::Top)
        || score == GameScore::first_point_for(Side::Bottom)
}

/// Every intermediate scoreboard state of a sequence, folded once so that
/// repeated lookups during playback do not re-derive from the start.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTimeline {
    entries: Vec<TimelineEntry>,
}

impl ScoreTimeline {
    pub fn derive(events: &[PointEvent]) -> Self {
        let mut entries = Vec::with_capacity(events.len());
        let mut score = GameScore::LOVE_ALL;
        let mut last_displayed: Option<GameScore> = None;

        for event in ordered(events) {
            let outcome = ScoringEngine::award_point(score, event.winner, true);
            score = outcome.score;

            // Only the first point of a 15-0 / 0-15 run marks a new game
            let game_start = is_game_opening(score) && last_displayed != Some(score);

            entries.push(TimelineEntry {
                sequence_id: event.sequence_id,
                winner: event.winner,
                score,
                game_ended: outcome.game_ended,
                game_start,
            });
            last_displayed = Some(score);
        }

        let timeline = Self { entries };
        debug!(
            points = timeline.len(),
            games_completed = timeline.games_completed(),
            "Derived score timeline"
        );
        timeline
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of points played up to and including `target`.
    pub fn points_through(&self, target: SequenceId) -> usize {
        self.entries
            .partition_point(|entry| entry.sequence_id <= target)
    }

    /// Last entry whose sequence id is at or before `target`.
    pub fn entry_at(&self, target: SequenceId) -> Option<&TimelineEntry> {
        self.points_through(target)
            .checked_sub(1)
            .map(|index| &self.entries[index])
    }

    pub fn score_at(&self, target: SequenceId) -> GameScore {
        self.entry_at(target)
            .map(|entry| entry.score)
            .unwrap_or(GameScore::LOVE_ALL)
    }

    pub fn state_at(&self, target: SequenceId) -> MatchScoreState {
        self.entry_at(target)
            .map(TimelineEntry::state)
            .unwrap_or(MatchScoreState::InGame(GameScore::LOVE_ALL))
    }

    pub fn final_score(&self) -> GameScore {
        self.entries
            .last()
            .map(|entry| entry.score)
            .unwrap_or(GameScore::LOVE_ALL)
    }

    pub fn final_state(&self) -> MatchScoreState {
        self.entries
            .last()
            .map(TimelineEntry::state)
            .unwrap_or(MatchScoreState::InGame(GameScore::LOVE_ALL))
    }

    pub fn boundaries(&self) -> BTreeSet<SequenceId> {
        self.entries
            .iter()
            .filter(|entry| entry.game_start)
            .map(|entry| entry.sequence_id)
            .collect()
    }

    pub fn games_completed(&self) -> usize {
        self.entries.iter().filter(|entry| entry.game_ended).count()
    }
}
