use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{GameResult, GameScore, MatchScoreState, Side};

/// Ordering key of a point; the id of the rally/section it came from.
pub type SequenceId = i64;

/// One completed point, ready for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointEvent {
    #[ts(type = "number")]
    pub sequence_id: SequenceId,
    pub winner: Side,
}

impl PointEvent {
    pub fn new(sequence_id: SequenceId, winner: Side) -> Self {
        Self {
            sequence_id,
            winner,
        }
    }

    /// Build a point from a stored section, scoring it for `default_winner`
    /// when the section does not say who won.
    pub fn from_section(section: &SectionRecord, default_winner: Side) -> Self {
        Self {
            sequence_id: section.id,
            winner: section.point_winner().unwrap_or(default_winner),
        }
    }
}

/// Scoreboard state after one point of a derived timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TimelineEntry {
    #[ts(type = "number")]
    pub sequence_id: SequenceId,
    pub winner: Side,
    /// Displayed score, with the first point of the next game already
    /// carried over when this point won a game.
    pub score: GameScore,
    pub game_ended: bool,
    pub game_start: bool,
}

impl TimelineEntry {
    pub fn state(&self) -> MatchScoreState {
        if self.game_ended {
            MatchScoreState::GameWon(GameResult {
                winner: self.winner,
            })
        } else {
            MatchScoreState::InGame(self.score)
        }
    }
}

/// Rally/section record as persisted by the video analysis pipeline.
/// Only `id` and `summary.player_won_point` matter for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionRecord {
    #[ts(type = "number")]
    pub id: SequenceId,
    #[serde(default)]
    pub summary: Option<SectionSummary>,
}

impl SectionRecord {
    pub fn point_winner(&self) -> Option<Side> {
        self.summary.as_ref().and_then(|s| s.player_won_point)
    }
}

/// Only the point winner is read; any other summary keys are skipped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SectionSummary {
    #[serde(default)]
    pub player_won_point: Option<Side>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_with_winner() {
        let section: SectionRecord = serde_json::from_str(
            r#"{"id": 7, "summary": {"player_won_point": "bottom", "rally_size": 9, "valid_rally": true}}"#,
        )
        .unwrap();

        let event = PointEvent::from_section(&section, Side::Top);
        assert_eq!(event, PointEvent::new(7, Side::Bottom));
    }

    #[test]
    fn test_missing_winner_uses_default() {
        let no_summary: SectionRecord = serde_json::from_str(r#"{"id": 3}"#).unwrap();
        let empty_summary: SectionRecord =
            serde_json::from_str(r#"{"id": 4, "summary": {"rally_size": 2}}"#).unwrap();

        assert_eq!(
            PointEvent::from_section(&no_summary, Side::Bottom).winner,
            Side::Bottom
        );
        assert_eq!(
            PointEvent::from_section(&empty_summary, Side::Top).winner,
            Side::Top
        );
    }

    #[test]
    fn test_extra_fields_are_ignored() {
        let section: SectionRecord = serde_json::from_str(
            r#"{"id": 1, "start_time": 12.5, "summary": {"player_won_point": "top", "ball_speed": 140}}"#,
        )
        .unwrap();
        assert_eq!(section.point_winner(), Some(Side::Top));
    }

    #[test]
    fn test_rally_metadata_of_any_shape_is_ignored() {
        let bodies = [
            r#"{"id": 1, "summary": {"player_won_point": "top", "rally_size": 4.0}}"#,
            r#"{"id": 1, "summary": {"player_won_point": "top", "rally_size": -1}}"#,
            r#"{"id": 1, "summary": {"player_won_point": "top", "valid_rally": 1}}"#,
            r#"{"id": 1, "summary": {"player_won_point": "top", "valid_rally": "yes", "rally_size": null}}"#,
        ];
        for body in bodies {
            let section: SectionRecord = serde_json::from_str(body).unwrap();
            assert_eq!(section.point_winner(), Some(Side::Top), "{}", body);
        }
    }
}
