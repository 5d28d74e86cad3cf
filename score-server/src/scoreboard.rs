use score_core::{ScoreEditor, ScoreTimeline, derive_match, events_from_sections};
use score_types::{EditRequest, EditableScoreState, ScoreboardRequest, ScoreboardResponse};

use crate::config::Config;
use crate::error::ServerError;

/// Derive everything the scoreboard needs for one playback position.
pub fn build_scoreboard(request: &ScoreboardRequest, config: &Config) -> ScoreboardResponse {
    let default_winner = request.default_winner.unwrap_or(config.default_winner);
    let format = request.format.unwrap_or(config.format);

    let events = events_from_sections(&request.sections, default_winner);
    let timeline = ScoreTimeline::derive(&events);
    let snapshots = derive_match(&events, format);

    let (played, score, state) = match request.target_id {
        Some(target) => (
            timeline.points_through(target),
            timeline.score_at(target),
            timeline.state_at(target),
        ),
        None => (timeline.len(), timeline.final_score(), timeline.final_state()),
    };

    // Snapshots line up with timeline entries: both fold the same ordering
    let match_score = played
        .checked_sub(1)
        .and_then(|index| snapshots.get(index).cloned())
        .unwrap_or_default();

    ScoreboardResponse {
        entries: timeline.entries().to_vec(),
        boundaries: timeline.boundaries().into_iter().collect(),
        score,
        state,
        match_score,
    }
}

/// Apply one manual edit. Scores the engine could never produce are refused.
pub fn apply_edit(request: &EditRequest) -> Result<EditableScoreState, ServerError> {
    let state = request.state;
    if !state.score.is_valid() {
        return Err(ServerError::InvalidScore(state.score.to_string()));
    }
    if let Some(previous) = state.previous.filter(|previous| !previous.is_valid()) {
        return Err(ServerError::InvalidScore(previous.to_string()));
    }

    Ok(ScoreEditor::apply(&state, request.action))
}

#[cfg(test)]
mod tests {
    use super::*;
    use score_types::{
        EditAction, GameScore, MatchFormat, MatchScoreState, PointScore, PointValue, SectionRecord,
        SectionSummary, SetScore, Side,
    };

    fn section(id: i64, winner: Option<Side>) -> SectionRecord {
        SectionRecord {
            id,
            summary: Some(SectionSummary {
                player_won_point: winner,
                ..Default::default()
            }),
        }
    }

    fn request(sections: Vec<SectionRecord>, target_id: Option<i64>) -> ScoreboardRequest {
        ScoreboardRequest {
            sections,
            default_winner: None,
            target_id,
            format: None,
        }
    }

    #[test]
    fn test_scoreboard_at_target() {
        let sections = (1..=5).map(|id| section(id, Some(Side::Top))).collect();
        let response = build_scoreboard(&request(sections, Some(4)), &Config::default());

        assert_eq!(response.entries.len(), 5);
        assert_eq!(response.boundaries, vec![1, 4]);
        assert_eq!(response.score, GameScore::first_point_for(Side::Top));
        assert_eq!(
            response.state,
            MatchScoreState::GameWon(score_types::GameResult { winner: Side::Top })
        );
        assert_eq!(response.match_score.current_set, SetScore { top: 1, bottom: 0 });
    }

    #[test]
    fn test_scoreboard_without_target_uses_last_point() {
        let sections = (1..=5).map(|id| section(id, Some(Side::Top))).collect();
        let response = build_scoreboard(&request(sections, None), &Config::default());

        let expected = GameScore::new(PointValue::Thirty, PointValue::Love);
        assert_eq!(response.score, expected);
        assert_eq!(response.state, MatchScoreState::InGame(expected));
        assert_eq!(response.match_score.point, PointScore::Game(expected));
    }

    #[test]
    fn test_missing_winners_use_configured_then_requested_default() {
        let sections = vec![section(1, None), section(2, None)];
        let config = Config {
            default_winner: Side::Bottom,
            ..Config::default()
        };

        let response = build_scoreboard(&request(sections.clone(), None), &config);
        assert_eq!(response.score, GameScore::new(PointValue::Love, PointValue::Thirty));

        let mut overridden = request(sections, None);
        overridden.default_winner = Some(Side::Top);
        overridden.format = Some(MatchFormat::default());
        let response = build_scoreboard(&overridden, &config);
        assert_eq!(response.score, GameScore::new(PointValue::Thirty, PointValue::Love));
    }

    #[test]
    fn test_empty_scoreboard() {
        let response = build_scoreboard(&request(vec![], Some(3)), &Config::default());
        assert!(response.entries.is_empty());
        assert!(response.boundaries.is_empty());
        assert_eq!(response.score, GameScore::LOVE_ALL);
        assert_eq!(response.match_score, Default::default());
    }

    #[test]
    fn test_edit_rejects_impossible_score() {
        let request = EditRequest {
            state: EditableScoreState::new(GameScore::new(
                PointValue::Advantage,
                PointValue::Fifteen,
            )),
            action: EditAction::Increment { side: Side::Top },
        };
        assert!(matches!(
            apply_edit(&request),
            Err(ServerError::InvalidScore(_))
        ));
    }

    #[test]
    fn test_edit_applies_action() {
        let request = EditRequest {
            state: EditableScoreState::new(GameScore::new(PointValue::Forty, PointValue::Thirty)),
            action: EditAction::Increment { side: Side::Top },
        };
        let next = apply_edit(&request).unwrap();
        assert_eq!(next.score, GameScore::first_point_for(Side::Top));
        assert_eq!(next.previous, Some(request.state.score));
    }
}
