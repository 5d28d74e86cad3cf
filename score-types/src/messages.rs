use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::{
    EditableScoreState, GameScore, MatchFormat, MatchScoreState, MatchSnapshot, SectionRecord,
    SequenceId, Side, TimelineEntry,
};

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreboardRequest {
    pub sections: Vec<SectionRecord>,
    #[serde(default)]
    pub default_winner: Option<Side>,
    #[serde(default)]
    #[ts(type = "number | null")]
    pub target_id: Option<SequenceId>,
    #[serde(default)]
    pub format: Option<MatchFormat>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreboardResponse {
    pub entries: Vec<TimelineEntry>,
    #[ts(type = "Array<number>")]
    pub boundaries: Vec<SequenceId>,
    pub score: GameScore,
    pub state: MatchScoreState,
    pub match_score: MatchSnapshot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type")]
#[ts(export)]
pub enum EditAction {
    Increment { side: Side },
    Decrement { side: Side },
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EditRequest {
    #[serde(default)]
    pub state: EditableScoreState,
    pub action: EditAction,
}
