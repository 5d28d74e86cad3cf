use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Side {
    #[default]
    Top,
    Bottom,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Bottom => Side::Top,
        }
    }
}

impl std::str::FromStr for Side {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "top" => Ok(Side::Top),
            "bottom" => Ok(Side::Bottom),
            other => Err(format!("unknown side: {}", other)),
        }
    }
}

/// Point count of one side within a standard game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum PointValue {
    #[serde(rename = "0")]
    Love,
    #[serde(rename = "15")]
    Fifteen,
    #[serde(rename = "30")]
    Thirty,
    #[serde(rename = "40")]
    Forty,
    #[serde(rename = "AD")]
    Advantage,
}

impl PointValue {
    pub fn label(self) -> &'static str {
        match self {
            PointValue::Love => "0",
            PointValue::Fifteen => "15",
            PointValue::Thirty => "30",
            PointValue::Forty => "40",
            PointValue::Advantage => "AD",
        }
    }
}

impl std::fmt::Display for PointValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameScore {
    pub top: PointValue,
    pub bottom: PointValue,
}

impl GameScore {
    pub const LOVE_ALL: GameScore = GameScore {
        top: PointValue::Love,
        bottom: PointValue::Love,
    };

    pub const DEUCE: GameScore = GameScore {
        top: PointValue::Forty,
        bottom: PointValue::Forty,
    };

    pub fn new(top: PointValue, bottom: PointValue) -> Self {
        Self { top, bottom }
    }

    /// Score showing `PointValue::Fifteen` for `side` and love for the other.
    pub fn first_point_for(side: Side) -> Self {
        Self::LOVE_ALL.with(side, PointValue::Fifteen)
    }

    pub fn get(&self, side: Side) -> PointValue {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    pub fn with(mut self, side: Side, value: PointValue) -> Self {
        match side {
            Side::Top => self.top = value,
            Side::Bottom => self.bottom = value,
        }
        self
    }

    pub fn is_deuce(&self) -> bool {
        *self == Self::DEUCE
    }

    /// Side currently holding advantage, if any.
    pub fn advantage(&self) -> Option<Side> {
        match (self.top, self.bottom) {
            (PointValue::Advantage, _) => Some(Side::Top),
            (_, PointValue::Advantage) => Some(Side::Bottom),
            _ => None,
        }
    }

    /// At most one side holds advantage, and only against 40.
    pub fn is_valid(&self) -> bool {
        match (self.top, self.bottom) {
            (PointValue::Advantage, other) | (other, PointValue::Advantage) => {
                other == PointValue::Forty
            }
            _ => true,
        }
    }
}

impl Default for GameScore {
    fn default() -> Self {
        Self::LOVE_ALL
    }
}

impl std::fmt::Display for GameScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.top, self.bottom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct GameResult {
    pub winner: Side,
}

/// What the scoreboard shows for a point: a running game or a game just won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value")]
#[ts(export)]
pub enum MatchScoreState {
    InGame(GameScore),
    GameWon(GameResult),
}

/// Score under manual editing, with one level of undo for a game-winning point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct EditableScoreState {
    pub score: GameScore,
    #[serde(default)]
    pub previous: Option<GameScore>,
}

impl EditableScoreState {
    pub fn new(score: GameScore) -> Self {
        Self {
            score,
            previous: None,
        }
    }

    pub fn can_undo(&self) -> bool {
        self.previous.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TiebreakScore {
    pub top: u32,
    pub bottom: u32,
}

impl TiebreakScore {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }
}

/// Live point score: a standard game, or a tiebreak counted in plain points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "kind", content = "value")]
#[ts(export)]
pub enum PointScore {
    Game(GameScore),
    Tiebreak(TiebreakScore),
}

impl Default for PointScore {
    fn default() -> Self {
        PointScore::Game(GameScore::LOVE_ALL)
    }
}

/// Games won in one set. Advantage sets have no upper bound on length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SetScore {
    pub top: u32,
    pub bottom: u32,
}

impl SetScore {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Top => self.top,
            Side::Bottom => self.bottom,
        }
    }

    pub fn leader(&self) -> Option<Side> {
        match self.top.cmp(&self.bottom) {
            std::cmp::Ordering::Greater => Some(Side::Top),
            std::cmp::Ordering::Less => Some(Side::Bottom),
            std::cmp::Ordering::Equal => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct MatchFormat {
    pub games_per_set: u8,
    pub tiebreak: bool,
}

impl Default for MatchFormat {
    fn default() -> Self {
        Self {
            games_per_set: 6,
            tiebreak: true,
        }
    }
}

/// Full scoreboard after one point: finished sets, the current set and the live point.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MatchSnapshot {
    pub completed_sets: Vec<SetScore>,
    pub current_set: SetScore,
    pub point: PointScore,
}
