#![allow(dead_code)]

use score_types::{EditableScoreState, GameScore, PointEvent, PointValue, SequenceId, Side};

pub const T: Side = Side::Top;
pub const B: Side = Side::Bottom;

/// Events numbered 1, 2, 3... in the order given.
pub fn events_from_winners(winners: &[Side]) -> Vec<PointEvent> {
    winners
        .iter()
        .enumerate()
        .map(|(i, winner)| PointEvent::new(i as SequenceId + 1, *winner))
        .collect()
}

pub fn score(top: PointValue, bottom: PointValue) -> GameScore {
    GameScore::new(top, bottom)
}

pub fn editable(top: PointValue, bottom: PointValue) -> EditableScoreState {
    EditableScoreState::new(score(top, bottom))
}

/// Deterministic winner sequences for exercising the engine over many inputs.
pub fn pseudo_random_winners(seed: u64, len: usize) -> Vec<Side> {
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    (0..len)
        .map(|_| {
            state = state
                .wrapping_mul(6364136223846793005)
                .wrapping_add(1442695040888963407);
            if (state >> 33) & 1 == 0 { T } else { B }
        })
        .collect()
}

/// Asserts the scoreboard never shows an impossible score.
pub fn assert_valid(score: GameScore) {
    assert!(score.is_valid(), "Invalid score on scoreboard: {:?}", score);
}
