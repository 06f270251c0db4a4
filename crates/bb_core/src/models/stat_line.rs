//! Per-game raw event counts for one player.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BattingDelta {
    #[serde(default)]
    pub plate_appearances: u32,
    #[serde(default)]
    pub hits: u32,
    #[serde(default)]
    pub walks: u32,
    #[serde(default)]
    pub strikeouts: u32,
    #[serde(default)]
    pub home_runs: u32,
    #[serde(default)]
    pub steals: u32,
}

impl BattingDelta {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PitchingDelta {
    /// One third of an inning per resolved at-bat
    #[serde(default)]
    pub innings_pitched_thirds: u32,
    #[serde(default)]
    pub strikeouts: u32,
    #[serde(default)]
    pub walks: u32,
    #[serde(default)]
    pub hits_allowed: u32,
}

impl PitchingDelta {
    pub fn innings_pitched(&self) -> f64 {
        self.innings_pitched_thirds as f64 / 3.0
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum StatLine {
    Batting(BattingDelta),
    Pitching(PitchingDelta),
}

impl StatLine {
    pub fn is_empty(&self) -> bool {
        match self {
            StatLine::Batting(d) => d.is_empty(),
            StatLine::Pitching(d) => d.is_empty(),
        }
    }
}
