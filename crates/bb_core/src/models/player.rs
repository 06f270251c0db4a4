//! Player records
//!
//! A player is either a pitcher or a batter. Each role carries its own
//! fixed-field ability ratings and cumulative statistics; rate fields in the
//! statistics are derived by [`crate::engine::stats::StatsRollup`] and never
//! accumulated directly.

use serde::{Deserialize, Serialize};

pub type PlayerId = u32;

/// Pitching ratings (nominal range 60-90).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitcherAbilities {
    pub power: u16,
    pub control: u16,
    pub breaking_ball: u16,
}

/// Batting ratings (nominal range 60-90).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatterAbilities {
    pub meet: u16,
    pub power: u16,
    pub speed: u16,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PitcherStats {
    /// K/9
    #[serde(default)]
    pub strikeout_rate: f64,
    /// BB/9
    #[serde(default)]
    pub walk_rate: f64,
    #[serde(default)]
    pub batting_avg_allowed: f64,
    #[serde(default)]
    pub innings_pitched: f64,
    #[serde(default)]
    pub strikeouts: u32,
    #[serde(default)]
    pub walks: u32,
    #[serde(default)]
    pub hits_allowed: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BatterStats {
    #[serde(default)]
    pub batting_avg: f64,
    #[serde(default)]
    pub at_bats: u32,
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
    #[serde(default)]
    pub plate_appearances: u32,
}

/// Role-specific part of a player record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum PlayerProfile {
    Pitcher {
        abilities: PitcherAbilities,
        #[serde(default)]
        stats: PitcherStats,
    },
    Batter {
        abilities: BatterAbilities,
        #[serde(default)]
        stats: BatterStats,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// Fielding position label ("P", "C", "1B", "SS", ...)
    pub position: String,
    #[serde(flatten)]
    pub profile: PlayerProfile,
}

impl Player {
    pub fn pitcher(
        id: PlayerId,
        name: impl Into<String>,
        position: impl Into<String>,
        abilities: PitcherAbilities,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            profile: PlayerProfile::Pitcher { abilities, stats: PitcherStats::default() },
        }
    }

    pub fn batter(
        id: PlayerId,
        name: impl Into<String>,
        position: impl Into<String>,
        abilities: BatterAbilities,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            position: position.into(),
            profile: PlayerProfile::Batter { abilities, stats: BatterStats::default() },
        }
    }

    pub fn is_pitcher(&self) -> bool {
        matches!(self.profile, PlayerProfile::Pitcher { .. })
    }

    pub fn pitching(&self) -> Option<&PitcherAbilities> {
        match &self.profile {
            PlayerProfile::Pitcher { abilities, .. } => Some(abilities),
            PlayerProfile::Batter { .. } => None,
        }
    }

    pub fn batting(&self) -> Option<&BatterAbilities> {
        match &self.profile {
            PlayerProfile::Batter { abilities, .. } => Some(abilities),
            PlayerProfile::Pitcher { .. } => None,
        }
    }

    pub fn pitcher_stats(&self) -> Option<&PitcherStats> {
        match &self.profile {
            PlayerProfile::Pitcher { stats, .. } => Some(stats),
            PlayerProfile::Batter { .. } => None,
        }
    }

    pub fn batter_stats(&self) -> Option<&BatterStats> {
        match &self.profile {
            PlayerProfile::Batter { stats, .. } => Some(stats),
            PlayerProfile::Pitcher { .. } => None,
        }
    }
}
