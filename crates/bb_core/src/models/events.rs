use super::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the two clubs. The away side bats in the top half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Away,
    #[default]
    Home,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Away => Side::Home,
            Side::Home => Side::Away,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Side::Away => 0,
            Side::Home => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Half {
    Top,
    Bottom,
}

impl fmt::Display for Half {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Half::Top => write!(f, "Top"),
            Half::Bottom => write!(f, "Bottom"),
        }
    }
}

/// Result of a single plate appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AtBatOutcome {
    Strikeout,
    Walk,
    Single,
    Double,
    Triple,
    HomeRun,
    /// Ball in play converted into an out
    Out,
}

impl AtBatOutcome {
    /// Bases the batter advances; 0 for outs, 4 for a home run.
    pub fn bases_advanced(self) -> u8 {
        match self {
            AtBatOutcome::Strikeout | AtBatOutcome::Out => 0,
            AtBatOutcome::Walk | AtBatOutcome::Single => 1,
            AtBatOutcome::Double => 2,
            AtBatOutcome::Triple => 3,
            AtBatOutcome::HomeRun => 4,
        }
    }

    pub fn is_hit(self) -> bool {
        matches!(
            self,
            AtBatOutcome::Single | AtBatOutcome::Double | AtBatOutcome::Triple | AtBatOutcome::HomeRun
        )
    }

    pub fn is_out(self) -> bool {
        matches!(self, AtBatOutcome::Strikeout | AtBatOutcome::Out)
    }

    /// Verb phrase used in the play-by-play log.
    pub fn describe(self) -> &'static str {
        match self {
            AtBatOutcome::Strikeout => "strikes out",
            AtBatOutcome::Walk => "draws a walk",
            AtBatOutcome::Single => "singles",
            AtBatOutcome::Double => "doubles",
            AtBatOutcome::Triple => "triples",
            AtBatOutcome::HomeRun => "hits a home run",
            AtBatOutcome::Out => "is out",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StealOutcome {
    StolenBase,
    CaughtStealing,
    NoAttempt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlayKind {
    AtBat {
        batter_id: PlayerId,
        pitcher_id: PlayerId,
        outcome: AtBatOutcome,
    },
    Steal {
        runner_id: PlayerId,
        outcome: StealOutcome,
    },
}

/// One resolved play. Generic outs get an event but no play-by-play line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayEvent {
    pub inning: u8,
    pub half: Half,
    #[serde(flatten)]
    pub kind: PlayKind,
    pub outs_after: u8,
    pub runs_scored: u32,
}
