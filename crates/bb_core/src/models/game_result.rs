//! Game result returned by the engine.
//!
//! The result is the only output of a simulation: final score, the outcome
//! for the tracked side, raw stat deltas for the tracked players, and the
//! play-by-play log. Persisting any of it is up to the caller.

use super::{PlayEvent, PlayerId, Side, StatLine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Outcome relative to the tracked side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameOutcome {
    Win,
    Loss,
    Draw,
}

impl GameOutcome {
    pub fn from_runs(tracked_runs: u32, opponent_runs: u32) -> Self {
        match tracked_runs.cmp(&opponent_runs) {
            std::cmp::Ordering::Greater => GameOutcome::Win,
            std::cmp::Ordering::Less => GameOutcome::Loss,
            std::cmp::Ordering::Equal => GameOutcome::Draw,
        }
    }
}

/// Runs per half-inning, one entry per inning each side came to bat.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LineScore {
    pub away: Vec<u32>,
    pub home: Vec<u32>,
}

impl LineScore {
    pub fn side(&self, side: Side) -> &[u32] {
        match side {
            Side::Away => &self.away,
            Side::Home => &self.home,
        }
    }

    pub(crate) fn side_mut(&mut self, side: Side) -> &mut Vec<u32> {
        match side {
            Side::Away => &mut self.away,
            Side::Home => &mut self.home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameResult {
    pub home_team: String,
    pub away_team: String,
    pub home_score: u32,
    pub away_score: u32,
    pub tracked_side: Side,
    pub outcome: GameOutcome,
    pub innings_played: u8,
    pub line_score: LineScore,
    /// Raw counts for the tracked side only
    pub stat_deltas: BTreeMap<PlayerId, StatLine>,
    pub log: Vec<String>,
    pub events: Vec<PlayEvent>,
}

impl GameResult {
    /// Winning team name, `None` for a draw.
    pub fn winner(&self) -> Option<&str> {
        match self.home_score.cmp(&self.away_score) {
            std::cmp::Ordering::Greater => Some(&self.home_team),
            std::cmp::Ordering::Less => Some(&self.away_team),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn score_of(&self, side: Side) -> u32 {
        match side {
            Side::Away => self.away_score,
            Side::Home => self.home_score,
        }
    }

    /// SHA-256 over the play-by-play lines, newline-joined. Equal seeds and
    /// lineups yield equal digests.
    pub fn log_sha256(&self) -> String {
        let mut hasher = Sha256::new();
        for line in &self.log {
            hasher.update(line.as_bytes());
            hasher.update(b"\n");
        }
        format!("{:x}", hasher.finalize())
    }
}
