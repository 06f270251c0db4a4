//! Batch simulation of independent games.
//!
//! Every game gets its own clone of both teams and its own generator seeded
//! from the caller's seed list, so games share no mutable state and run in
//! parallel without synchronization.

use super::game_engine::GameEngine;
use crate::error::Result;
use crate::models::{GameOutcome, GameResult, Side, Team};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub games: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub tracked_runs_per_game: f64,
    pub opponent_runs_per_game: f64,
}

impl SeriesSummary {
    pub fn from_results(results: &[GameResult]) -> Self {
        let mut summary = Self { games: results.len() as u32, ..Self::default() };
        let mut tracked_runs = 0u64;
        let mut opponent_runs = 0u64;

        for result in results {
            match result.outcome {
                GameOutcome::Win => summary.wins += 1,
                GameOutcome::Loss => summary.losses += 1,
                GameOutcome::Draw => summary.draws += 1,
            }
            tracked_runs += result.score_of(result.tracked_side) as u64;
            opponent_runs += result.score_of(result.tracked_side.opponent()) as u64;
        }

        if summary.games > 0 {
            summary.tracked_runs_per_game = tracked_runs as f64 / summary.games as f64;
            summary.opponent_runs_per_game = opponent_runs as f64 / summary.games as f64;
        }
        summary
    }

    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesReport {
    pub seeds: Vec<u64>,
    pub results: Vec<GameResult>,
    pub summary: SeriesSummary,
}

/// Plays one game per seed. Results keep the order of `seeds`; the first
/// failing game aborts the series.
pub fn simulate_series(
    engine: &GameEngine,
    home: &Team,
    away: &Team,
    tracked: Side,
    seeds: &[u64],
) -> Result<SeriesReport> {
    let results = seeds
        .par_iter()
        .map(|&seed| engine.play_seeded(home.clone(), away.clone(), tracked, seed))
        .collect::<Result<Vec<_>>>()?;

    let summary = SeriesSummary::from_results(&results);
    Ok(SeriesReport { seeds: seeds.to_vec(), results, summary })
}
