//! # bb_core - Deterministic Baseball Game Simulation Engine
//!
//! This library simulates nine-inning baseball games at the plate-appearance
//! level, with a JSON API for easy integration with front ends.
//!
//! ## Features
//! - Deterministic simulation (same seed and lineups = same game)
//! - Rating-driven at-bat and steal probabilities
//! - Play-by-play log, structured events and line score
//! - Per-game stat deltas and a cumulative stats rollup
//! - Parallel series simulation

// Struct initialization pattern used intentionally
#![allow(clippy::field_reassign_with_default)]

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{
    rollup_stats_json, simulate_game, simulate_game_json, GameRequest, GameResponse,
    RollupRequest, RollupResponse, TeamData, SCHEMA_VERSION,
};
pub use error::{GameError, Result};

// Re-export engine types
pub use engine::{
    simulate_series, EngineConfig, GameEngine, GameState, SeriesReport, SeriesSummary,
    StatsRollup,
};

// Re-export models
pub use models::{
    AtBatOutcome, GameOutcome, GameResult, Half, Lineup, LineupValidator, Player, PlayerId, Side,
    StatLine, Team,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{sample_lineup, sample_roster};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(seed: u64) -> GameRequest {
        GameRequest {
            schema_version: SCHEMA_VERSION,
            seed,
            home_team: TeamData {
                name: "Tigers".to_string(),
                players: sample_roster(0),
                lineup: Some(sample_lineup(0)),
            },
            away_team: TeamData {
                name: "Giants".to_string(),
                players: sample_roster(100),
                lineup: Some(sample_lineup(100)),
            },
            tracked: Side::Home,
            config: Some(EngineConfig::standard()),
        }
    }

    #[test]
    fn test_deterministic_simulation() {
        let first = simulate_game(request(12345)).unwrap();
        let second = simulate_game(request(12345)).unwrap();

        assert_eq!(first.log_sha256, second.log_sha256);
        assert_eq!(first.result, second.result);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let hashes: std::collections::BTreeSet<String> =
            (0..8).map(|seed| simulate_game(request(seed)).unwrap().log_sha256).collect();
        assert!(hashes.len() > 1);
    }

    #[test]
    fn test_api_matches_direct_engine_call() {
        let response = simulate_game(request(77)).unwrap();

        let home = Team::new("Tigers", sample_roster(0), sample_lineup(0)).unwrap();
        let away = Team::new("Giants", sample_roster(100), sample_lineup(100)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(77);
        let direct = GameEngine::default().play(home, away, Side::Home, &mut rng).unwrap();

        assert_eq!(response.result, direct);
    }

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
