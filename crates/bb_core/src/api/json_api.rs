use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, GameEngine, StatsRollup};
use crate::error::{GameError, Result};
use crate::models::{GameResult, Lineup, Player, PlayerId, Side, StatLine, Team};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::BTreeMap;

pub const SCHEMA_VERSION: u8 = 1;

fn check_schema(found: u8) -> Result<()> {
    if found == SCHEMA_VERSION {
        Ok(())
    } else {
        Err(GameError::SchemaVersion { found, expected: SCHEMA_VERSION })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRequest {
    pub schema_version: u8,
    pub seed: u64,
    pub home_team: TeamData,
    pub away_team: TeamData,
    /// Which club accumulates stats and may attempt steals (default: home)
    #[serde(default)]
    pub tracked: Side,
    /// Falls back to `BB_ENGINE_CONFIG_PATH`, then to the standard rules
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamData {
    pub name: String,
    pub players: Vec<Player>,
    #[serde(default)]
    pub lineup: Option<Lineup>,
}

impl TeamData {
    pub fn into_team(self) -> Result<Team> {
        let lineup = self.lineup.ok_or_else(|| GameError::LineupNotSet { team: self.name.clone() })?;
        Team::new(self.name, self.players, lineup)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GameResponse {
    pub schema_version: u8,
    pub seed: u64,
    pub log_sha256: String,
    #[serde(flatten)]
    pub result: GameResult,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupRequest {
    pub schema_version: u8,
    pub players: Vec<Player>,
    #[serde(default)]
    pub deltas: BTreeMap<PlayerId, StatLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RollupResponse {
    pub schema_version: u8,
    pub updated: usize,
    pub players: Vec<Player>,
}

/// Typed entry point behind [`simulate_game_json`].
pub fn simulate_game(request: GameRequest) -> Result<GameResponse> {
    check_schema(request.schema_version)?;

    let config = match request.config {
        Some(config) => config,
        None => EngineConfig::from_env()?,
    };
    let engine = GameEngine::new(config)?;

    let home = request.home_team.into_team()?;
    let away = request.away_team.into_team()?;

    let mut rng = ChaCha8Rng::seed_from_u64(request.seed);
    let result = engine.play(home, away, request.tracked, &mut rng)?;

    Ok(GameResponse {
        schema_version: SCHEMA_VERSION,
        seed: request.seed,
        log_sha256: result.log_sha256(),
        result,
    })
}

/// Main entry point for the JSON API: simulates one game from a JSON request.
pub fn simulate_game_json(request_json: &str) -> std::result::Result<String, String> {
    let request: GameRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let response = simulate_game(request).map_err(|e| e.to_string())?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}

pub fn rollup_stats(request: RollupRequest) -> Result<RollupResponse> {
    check_schema(request.schema_version)?;

    let mut players = request.players;
    let updated = StatsRollup::apply(&mut players, &request.deltas)?;
    Ok(RollupResponse { schema_version: SCHEMA_VERSION, updated, players })
}

/// Folds a game's stat deltas into cumulative player stats.
pub fn rollup_stats_json(request_json: &str) -> std::result::Result<String, String> {
    let request: RollupRequest =
        serde_json::from_str(request_json).map_err(|e| format!("Invalid JSON request: {}", e))?;

    let response = rollup_stats(request).map_err(|e| e.to_string())?;

    serde_json::to_string(&response).map_err(|e| format!("Failed to serialize result: {}", e))
}
