pub mod json_api;

pub use json_api::{
    rollup_stats, rollup_stats_json, simulate_game, simulate_game_json, GameRequest,
    GameResponse, RollupRequest, RollupResponse, TeamData, SCHEMA_VERSION,
};
