//! Baseball game engine
//!
//! - `probability`: pure at-bat and steal probability formulas
//! - `game_state`: inning/half/outs/bases state and run advancement
//! - `game_engine`: the half-inning loop and game assembly
//! - `stats`: cumulative statistics rollup
//! - `series`: parallel batches of independent games
//! - `config`: game-length rules and tuning knobs

pub mod config;
pub mod game_engine;
pub mod game_state;
pub mod probability;
pub mod series;
pub mod stats;

#[cfg(test)]
pub(crate) mod test_support;


pub use config::EngineConfig;
pub use game_engine::GameEngine;
pub use game_state::{Bases, GameState, TrackedIds, OUTS_PER_HALF};
pub use probability::AtBatOdds;
pub use series::{simulate_series, SeriesReport, SeriesSummary};
pub use stats::StatsRollup;
