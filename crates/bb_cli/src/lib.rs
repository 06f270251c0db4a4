//! Baseball CLI Library
//!
//! File plumbing for the `bb_cli` binary:
//! - CSV roster → validated roster JSON with SHA256 checksum
//! - Game request / roster / game result loading
//! - Stats rollup from a saved game result

pub mod roster_csv;

use anyhow::{Context, Result};
use bb_core::api::{rollup_stats, RollupRequest, RollupResponse, SCHEMA_VERSION};
use bb_core::{GameRequest, Player, PlayerId, StatLine};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub use roster_csv::{parse_roster_csv, ParseStats};

/// Roster file metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterMetadata {
    /// SHA256 checksum of the written roster JSON (hex)
    pub checksum: String,
    /// Creation time (RFC3339)
    pub created_at: String,
    pub players: usize,
    pub pitchers: usize,
    pub batters: usize,
    pub rows_failed: u32,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    fs::write(path, contents)
        .with_context(|| format!("Failed to write output file: {}", path.display()))
}

/// Parses a CSV roster and writes the valid players as pretty JSON.
pub fn build_roster(csv_path: &Path, output_json: &Path) -> Result<RosterMetadata> {
    let (players, stats) = parse_roster_csv(csv_path)?;
    println!(
        "✅ Parsed {} players (failed: {}, total rows: {})",
        stats.parsed, stats.failed, stats.total_rows
    );

    let json = serde_json::to_string_pretty(&players).context("Failed to serialize roster")?;
    write_file(output_json, json.as_bytes())?;

    let pitchers = players.iter().filter(|p| p.is_pitcher()).count();
    Ok(RosterMetadata {
        checksum: sha256_hex(json.as_bytes()),
        created_at: chrono::Utc::now().to_rfc3339(),
        players: players.len(),
        pitchers,
        batters: players.len() - pitchers,
        rows_failed: stats.failed,
    })
}

pub fn verify_roster(roster_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(roster_file)
        .with_context(|| format!("Failed to read roster file: {}", roster_file.display()))?;
    Ok(sha256_hex(&bytes) == expected_checksum)
}

pub fn load_roster(path: &Path) -> Result<Vec<Player>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read roster file: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse roster JSON: {}", path.display()))
}

pub fn load_game_request(path: &Path) -> Result<GameRequest> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game request: {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse game request JSON: {}", path.display()))
}

/// Reads `stat_deltas` from a saved game result (engine result or API response).
pub fn load_stat_deltas(path: &Path) -> Result<BTreeMap<PlayerId, StatLine>> {
    #[derive(Deserialize)]
    struct Deltas {
        #[serde(default)]
        stat_deltas: BTreeMap<PlayerId, StatLine>,
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read game result: {}", path.display()))?;
    let deltas: Deltas = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse game result JSON: {}", path.display()))?;
    Ok(deltas.stat_deltas)
}

/// Applies a saved game's deltas to a roster file.
pub fn rollup_roster(roster: &Path, game_result: &Path) -> Result<RollupResponse> {
    let request = RollupRequest {
        schema_version: SCHEMA_VERSION,
        players: load_roster(roster)?,
        deltas: load_stat_deltas(game_result)?,
    };
    rollup_stats(request).context("Stats rollup failed")
}

#[cfg(test)]
mod tests {
    use super::*;
    use bb_core::data::{sample_lineup, sample_roster};
    use bb_core::{EngineConfig, Side, TeamData};
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_build_and_verify_roster() -> Result<()> {
        let mut csv = NamedTempFile::new()?;
        csv.write_all(
            b"id,name,position,role,power,control,breaking_ball,meet,speed\n\
              1,Yamada Taro,P,pitcher,82,74,78,,\n\
              2,Tanaka Kenta,C,batter,72,,,68,55\n\
              3,Suzuki Ichiro,1B,batter,64,,,88,90\n",
        )?;
        let dir = tempdir()?;
        let out = dir.path().join("rosters/tigers.json");

        let meta = build_roster(csv.path(), &out)?;

        assert_eq!((meta.players, meta.pitchers, meta.batters), (3, 1, 2));
        assert_eq!(meta.rows_failed, 0);
        assert!(verify_roster(&out, &meta.checksum)?);
        assert!(!verify_roster(&out, "deadbeef")?);

        let loaded = load_roster(&out)?;
        assert_eq!(loaded.len(), 3);
        assert_eq!(loaded[2].name, "Suzuki Ichiro");
        Ok(())
    }

    #[test]
    fn test_rollup_from_saved_game() -> Result<()> {
        let dir = tempdir()?;

        let roster_path = dir.path().join("tigers.json");
        fs::write(&roster_path, serde_json::to_string(&sample_roster(0))?)?;

        let request = GameRequest {
            schema_version: SCHEMA_VERSION,
            seed: 11,
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
        };
        let game_path = dir.path().join("game.json");
        let response_json = bb_core::simulate_game_json(&serde_json::to_string(&request)?)
            .map_err(anyhow::Error::msg)?;
        fs::write(&game_path, response_json)?;

        let response = rollup_roster(&roster_path, &game_path)?;

        assert!(response.updated > 0);
        let pitcher = response.players.iter().find(|p| p.id == 1).and_then(|p| p.pitcher_stats());
        assert!(pitcher.map(|s| s.innings_pitched > 0.0).unwrap_or(false));
        Ok(())
    }

    #[test]
    fn test_load_game_request_reports_path() {
        let err = load_game_request(Path::new("/nonexistent/request.json")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/request.json"));
    }
}
