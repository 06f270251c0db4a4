//! CSV roster import
//!
//! Expected columns (header row required):
//! `id,name,position,role,power,control,breaking_ball,meet,speed`
//!
//! - `role` is `pitcher` or `batter`
//! - pitchers read `power`, `control`, `breaking_ball`
//! - batters read `meet`, `power`, `speed`
//!
//! Columns a role does not use may be left empty. Rows that fail to parse or
//! carry out-of-range ratings are skipped with a warning and counted.

use anyhow::{Context, Result};
use bb_core::models::{BatterAbilities, PitcherAbilities};
use bb_core::{LineupValidator, Player};
use std::collections::BTreeSet;
use std::path::Path;

const COL_ID: usize = 0;
const COL_NAME: usize = 1;
const COL_POSITION: usize = 2;
const COL_ROLE: usize = 3;
const COL_POWER: usize = 4;
const COL_CONTROL: usize = 5;
const COL_BREAKING_BALL: usize = 6;
const COL_MEET: usize = 7;
const COL_SPEED: usize = 8;
const COLUMN_COUNT: usize = 9;

/// CSV parsing statistics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseStats {
    pub total_rows: u32,
    pub parsed: u32,
    pub failed: u32,
}

pub fn parse_roster_csv(csv_path: &Path) -> Result<(Vec<Player>, ParseStats)> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(csv_path)
        .with_context(|| format!("Failed to open CSV file: {}", csv_path.display()))?;

    let mut players = Vec::new();
    let mut seen = BTreeSet::new();
    let mut stats = ParseStats::default();

    macro_rules! parse_field {
        ($record:expr, $idx:expr, $name:expr, $ty:ty, $row:expr) => {
            match $record[$idx].parse::<$ty>() {
                Ok(v) => v,
                Err(_) => {
                    stats.failed += 1;
                    eprintln!("Warning: Line {} - Invalid {} value: '{}'", $row, $name, &$record[$idx]);
                    continue;
                }
            }
        };
    }

    for (index, record) in reader.records().enumerate() {
        // Header is line 1
        let row = index + 2;
        stats.total_rows += 1;

        let record = match record {
            Ok(record) => record,
            Err(e) => {
                stats.failed += 1;
                eprintln!("Warning: Line {} - {}", row, e);
                continue;
            }
        };
        if record.len() < COLUMN_COUNT {
            stats.failed += 1;
            eprintln!(
                "Warning: Line {} - Expected {} columns, found {}",
                row,
                COLUMN_COUNT,
                record.len()
            );
            continue;
        }

        let id = parse_field!(record, COL_ID, "id", u32, row);
        let name = &record[COL_NAME];
        let position = &record[COL_POSITION];

        let player = match record[COL_ROLE].to_ascii_lowercase().as_str() {
            "pitcher" => {
                let power = parse_field!(record, COL_POWER, "power", u16, row);
                let control = parse_field!(record, COL_CONTROL, "control", u16, row);
                let breaking_ball = parse_field!(record, COL_BREAKING_BALL, "breaking_ball", u16, row);
                Player::pitcher(id, name, position, PitcherAbilities { power, control, breaking_ball })
            }
            "batter" => {
                let meet = parse_field!(record, COL_MEET, "meet", u16, row);
                let power = parse_field!(record, COL_POWER, "power", u16, row);
                let speed = parse_field!(record, COL_SPEED, "speed", u16, row);
                Player::batter(id, name, position, BatterAbilities { meet, power, speed })
            }
            other => {
                stats.failed += 1;
                eprintln!("Warning: Line {} - Unknown role '{}'", row, other);
                continue;
            }
        };

        if let Err(e) = LineupValidator::validate_player(&player) {
            stats.failed += 1;
            eprintln!("Warning: Line {} - {}", row, e);
            continue;
        }
        if !seen.insert(id) {
            stats.failed += 1;
            eprintln!("Warning: Line {} - Duplicate player id {}", row, id);
            continue;
        }

        players.push(player);
        stats.parsed += 1;
    }

    Ok((players, stats))
}
