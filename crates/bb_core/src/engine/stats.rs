//! Statistics rollup: folds one game's raw deltas into cumulative player
//! stats and recomputes every derived rate from the updated counters.

use crate::error::{GameError, Result};
use crate::models::{
    BatterStats, BattingDelta, PitcherStats, PitchingDelta, Player, PlayerId, PlayerProfile,
    StatLine,
};
use std::collections::BTreeMap;
use tracing::debug;

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

pub struct StatsRollup;

impl StatsRollup {
    /// Applies every non-empty delta to its player. Returns how many players changed.
    ///
    /// A delta for an id missing from `players` or of the wrong role is a data
    /// integrity error; nothing is applied in that case.
    pub fn apply(players: &mut [Player], deltas: &BTreeMap<PlayerId, StatLine>) -> Result<usize> {
        let positions: BTreeMap<PlayerId, usize> =
            players.iter().enumerate().map(|(index, player)| (player.id, index)).collect();

        // Check everything up front so a bad id leaves the roster untouched.
        for (id, delta) in deltas.iter().filter(|(_, delta)| !delta.is_empty()) {
            let index = *positions.get(id).ok_or(GameError::UnknownPlayer { id: *id })?;
            let role_matches = matches!(
                (&players[index].profile, delta),
                (PlayerProfile::Batter { .. }, StatLine::Batting(_))
                    | (PlayerProfile::Pitcher { .. }, StatLine::Pitching(_))
            );
            if !role_matches {
                return Err(GameError::RoleMismatch { id: *id });
            }
        }

        let mut updated = 0;
        for (id, delta) in deltas.iter().filter(|(_, delta)| !delta.is_empty()) {
            if let Some(&index) = positions.get(id) {
                Self::apply_to_player(&mut players[index], delta)?;
                updated += 1;
            }
        }

        debug!("Rolled up {} of {} stat deltas", updated, deltas.len());
        Ok(updated)
    }

    pub fn apply_to_player(player: &mut Player, delta: &StatLine) -> Result<()> {
        match (&mut player.profile, delta) {
            (PlayerProfile::Batter { stats, .. }, StatLine::Batting(delta)) => {
                Self::accumulate_batting(stats, delta);
                Ok(())
            }
            (PlayerProfile::Pitcher { stats, .. }, StatLine::Pitching(delta)) => {
                Self::accumulate_pitching(stats, delta);
                Ok(())
            }
            _ => Err(GameError::RoleMismatch { id: player.id }),
        }
    }

    /// Counters saturate at `u32::MAX` rather than wrapping.
    pub fn accumulate_batting(stats: &mut BatterStats, delta: &BattingDelta) {
        stats.plate_appearances = stats.plate_appearances.saturating_add(delta.plate_appearances);
        stats.hits = stats.hits.saturating_add(delta.hits);
        stats.walks = stats.walks.saturating_add(delta.walks);
        stats.strikeouts = stats.strikeouts.saturating_add(delta.strikeouts);
        stats.home_runs = stats.home_runs.saturating_add(delta.home_runs);
        stats.steals = stats.steals.saturating_add(delta.steals);
        Self::recompute_batting(stats);
    }

    pub fn accumulate_pitching(stats: &mut PitcherStats, delta: &PitchingDelta) {
        stats.innings_pitched += delta.innings_pitched();
        stats.strikeouts = stats.strikeouts.saturating_add(delta.strikeouts);
        stats.walks = stats.walks.saturating_add(delta.walks);
        stats.hits_allowed = stats.hits_allowed.saturating_add(delta.hits_allowed);
        Self::recompute_pitching(stats);
    }

    /// AB = PA - BB; AVG = H / AB to three places, 0.000 without at-bats.
    pub fn recompute_batting(stats: &mut BatterStats) {
        stats.at_bats = stats.plate_appearances.saturating_sub(stats.walks);
        stats.batting_avg = if stats.at_bats > 0 {
            round_to(stats.hits as f64 / stats.at_bats as f64, 3)
        } else {
            0.0
        };
    }

    /// Innings are snapped to whole outs first so thirds never drift.
    pub fn recompute_pitching(stats: &mut PitcherStats) {
        let total_outs = (stats.innings_pitched * 3.0).round() as u32;
        let innings = total_outs as f64 / 3.0;
        stats.innings_pitched = innings;

        if innings > 0.0 {
            stats.strikeout_rate = round_to(stats.strikeouts as f64 * 9.0 / innings, 2);
            stats.walk_rate = round_to(stats.walks as f64 * 9.0 / innings, 2);
        } else {
            stats.strikeout_rate = 0.0;
            stats.walk_rate = 0.0;
        }

        // Outs not made by strikeout count as balls in play that were not hits.
        let balls_in_play_outs = total_outs.saturating_sub(stats.strikeouts);
        let denominator = stats.hits_allowed.saturating_add(balls_in_play_outs);
        stats.batting_avg_allowed = if denominator > 0 {
            round_to(stats.hits_allowed as f64 / denominator as f64, 3)
        } else {
            0.0
        };
    }
}
