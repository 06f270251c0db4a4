//! Input validation run before any game state is constructed.
//!
//! Every check here happens before the first random number is drawn, so a
//! rejected lineup never looks like a completed game.

use super::{Lineup, Player, PlayerId, PlayerProfile, Team};
use crate::error::{GameError, Result};
use std::collections::{BTreeMap, BTreeSet};

/// Lowest rating accepted for any ability. The strikeout model takes
/// `ln(rating - 50)`, so 51 keeps the argument positive.
pub const MIN_SAFE_RATING: u16 = 51;
pub const MAX_RATING: u16 = 200;

pub struct LineupValidator;

impl LineupValidator {
    pub fn validate_rating(id: PlayerId, ability: &'static str, value: u16) -> Result<()> {
        if !(MIN_SAFE_RATING..=MAX_RATING).contains(&value) {
            return Err(GameError::RatingOutOfRange {
                id,
                ability,
                value,
                min: MIN_SAFE_RATING,
                max: MAX_RATING,
            });
        }
        Ok(())
    }

    pub fn validate_player(player: &Player) -> Result<()> {
        match &player.profile {
            PlayerProfile::Pitcher { abilities, .. } => {
                Self::validate_rating(player.id, "power", abilities.power)?;
                Self::validate_rating(player.id, "control", abilities.control)?;
                Self::validate_rating(player.id, "breaking_ball", abilities.breaking_ball)?;
            }
            PlayerProfile::Batter { abilities, .. } => {
                Self::validate_rating(player.id, "meet", abilities.meet)?;
                Self::validate_rating(player.id, "power", abilities.power)?;
                Self::validate_rating(player.id, "speed", abilities.speed)?;
            }
        }
        Ok(())
    }

    /// Builds the id → player map, rejecting duplicate ids and unsafe ratings.
    pub fn index_roster(players: Vec<Player>) -> Result<BTreeMap<PlayerId, Player>> {
        let mut roster = BTreeMap::new();
        for player in players {
            Self::validate_player(&player)?;
            let id = player.id;
            if roster.insert(id, player).is_some() {
                return Err(GameError::DuplicatePlayerId { id });
            }
        }
        Ok(roster)
    }

    pub fn validate_lineup(
        team: &str,
        roster: &BTreeMap<PlayerId, Player>,
        lineup: &Lineup,
    ) -> Result<()> {
        if lineup.batting_order.is_empty() {
            return Err(GameError::EmptyBattingOrder { team: team.to_string() });
        }

        let mut seen = BTreeSet::new();
        for &id in &lineup.batting_order {
            if !seen.insert(id) {
                return Err(GameError::DuplicateBattingOrderId { team: team.to_string(), id });
            }
            let player = roster.get(&id).ok_or(GameError::UnknownPlayer { id })?;
            if player.batting().is_none() {
                return Err(GameError::NotABatter { id });
            }
        }

        let pitcher = roster.get(&lineup.pitcher_id).ok_or_else(|| GameError::MissingPitcher {
            team: team.to_string(),
            id: lineup.pitcher_id,
        })?;
        if !pitcher.is_pitcher() {
            return Err(GameError::NotAPitcher { id: pitcher.id });
        }

        Ok(())
    }

    /// Cross-team checks: names key the scoreboard and ids key the stat deltas,
    /// so neither may collide between the two clubs.
    pub fn validate_matchup(home: &Team, away: &Team) -> Result<()> {
        if home.name() == away.name() {
            return Err(GameError::DuplicateTeamName { name: home.name().to_string() });
        }

        let home_ids: BTreeSet<PlayerId> = home.player_ids().collect();
        if let Some(id) = away.player_ids().find(|id| home_ids.contains(id)) {
            return Err(GameError::DuplicatePlayerId { id });
        }

        Ok(())
    }
}
