use super::validation::LineupValidator;
use super::{Player, PlayerId};
use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Batting order and starting pitcher chosen for one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lineup {
    pub batting_order: Vec<PlayerId>,
    pub pitcher_id: PlayerId,
}

/// A roster bound to a validated lineup for the duration of one game.
#[derive(Debug, Clone)]
pub struct Team {
    name: String,
    roster: BTreeMap<PlayerId, Player>,
    batting_order: Vec<PlayerId>,
    pitcher_id: PlayerId,
    order_index: usize,
}

impl Team {
    pub fn new(name: impl Into<String>, players: Vec<Player>, lineup: Lineup) -> Result<Self> {
        let name = name.into();
        let roster = LineupValidator::index_roster(players)?;
        LineupValidator::validate_lineup(&name, &roster, &lineup)?;

        Ok(Self {
            name,
            roster,
            batting_order: lineup.batting_order,
            pitcher_id: lineup.pitcher_id,
            order_index: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the batter due up and moves the order forward, wrapping after the last slot.
    pub fn next_batter(&mut self) -> Result<&Player> {
        let id = self.batting_order[self.order_index];
        self.order_index = (self.order_index + 1) % self.batting_order.len();
        self.player(id)
    }

    /// The starting pitcher; there are no pitching changes within a game.
    pub fn current_pitcher(&self) -> Result<&Player> {
        self.player(self.pitcher_id)
    }

    pub fn player(&self, id: PlayerId) -> Result<&Player> {
        self.roster.get(&id).ok_or(GameError::UnknownPlayer { id })
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.roster.contains_key(&id)
    }

    pub fn player_ids(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.roster.keys().copied()
    }

    pub fn batting_order(&self) -> &[PlayerId] {
        &self.batting_order
    }

    pub fn pitcher_id(&self) -> PlayerId {
        self.pitcher_id
    }

    pub fn lineup(&self) -> Lineup {
        Lineup { batting_order: self.batting_order.clone(), pitcher_id: self.pitcher_id }
    }

    pub fn into_players(self) -> Vec<Player> {
        self.roster.into_values().collect()
    }
}
