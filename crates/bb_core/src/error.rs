use thiserror::Error;

use crate::models::PlayerId;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("Lineup not set for team '{team}'")]
    LineupNotSet { team: String },

    #[error("Batting order is empty for team '{team}'")]
    EmptyBattingOrder { team: String },

    #[error("Pitcher id {id} is not on the roster of team '{team}'")]
    MissingPitcher { team: String, id: PlayerId },

    #[error("Player {id} is listed as pitcher but is not a pitcher")]
    NotAPitcher { id: PlayerId },

    #[error("Player {id} is in the batting order but is not a batter")]
    NotABatter { id: PlayerId },

    #[error("Rating {ability} of player {id} is {value}, must be within {min}..={max}")]
    RatingOutOfRange {
        id: PlayerId,
        ability: &'static str,
        value: u16,
        min: u16,
        max: u16,
    },

    #[error("Player id {id} appears more than once")]
    DuplicatePlayerId { id: PlayerId },

    #[error("Player {id} is listed more than once in the batting order of team '{team}'")]
    DuplicateBattingOrderId { team: String, id: PlayerId },

    #[error("Both teams are named '{name}'")]
    DuplicateTeamName { name: String },

    #[error("Invalid engine config: {0}")]
    InvalidConfig(String),

    #[error("Unknown player id {id}")]
    UnknownPlayer { id: PlayerId },

    #[error("Player {id} has the wrong role for this operation")]
    RoleMismatch { id: PlayerId },

    #[error("Unsupported schema version: found {found}, expected {expected}")]
    SchemaVersion { found: u8, expected: u8 },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl GameError {
    /// True for errors caused by caller input, detected before any simulation runs.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            GameError::UnknownPlayer { .. }
                | GameError::RoleMismatch { .. }
                | GameError::Serialization(_)
        )
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            GameError::Deserialization(err.to_string())
        } else {
            GameError::Serialization(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, GameError>;
