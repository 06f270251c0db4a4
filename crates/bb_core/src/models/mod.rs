pub mod events;
pub mod game_result;
pub mod player;
pub mod stat_line;
pub mod team;
pub mod validation;

pub use events::{AtBatOutcome, Half, PlayEvent, PlayKind, Side, StealOutcome};
pub use game_result::{GameOutcome, GameResult, LineScore};
pub use player::{
    BatterAbilities, BatterStats, PitcherAbilities, PitcherStats, Player, PlayerId, PlayerProfile,
};
pub use stat_line::{BattingDelta, PitchingDelta, StatLine};
pub use team::{Lineup, Team};
pub use validation::{LineupValidator, MAX_RATING, MIN_SAFE_RATING};
