//! Built-in sample club used by the demo command and tests.
//!
//! Two pitchers and ten position players. Ids start at `id_offset + 1`, so two
//! copies of the roster with different offsets can face each other.

use crate::models::{BatterAbilities, Lineup, PitcherAbilities, Player, PlayerId};

/// (id, name, position, power, control, breaking ball)
const PITCHERS: [(PlayerId, &str, &str, u16, u16, u16); 2] = [
    (1, "Yamada Taro", "P", 82, 74, 78),
    (10, "Kobayashi Kenji", "P", 71, 80, 69),
];

/// (id, name, position, meet, power, speed)
const BATTERS: [(PlayerId, &str, &str, u16, u16, u16); 10] = [
    (2, "Tanaka Kenta", "C", 68, 72, 55),
    (3, "Suzuki Ichiro", "1B", 88, 64, 90),
    (4, "Sato Daisuke", "2B", 74, 60, 78),
    (5, "Takahashi Makoto", "3B", 70, 84, 62),
    (6, "Ito Yuichi", "SS", 76, 58, 85),
    (7, "Watanabe Ryo", "LF", 72, 78, 70),
    (8, "Yamamoto Tsuyoshi", "CF", 80, 66, 88),
    (9, "Nakamura Shunsuke", "RF", 69, 81, 66),
    (11, "Kato Takuya", "C", 62, 65, 52),
    (12, "Yoshida Keisuke", "OF", 66, 70, 74),
];

/// Default batting order, by unshifted id
const BATTING_ORDER: [PlayerId; 9] = [8, 3, 6, 5, 9, 7, 4, 2, 12];

const STARTING_PITCHER: PlayerId = 1;

pub fn sample_roster(id_offset: PlayerId) -> Vec<Player> {
    let pitchers = PITCHERS.iter().map(|&(id, name, position, power, control, breaking_ball)| {
        Player::pitcher(
            id + id_offset,
            name,
            position,
            PitcherAbilities { power, control, breaking_ball },
        )
    });
    let batters = BATTERS.iter().map(|&(id, name, position, meet, power, speed)| {
        Player::batter(id + id_offset, name, position, BatterAbilities { meet, power, speed })
    });

    let mut players: Vec<Player> = pitchers.chain(batters).collect();
    players.sort_by_key(|p| p.id);
    players
}

pub fn sample_lineup(id_offset: PlayerId) -> Lineup {
    Lineup {
        batting_order: BATTING_ORDER.iter().map(|id| id + id_offset).collect(),
        pitcher_id: STARTING_PITCHER + id_offset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LineupValidator, Team};

    #[test]
    fn test_sample_roster_shape() {
        let roster = sample_roster(0);
        assert_eq!(roster.len(), 12);
        assert_eq!(roster.iter().filter(|p| p.is_pitcher()).count(), 2);
        assert!(roster.iter().all(|p| LineupValidator::validate_player(p).is_ok()));
    }

    #[test]
    fn test_sample_lineup_is_valid_with_offset() {
        let team = Team::new("Tigers", sample_roster(100), sample_lineup(100)).unwrap();
        assert_eq!(team.batting_order().len(), 9);
        assert_eq!(team.pitcher_id(), 101);
        assert!(!team.contains(1));
    }
}
