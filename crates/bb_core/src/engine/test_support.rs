//! Test-only helpers: a scripted generator and small ready-made rosters.

use crate::models::{BatterAbilities, Lineup, PitcherAbilities, Player, PlayerId, Team};
use rand::RngCore;
use std::collections::VecDeque;

/// Replays a fixed list of uniform draws, then repeats `fallback`.
///
/// `rng.gen::<f64>()` maps the top 53 bits of `next_u64` onto [0, 1), so each
/// scripted value is encoded back into those bits.
pub struct ScriptedRng {
    values: VecDeque<f64>,
    fallback: f64,
}

impl ScriptedRng {
    pub fn new(values: &[f64]) -> Self {
        Self::with_fallback(values, 0.999)
    }

    pub fn with_fallback(values: &[f64], fallback: f64) -> Self {
        Self { values: values.iter().copied().collect(), fallback }
    }

    pub fn remaining(&self) -> usize {
        self.values.len()
    }

    fn encode(value: f64) -> u64 {
        let bits = (value * (1u64 << 53) as f64) as u64;
        bits << 11
    }
}

impl RngCore for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let value = self.values.pop_front().unwrap_or(self.fallback);
        Self::encode(value)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

pub fn pitcher(id: PlayerId, power: u16, control: u16) -> Player {
    Player::pitcher(
        id,
        format!("Pitcher {id}"),
        "P",
        PitcherAbilities { power, control, breaking_ball: 70 },
    )
}

pub fn batter(id: PlayerId, meet: u16, power: u16, speed: u16) -> Player {
    Player::batter(id, format!("Batter {id}"), "OF", BatterAbilities { meet, power, speed })
}

/// Pitcher `base + 1` and batters `base + 2 ..= base + 1 + batters`.
pub fn simple_team(name: &str, base: PlayerId, batters: u32) -> Team {
    let mut players = vec![pitcher(base + 1, 75, 70)];
    let mut order = Vec::new();
    for offset in 0..batters {
        let id = base + 2 + offset;
        players.push(batter(id, 70, 70, 70));
        order.push(id);
    }
    Team::new(name, players, Lineup { batting_order: order, pitcher_id: base + 1 })
        .expect("test team is valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_scripted_values_round_trip() {
        let mut rng = ScriptedRng::new(&[0.0, 0.25, 0.5]);
        assert_eq!(rng.gen::<f64>(), 0.0);
        assert_eq!(rng.gen::<f64>(), 0.25);
        assert_eq!(rng.gen::<f64>(), 0.5);
        assert_eq!(rng.remaining(), 0);
        assert!(rng.gen::<f64>() > 0.99);
    }
}
