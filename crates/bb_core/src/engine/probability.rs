//! Probability calculation utilities for at-bat and steal resolution
//!
//! All functions are pure - they take ability ratings as input and return
//! probabilities. This allows easy unit testing without needing a full GameEngine.
//! Callers must pass ratings that passed `LineupValidator` (>= 51), otherwise
//! the strikeout log terms are undefined.

use crate::models::{AtBatOutcome, BatterAbilities, PitcherAbilities};
use rand::Rng;

pub const STRIKEOUT_RANGE: (f64, f64) = (0.10, 0.40);
pub const WALK_RANGE: (f64, f64) = (0.05, 0.20);
pub const HOME_RUN_RANGE: (f64, f64) = (0.005, 0.035);
pub const HIT_RANGE: (f64, f64) = (0.20, 0.45);
pub const STEAL_SUCCESS_RANGE: (f64, f64) = (0.40, 0.85);

/// Single / double / triple
pub const DEFAULT_HIT_TYPE_WEIGHTS: [f64; 3] = [0.75, 0.20, 0.05];

#[inline]
fn clamp(value: f64, range: (f64, f64)) -> f64 {
    value.clamp(range.0, range.1)
}

/// 0.25 + 0.05 * (ln(pitcher.power - 50) - ln(batter.meet - 50))
#[inline]
pub fn strikeout_probability(pitcher_power: u16, batter_meet: u16) -> f64 {
    let pitcher_term = (pitcher_power as f64 - 50.0).ln();
    let batter_term = (batter_meet as f64 - 50.0).ln();
    clamp(0.25 + 0.05 * (pitcher_term - batter_term), STRIKEOUT_RANGE)
}

/// 0.10 - 0.001 * (pitcher.control - 60)
#[inline]
pub fn walk_probability(pitcher_control: u16) -> f64 {
    clamp(0.10 - 0.001 * (pitcher_control as f64 - 60.0), WALK_RANGE)
}

/// 0.15 + 0.0005 * ((batter.power - 60) - (pitcher.power - 60))
#[inline]
pub fn home_run_probability(batter_power: u16, pitcher_power: u16) -> f64 {
    let edge = (batter_power as f64 - 60.0) - (pitcher_power as f64 - 60.0);
    clamp(0.15 + 0.0005 * edge, HOME_RUN_RANGE)
}

/// 0.30 - 0.002 * (pitcher.control + pitcher.power - 120)
#[inline]
pub fn hit_probability(pitcher_control: u16, pitcher_power: u16) -> f64 {
    let stuff = pitcher_control as f64 + pitcher_power as f64 - 120.0;
    clamp(0.30 - 0.002 * stuff, HIT_RANGE)
}

#[inline]
pub fn steal_success_probability(runner_speed: u16) -> f64 {
    clamp(0.01 * runner_speed as f64, STEAL_SUCCESS_RANGE)
}

/// Outcome probabilities for one pitcher/batter matchup.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtBatOdds {
    pub home_run: f64,
    pub strikeout: f64,
    pub walk: f64,
    /// Applied to a fresh draw once HR/SO/BB are ruled out
    pub hit: f64,
}

impl AtBatOdds {
    pub fn new(pitcher: &PitcherAbilities, batter: &BatterAbilities) -> Self {
        Self {
            home_run: home_run_probability(batter.power, pitcher.power),
            strikeout: strikeout_probability(pitcher.power, batter.meet),
            walk: walk_probability(pitcher.control),
            hit: hit_probability(pitcher.control, pitcher.power),
        }
    }

    /// One draw against cumulative thresholds in the order HR → SO → BB; the
    /// remaining space re-rolls for hit versus out, and a hit rolls its type.
    pub fn resolve<R: Rng + ?Sized>(&self, rng: &mut R, hit_type_weights: &[f64; 3]) -> AtBatOutcome {
        let roll: f64 = rng.gen();

        let mut threshold = self.home_run;
        if roll < threshold {
            return AtBatOutcome::HomeRun;
        }
        threshold += self.strikeout;
        if roll < threshold {
            return AtBatOutcome::Strikeout;
        }
        threshold += self.walk;
        if roll < threshold {
            return AtBatOutcome::Walk;
        }

        if rng.gen::<f64>() < self.hit {
            choose_hit_type(rng, hit_type_weights)
        } else {
            AtBatOutcome::Out
        }
    }
}

/// Weighted pick among single/double/triple. Weights need not sum to 1.
pub fn choose_hit_type<R: Rng + ?Sized>(rng: &mut R, weights: &[f64; 3]) -> AtBatOutcome {
    const HIT_TYPES: [AtBatOutcome; 3] =
        [AtBatOutcome::Single, AtBatOutcome::Double, AtBatOutcome::Triple];

    let total: f64 = weights.iter().sum();
    let roll = rng.gen::<f64>() * total;

    let mut cumulative = 0.0;
    for (hit_type, weight) in HIT_TYPES.iter().zip(weights) {
        cumulative += weight;
        if roll < cumulative {
            return *hit_type;
        }
    }
    // Only reachable through float rounding at the top edge.
    AtBatOutcome::Triple
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_support::ScriptedRng;

    #[test]
    fn test_strikeout_even_matchup() {
        // Equal power/meet cancels the log terms.
        assert!((strikeout_probability(75, 75) - 0.25).abs() < 1e-12);
        // ln(40) - ln(1) = 3.689 → 0.25 + 0.184 = 0.434 → clamped
        assert_eq!(strikeout_probability(90, 51), 0.40);
        assert_eq!(strikeout_probability(51, 90), 0.10);
    }

    #[test]
    fn test_walk_probability_by_control() {
        assert!((walk_probability(60) - 0.10).abs() < 1e-12);
        assert!((walk_probability(90) - 0.07).abs() < 1e-12);
        assert_eq!(walk_probability(200), 0.05);
    }

    #[test]
    fn test_home_run_probability_is_capped() {
        // The 0.15 base sits above the cap for ordinary ratings.
        assert_eq!(home_run_probability(90, 60), 0.035);
        assert_eq!(home_run_probability(60, 60), 0.035);
        // Even the weakest batter against the strongest pitcher: 0.0755 → cap
        assert_eq!(home_run_probability(51, 200), 0.035);
    }

    #[test]
    fn test_hit_probability() {
        assert!((hit_probability(60, 60) - 0.30).abs() < 1e-12);
        assert!((hit_probability(90, 90) - 0.20).abs() < 1e-12);
        assert!((hit_probability(51, 51) - 0.336).abs() < 1e-12);
    }

    #[test]
    fn test_steal_success_bounds() {
        assert_eq!(steal_success_probability(30), 0.40);
        assert!((steal_success_probability(70) - 0.70).abs() < 1e-12);
        assert_eq!(steal_success_probability(99), 0.85);
    }

    #[test]
    fn test_resolve_uses_cumulative_thresholds() {
        let odds = AtBatOdds { home_run: 0.03, strikeout: 0.20, walk: 0.10, hit: 0.30 };
        let weights = DEFAULT_HIT_TYPE_WEIGHTS;

        let mut rng = ScriptedRng::new(&[0.01]);
        assert_eq!(odds.resolve(&mut rng, &weights), AtBatOutcome::HomeRun);

        let mut rng = ScriptedRng::new(&[0.10]);
        assert_eq!(odds.resolve(&mut rng, &weights), AtBatOutcome::Strikeout);

        let mut rng = ScriptedRng::new(&[0.30]);
        assert_eq!(odds.resolve(&mut rng, &weights), AtBatOutcome::Walk);

        // Past 0.33 → hit roll 0.5 ≥ 0.30 → out
        let mut rng = ScriptedRng::new(&[0.50, 0.50]);
        assert_eq!(odds.resolve(&mut rng, &weights), AtBatOutcome::Out);

        // Hit roll 0.25 < 0.30 → hit type roll 0.80 lands in the double band
        let mut rng = ScriptedRng::new(&[0.50, 0.25, 0.80]);
        assert_eq!(odds.resolve(&mut rng, &weights), AtBatOutcome::Double);
    }

    #[test]
    fn test_choose_hit_type_bands() {
        let weights = DEFAULT_HIT_TYPE_WEIGHTS;
        assert_eq!(choose_hit_type(&mut ScriptedRng::new(&[0.0]), &weights), AtBatOutcome::Single);
        assert_eq!(choose_hit_type(&mut ScriptedRng::new(&[0.74]), &weights), AtBatOutcome::Single);
        assert_eq!(choose_hit_type(&mut ScriptedRng::new(&[0.94]), &weights), AtBatOutcome::Double);
        assert_eq!(choose_hit_type(&mut ScriptedRng::new(&[0.96]), &weights), AtBatOutcome::Triple);
    }

    #[cfg(all(test, feature = "proptest"))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: every formula stays inside its clamp for ratings in 51..=200
            #[test]
            fn prop_probabilities_within_bounds(
                p_power in 51u16..=200,
                p_control in 51u16..=200,
                b_meet in 51u16..=200,
                b_power in 51u16..=200,
            ) {
                let so = strikeout_probability(p_power, b_meet);
                let bb = walk_probability(p_control);
                let hr = home_run_probability(b_power, p_power);
                let hit = hit_probability(p_control, p_power);

                prop_assert!((STRIKEOUT_RANGE.0..=STRIKEOUT_RANGE.1).contains(&so));
                prop_assert!((WALK_RANGE.0..=WALK_RANGE.1).contains(&bb));
                prop_assert!((HOME_RUN_RANGE.0..=HOME_RUN_RANGE.1).contains(&hr));
                prop_assert!((HIT_RANGE.0..=HIT_RANGE.1).contains(&hit));
            }
        }
    }
}
