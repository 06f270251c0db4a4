//! Mutable per-game state: inning, half, outs, bases, score and the
//! tracked side's stat deltas.

use crate::models::{
    AtBatOutcome, BattingDelta, Half, LineScore, PitchingDelta, PlayerId, Side, StatLine, Team,
};
use std::collections::{BTreeMap, BTreeSet};

pub const OUTS_PER_HALF: u8 = 3;

/// Player ids whose per-game stats are accumulated. Everyone else is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackedIds(BTreeSet<PlayerId>);

impl TrackedIds {
    pub fn from_team(team: &Team) -> Self {
        Self(team.player_ids().collect())
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<PlayerId> for TrackedIds {
    fn from_iter<I: IntoIterator<Item = PlayerId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// First, second and third base; each empty or holding a runner id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bases([Option<PlayerId>; 3]);

impl Bases {
    pub fn new(first: Option<PlayerId>, second: Option<PlayerId>, third: Option<PlayerId>) -> Self {
        Self([first, second, third])
    }

    pub fn first(&self) -> Option<PlayerId> {
        self.0[0]
    }

    pub fn second(&self) -> Option<PlayerId> {
        self.0[1]
    }

    pub fn third(&self) -> Option<PlayerId> {
        self.0[2]
    }

    pub fn as_array(&self) -> [Option<PlayerId>; 3] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(Option::is_none)
    }

    pub fn runners(&self) -> usize {
        self.0.iter().flatten().count()
    }

    pub fn clear(&mut self) {
        self.0 = [None; 3];
    }

    /// Uniform shift: every runner moves `bases_advanced` bases, evaluated from
    /// third down to first; anyone reaching home scores. The batter then takes
    /// base `bases_advanced`, or scores when it is 4 or more.
    fn shift(&mut self, bases_advanced: u8, batter_id: PlayerId) -> u32 {
        let advance = bases_advanced as usize;
        let mut next = [None; 3];
        let mut runs = 0;

        for index in (0..3).rev() {
            if let Some(runner) = self.0[index] {
                let destination = index + 1 + advance;
                if destination >= 4 {
                    runs += 1;
                } else {
                    next[destination - 1] = Some(runner);
                }
            }
        }

        if advance >= 4 {
            runs += 1;
        } else {
            next[advance - 1] = Some(batter_id);
        }

        self.0 = next;
        runs
    }

    /// One-base advance: the batter takes first and a runner moves up only
    /// when the base behind them becomes occupied.
    fn force(&mut self, batter_id: PlayerId) -> u32 {
        let [first, second, third] = self.0;
        let mut runs = 0;

        if first.is_some() {
            if second.is_some() {
                if third.is_some() {
                    runs += 1;
                }
                self.0[2] = second;
            }
            self.0[1] = first;
        }
        self.0[0] = Some(batter_id);

        runs
    }
}

#[derive(Debug, Clone)]
pub struct GameState {
    pub inning: u8,
    pub half: Half,
    pub outs: u8,
    pub bases: Bases,
    batting: Side,
    team_names: [String; 2],
    score: [u32; 2],
    line_score: LineScore,
    tracked: TrackedIds,
    deltas: BTreeMap<PlayerId, StatLine>,
}

impl GameState {
    /// Top of the first, nobody out, away team batting.
    pub fn new(away_name: impl Into<String>, home_name: impl Into<String>, tracked: TrackedIds) -> Self {
        Self {
            inning: 1,
            half: Half::Top,
            outs: 0,
            bases: Bases::default(),
            batting: Side::Away,
            team_names: [away_name.into(), home_name.into()],
            score: [0, 0],
            line_score: LineScore { away: vec![0], home: Vec::new() },
            tracked,
            deltas: BTreeMap::new(),
        }
    }

    pub fn batting_side(&self) -> Side {
        self.batting
    }

    pub fn fielding_side(&self) -> Side {
        self.batting.opponent()
    }

    pub fn team_name(&self, side: Side) -> &str {
        &self.team_names[side.index()]
    }

    pub fn runs(&self, side: Side) -> u32 {
        self.score[side.index()]
    }

    /// Score keyed by team name.
    pub fn score_of(&self, team_name: &str) -> Option<u32> {
        self.team_names.iter().position(|name| name == team_name).map(|index| self.score[index])
    }

    pub fn line_score(&self) -> &LineScore {
        &self.line_score
    }

    pub fn is_tracked(&self, id: PlayerId) -> bool {
        self.tracked.contains(id)
    }

    pub fn stat_deltas(&self) -> &BTreeMap<PlayerId, StatLine> {
        &self.deltas
    }

    pub fn into_stat_deltas(self) -> BTreeMap<PlayerId, StatLine> {
        self.deltas
    }

    /// (top, i) → (bottom, i); (bottom, i) → (top, i + 1). Outs and bases reset
    /// and the clubs trade places.
    pub fn switch_half(&mut self) {
        self.outs = 0;
        self.bases.clear();
        self.batting = self.batting.opponent();

        match self.half {
            Half::Top => self.half = Half::Bottom,
            Half::Bottom => {
                self.inning += 1;
                self.half = Half::Top;
            }
        }

        self.line_score.side_mut(self.batting).push(0);
    }

    pub fn record_out(&mut self) {
        self.outs += 1;
    }

    /// Moves runners for a batter who advanced `bases_advanced` bases and credits
    /// the batting team with the runs that scored. A one-base advance forces
    /// runners only along occupied bases; larger advances shift everyone.
    pub fn move_runners(&mut self, bases_advanced: u8, batter_id: PlayerId) -> u32 {
        let runs = match bases_advanced {
            0 => 0,
            1 => self.bases.force(batter_id),
            n => self.bases.shift(n, batter_id),
        };
        self.add_runs(runs);
        runs
    }

    fn add_runs(&mut self, runs: u32) {
        if runs == 0 {
            return;
        }
        self.score[self.batting.index()] += runs;
        if let Some(current) = self.line_score.side_mut(self.batting).last_mut() {
            *current += runs;
        }
    }

    /// Runner on first takes second.
    pub fn steal_second(&mut self) {
        let runner = self.bases.0[0].take();
        self.bases.0[1] = runner;
    }

    /// Runner on first is removed and the out is charged before the next pitch.
    pub fn caught_stealing(&mut self) {
        self.bases.0[0] = None;
        self.record_out();
    }

    fn batting_delta(&mut self, id: PlayerId) -> Option<&mut BattingDelta> {
        if !self.tracked.contains(id) {
            return None;
        }
        match self.deltas.entry(id).or_insert(StatLine::Batting(BattingDelta::default())) {
            StatLine::Batting(delta) => Some(delta),
            StatLine::Pitching(_) => None,
        }
    }

    fn pitching_delta(&mut self, id: PlayerId) -> Option<&mut PitchingDelta> {
        if !self.tracked.contains(id) {
            return None;
        }
        match self.deltas.entry(id).or_insert(StatLine::Pitching(PitchingDelta::default())) {
            StatLine::Pitching(delta) => Some(delta),
            StatLine::Batting(_) => None,
        }
    }

    /// Counts one plate appearance for the batter and one batter faced for the
    /// pitcher; untracked players are skipped.
    pub fn record_at_bat(&mut self, batter_id: PlayerId, pitcher_id: PlayerId, outcome: AtBatOutcome) {
        if let Some(delta) = self.batting_delta(batter_id) {
            delta.plate_appearances += 1;
            match outcome {
                AtBatOutcome::Strikeout => delta.strikeouts += 1,
                AtBatOutcome::Walk => delta.walks += 1,
                AtBatOutcome::HomeRun => {
                    delta.hits += 1;
                    delta.home_runs += 1;
                }
                AtBatOutcome::Single | AtBatOutcome::Double | AtBatOutcome::Triple => {
                    delta.hits += 1
                }
                AtBatOutcome::Out => {}
            }
        }

        if let Some(delta) = self.pitching_delta(pitcher_id) {
            delta.innings_pitched_thirds += 1;
            match outcome {
                AtBatOutcome::Strikeout => delta.strikeouts += 1,
                AtBatOutcome::Walk => delta.walks += 1,
                outcome if outcome.is_hit() => delta.hits_allowed += 1,
                _ => {}
            }
        }
    }

    pub fn record_steal(&mut self, runner_id: PlayerId) {
        if let Some(delta) = self.batting_delta(runner_id) {
            delta.steals += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GameState {
        GameState::new("Giants", "Tigers", [1, 2, 3].into_iter().collect())
    }

    #[test]
    fn test_initial_state() {
        let state = state();
        assert_eq!(state.inning, 1);
        assert_eq!(state.half, Half::Top);
        assert_eq!(state.outs, 0);
        assert!(state.bases.is_empty());
        assert_eq!(state.batting_side(), Side::Away);
        assert_eq!(state.score_of("Tigers"), Some(0));
        assert_eq!(state.score_of("Nobody"), None);
    }

    #[test]
    fn test_switch_half_transitions() {
        let mut state = state();
        state.outs = 3;
        state.bases = Bases::new(Some(1), None, Some(2));

        state.switch_half();
        assert_eq!((state.inning, state.half), (1, Half::Bottom));
        assert_eq!(state.outs, 0);
        assert!(state.bases.is_empty());
        assert_eq!(state.batting_side(), Side::Home);

        state.switch_half();
        assert_eq!((state.inning, state.half), (2, Half::Top));
        assert_eq!(state.batting_side(), Side::Away);
        assert_eq!(state.line_score().away.len(), 2);
        assert_eq!(state.line_score().home.len(), 1);
    }

    #[test]
    fn test_grand_slam_clears_bases() {
        let mut state = state();
        state.bases = Bases::new(Some(10), Some(11), Some(12));

        let runs = state.move_runners(4, 13);

        assert_eq!(runs, 4);
        assert!(state.bases.is_empty());
        assert_eq!(state.runs(Side::Away), 4);
        assert_eq!(state.line_score().away, vec![4]);
    }

    #[test]
    fn test_single_forces_only_contiguous_runners() {
        let mut state = state();
        state.bases = Bases::new(None, Some(11), None);

        let runs = state.move_runners(1, 13);

        assert_eq!(runs, 0);
        assert_eq!(state.bases, Bases::new(Some(13), Some(11), None));
    }

    #[test]
    fn test_walk_with_bases_loaded_scores_one() {
        let mut state = state();
        state.bases = Bases::new(Some(10), Some(11), Some(12));

        let runs = state.move_runners(AtBatOutcome::Walk.bases_advanced(), 13);

        assert_eq!(runs, 1);
        assert_eq!(state.bases, Bases::new(Some(13), Some(10), Some(11)));
    }

    #[test]
    fn test_force_with_runners_on_first_and_third() {
        let mut state = state();
        state.bases = Bases::new(Some(10), None, Some(12));

        assert_eq!(state.move_runners(1, 13), 0);
        assert_eq!(state.bases, Bases::new(Some(13), Some(10), Some(12)));
    }

    #[test]
    fn test_double_shifts_every_runner_two_bases() {
        let mut state = state();
        state.bases = Bases::new(Some(10), Some(11), None);

        let runs = state.move_runners(2, 13);

        // Second → home, first → third, batter → second
        assert_eq!(runs, 1);
        assert_eq!(state.bases, Bases::new(None, Some(13), Some(10)));
    }

    #[test]
    fn test_triple_scores_all_runners() {
        let mut state = state();
        state.bases = Bases::new(Some(10), None, Some(12));

        assert_eq!(state.move_runners(3, 13), 2);
        assert_eq!(state.bases, Bases::new(None, None, Some(13)));
    }

    #[test]
    fn test_zero_advance_places_nobody() {
        let mut state = state();
        state.bases = Bases::new(Some(10), None, None);

        assert_eq!(state.move_runners(0, 13), 0);
        assert_eq!(state.bases, Bases::new(Some(10), None, None));
    }

    #[test]
    fn test_caught_stealing_clears_first_and_adds_out() {
        let mut state = state();
        state.outs = 1;
        state.bases = Bases::new(Some(10), None, Some(12));

        state.caught_stealing();

        assert_eq!(state.bases.first(), None);
        assert_eq!(state.bases.third(), Some(12));
        assert_eq!(state.outs, 2);
    }

    #[test]
    fn test_steal_second_moves_runner() {
        let mut state = state();
        state.bases = Bases::new(Some(1), None, None);
        state.steal_second();
        assert_eq!(state.bases, Bases::new(None, Some(1), None));
    }

    #[test]
    fn test_only_tracked_ids_accumulate() {
        let mut state = state();

        state.record_at_bat(2, 50, AtBatOutcome::HomeRun);
        state.record_at_bat(60, 1, AtBatOutcome::Strikeout);
        state.record_at_bat(61, 1, AtBatOutcome::Double);
        state.record_steal(70);

        let deltas = state.stat_deltas();
        assert_eq!(deltas.len(), 2);
        assert_eq!(
            deltas[&2],
            StatLine::Batting(BattingDelta {
                plate_appearances: 1,
                hits: 1,
                home_runs: 1,
                ..Default::default()
            })
        );
        assert_eq!(
            deltas[&1],
            StatLine::Pitching(PitchingDelta {
                innings_pitched_thirds: 2,
                strikeouts: 1,
                hits_allowed: 1,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_walk_counts_plate_appearance_without_hit() {
        let mut state = state();
        state.record_at_bat(3, 99, AtBatOutcome::Walk);
        state.record_steal(3);

        assert_eq!(
            state.stat_deltas()[&3],
            StatLine::Batting(BattingDelta {
                plate_appearances: 1,
                walks: 1,
                steals: 1,
                ..Default::default()
            })
        );
    }
}
