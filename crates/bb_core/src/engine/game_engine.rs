//! Game engine: drives half-innings, resolves steal checks and at-bats, and
//! assembles the final [`GameResult`].
//!
//! ## Flow
//!
//! ```text
//! play(home, away, tracked, rng)
//!   └─ while !is_finished
//!        ├─ play_half_inning
//!        │    └─ until 3 outs: check_steal → resolve_at_bat
//!        └─ switch_half
//! ```
//!
//! The generator is passed in by the caller, so the same seed and lineups
//! always replay the same game. The engine keeps no state between games.

use super::config::EngineConfig;
use super::game_state::{GameState, TrackedIds, OUTS_PER_HALF};
use super::probability::{steal_success_probability, AtBatOdds};
use crate::error::{GameError, Result};
use crate::models::{
    AtBatOutcome, GameOutcome, GameResult, Half, LineupValidator, PlayEvent, PlayKind, Side,
    StealOutcome, Team,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

/// Both clubs for one game, indexed by side.
pub(crate) struct Matchup {
    teams: [Team; 2],
}

impl Matchup {
    pub(crate) fn new(away: Team, home: Team) -> Self {
        Self { teams: [away, home] }
    }

    pub(crate) fn team(&self, side: Side) -> &Team {
        &self.teams[side.index()]
    }

    /// (batting team, fielding team)
    pub(crate) fn split(&mut self, batting: Side) -> (&mut Team, &Team) {
        let [away, home] = &mut self.teams;
        match batting {
            Side::Away => (away, &*home),
            Side::Home => (home, &*away),
        }
    }
}

/// Output buffer for the play-by-play text and its structured events.
#[derive(Debug, Default)]
pub(crate) struct PlayLog {
    lines: Vec<String>,
    events: Vec<PlayEvent>,
}

impl PlayLog {
    fn record(&mut self, state: &GameState, kind: PlayKind, runs_scored: u32, line: Option<String>) {
        if let Some(line) = line {
            self.lines.push(format!("{} {}: {}", state.half, state.inning, line));
        }
        self.events.push(PlayEvent {
            inning: state.inning,
            half: state.half,
            kind,
            outs_after: state.outs,
            runs_scored,
        });
    }

    pub(crate) fn lines(&self) -> &[String] {
        &self.lines
    }

    pub(crate) fn events(&self) -> &[PlayEvent] {
        &self.events
    }
}

fn describe_at_bat(batter_name: &str, outcome: AtBatOutcome, runs: u32) -> String {
    let mut line = format!("{} {}.", batter_name, outcome.describe());
    match runs {
        0 => {}
        1 => line.push_str(" 1 run scores."),
        n => line.push_str(&format!(" {n} runs score.")),
    }
    line
}

#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    config: EngineConfig,
}

impl GameEngine {
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Simulates one complete game. The away club bats first; only the
    /// `tracked` club's players accumulate stat deltas and attempt steals.
    ///
    /// All validation happens before the first draw from `rng`.
    pub fn play<R: Rng + ?Sized>(
        &self,
        home: Team,
        away: Team,
        tracked: Side,
        rng: &mut R,
    ) -> Result<GameResult> {
        if let Err(err) = LineupValidator::validate_matchup(&home, &away) {
            warn!("Rejected matchup {} vs {}: {}", away.name(), home.name(), err);
            return Err(err);
        }

        let tracked_ids = match tracked {
            Side::Home => TrackedIds::from_team(&home),
            Side::Away => TrackedIds::from_team(&away),
        };
        let mut state = GameState::new(away.name(), home.name(), tracked_ids);
        let mut matchup = Matchup::new(away, home);
        let mut log = PlayLog::default();

        self.run(&mut state, &mut matchup, &mut log, rng)?;

        let result = Self::finish(state, log, tracked);
        info!(
            "Final: {} {} - {} {} after {} innings ({:?} for tracked side)",
            result.away_team,
            result.away_score,
            result.home_team,
            result.home_score,
            result.innings_played,
            result.outcome
        );
        Ok(result)
    }

    /// [`play`](Self::play) with a fresh ChaCha8 generator seeded from `seed`.
    pub fn play_seeded(&self, home: Team, away: Team, tracked: Side, seed: u64) -> Result<GameResult> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.play(home, away, tracked, &mut rng)
    }

    pub(crate) fn run<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        matchup: &mut Matchup,
        log: &mut PlayLog,
        rng: &mut R,
    ) -> Result<()> {
        while !self.is_finished(state) {
            self.play_half_inning(state, matchup, log, rng)?;
            debug_assert_eq!(state.outs, OUTS_PER_HALF);
            state.switch_half();
        }
        Ok(())
    }

    /// Checked between half-innings only.
    pub(crate) fn is_finished(&self, state: &GameState) -> bool {
        if state.inning <= self.config.innings || state.half == Half::Bottom {
            return false;
        }
        if !self.config.extra_innings {
            return true;
        }
        let tied = state.runs(Side::Away) == state.runs(Side::Home);
        !tied || state.inning > self.config.max_innings
    }

    pub(crate) fn play_half_inning<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        matchup: &mut Matchup,
        log: &mut PlayLog,
        rng: &mut R,
    ) -> Result<()> {
        let inning = state.inning;
        while state.outs < OUTS_PER_HALF && state.inning == inning {
            self.check_steal(state, matchup, log, rng)?;
            if state.outs >= OUTS_PER_HALF {
                break;
            }
            self.resolve_at_bat(state, matchup, log, rng)?;
        }
        Ok(())
    }

    /// Runs before every at-bat. Only a tracked runner on first with second
    /// open is eligible; nothing is drawn otherwise.
    ///
    /// Second must be open so a successful steal never overwrites the runner
    /// already standing there.
    pub(crate) fn check_steal<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        matchup: &Matchup,
        log: &mut PlayLog,
        rng: &mut R,
    ) -> Result<StealOutcome> {
        let Some(runner_id) = state.bases.first() else {
            return Ok(StealOutcome::NoAttempt);
        };
        if !state.is_tracked(runner_id) || state.bases.second().is_some() {
            return Ok(StealOutcome::NoAttempt);
        }
        if rng.gen::<f64>() >= self.config.steal_attempt_probability {
            return Ok(StealOutcome::NoAttempt);
        }

        let runner = matchup.team(state.batting_side()).player(runner_id)?;
        let speed = runner.batting().ok_or(GameError::RoleMismatch { id: runner_id })?.speed;
        let success_probability = steal_success_probability(speed);

        let (outcome, line) = if rng.gen::<f64>() < success_probability {
            state.steal_second();
            state.record_steal(runner_id);
            (StealOutcome::StolenBase, format!("{} steals second base.", runner.name))
        } else {
            state.caught_stealing();
            (StealOutcome::CaughtStealing, format!("{} is caught stealing.", runner.name))
        };

        debug!(
            "Steal attempt by {} (p={:.2}): {:?}, outs={}",
            runner_id, success_probability, outcome, state.outs
        );
        log.record(state, PlayKind::Steal { runner_id, outcome }, 0, Some(line));
        Ok(outcome)
    }

    pub(crate) fn resolve_at_bat<R: Rng + ?Sized>(
        &self,
        state: &mut GameState,
        matchup: &mut Matchup,
        log: &mut PlayLog,
        rng: &mut R,
    ) -> Result<AtBatOutcome> {
        let (batting, fielding) = matchup.split(state.batting_side());

        let batter = batting.next_batter()?;
        let batter_id = batter.id;
        let batter_name = batter.name.clone();
        let batter_abilities = *batter.batting().ok_or(GameError::RoleMismatch { id: batter_id })?;

        let pitcher = fielding.current_pitcher()?;
        let pitcher_id = pitcher.id;
        let pitcher_abilities =
            *pitcher.pitching().ok_or(GameError::RoleMismatch { id: pitcher_id })?;

        let odds = AtBatOdds::new(&pitcher_abilities, &batter_abilities);
        let outcome = odds.resolve(rng, &self.config.hit_type_weights);

        let runs = if outcome.is_out() {
            state.record_out();
            0
        } else {
            state.move_runners(outcome.bases_advanced(), batter_id)
        };
        state.record_at_bat(batter_id, pitcher_id, outcome);

        debug!(
            "{} {} batter={} pitcher={} -> {:?} runs={} outs={}",
            state.half, state.inning, batter_id, pitcher_id, outcome, runs, state.outs
        );

        let line = (outcome != AtBatOutcome::Out).then(|| describe_at_bat(&batter_name, outcome, runs));
        log.record(state, PlayKind::AtBat { batter_id, pitcher_id, outcome }, runs, line);
        Ok(outcome)
    }

    fn finish(state: GameState, log: PlayLog, tracked: Side) -> GameResult {
        let innings_played = match state.half {
            Half::Top => state.inning.saturating_sub(1),
            Half::Bottom => state.inning,
        };

        let mut line_score = state.line_score().clone();
        line_score.away.truncate(innings_played as usize);
        line_score.home.truncate(innings_played as usize);

        let home_score = state.runs(Side::Home);
        let away_score = state.runs(Side::Away);
        let outcome = GameOutcome::from_runs(state.runs(tracked), state.runs(tracked.opponent()));
        let home_team = state.team_name(Side::Home).to_string();
        let away_team = state.team_name(Side::Away).to_string();

        GameResult {
            home_team,
            away_team,
            home_score,
            away_score,
            tracked_side: tracked,
            outcome,
            innings_played,
            line_score,
            stat_deltas: state.into_stat_deltas(),
            log: log.lines,
            events: log.events,
        }
    }
}
