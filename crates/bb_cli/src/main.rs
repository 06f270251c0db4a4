//! Baseball Simulation CLI
//!
//! Game simulation from JSON requests, a built-in demo game, seeded series,
//! stats rollup and CSV roster import.

#[cfg(feature = "cli")]
use anyhow::{Context, Result};
#[cfg(feature = "cli")]
use bb_core::data::{sample_lineup, sample_roster};
#[cfg(feature = "cli")]
use bb_core::{EngineConfig, GameEngine, GameResult, Side, Team};
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand, ValueEnum};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "bb_cli")]
#[command(about = "Simulate baseball games and maintain player stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Simulate one game from a JSON request file
    Simulate {
        /// Game request JSON file path
        #[arg(long)]
        request: PathBuf,

        /// Write the response JSON here instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,

        /// Pretty-print the response JSON
        #[arg(long, default_value = "false")]
        pretty: bool,
    },

    /// Play the built-in sample clubs and print the play-by-play
    Demo {
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Club whose stats are tracked
        #[arg(long, value_enum, default_value_t = TrackedArg::Home)]
        tracked: TrackedArg,

        /// Play extra innings instead of ending tied games after nine
        #[arg(long, default_value = "false")]
        extra_innings: bool,
    },

    /// Play a seeded series; uses the sample clubs unless a request is given
    Series {
        /// Game request JSON file path supplying teams, tracked side and config
        #[arg(long)]
        request: Option<PathBuf>,

        #[arg(long, default_value_t = 100)]
        games: u64,

        /// First seed; game i uses first_seed + i (default: the request's seed, else 1)
        #[arg(long)]
        first_seed: Option<u64>,

        /// Club whose stats are tracked when no request is given
        #[arg(long, value_enum, default_value_t = TrackedArg::Home)]
        tracked: TrackedArg,

        #[arg(long, default_value = "false")]
        extra_innings: bool,
    },

    /// Fold a saved game's stat deltas into a roster file
    Rollup {
        /// Roster JSON file path
        #[arg(long)]
        players: PathBuf,

        /// Saved game result JSON file path (its `stat_deltas` are applied)
        #[arg(long)]
        deltas: PathBuf,

        /// Output roster JSON file path (default: stdout)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Build a roster JSON file from CSV
    Roster {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Output roster JSON file path
        #[arg(long)]
        out: PathBuf,

        /// Verify the written file against its checksum
        #[arg(long, default_value = "false")]
        verify: bool,

        /// Output metadata JSON file
        #[arg(long)]
        metadata: Option<PathBuf>,
    },
}

#[cfg(feature = "cli")]
#[derive(Clone, Copy, ValueEnum)]
enum TrackedArg {
    Home,
    Away,
}

#[cfg(feature = "cli")]
impl From<TrackedArg> for Side {
    fn from(arg: TrackedArg) -> Self {
        match arg {
            TrackedArg::Home => Side::Home,
            TrackedArg::Away => Side::Away,
        }
    }
}

#[cfg(feature = "cli")]
fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Simulate { request, out, pretty } => {
            let request = bb_cli::load_game_request(&request)?;
            let response = bb_core::simulate_game(request).context("Simulation failed")?;
            let json = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };

            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("📄 Result saved to: {}", path.display());
                    println!("   Log SHA256: {}", response.log_sha256);
                }
                None => println!("{json}"),
            }
        }

        Commands::Demo { seed, tracked, extra_innings } => {
            let engine = GameEngine::new(engine_config(extra_innings)?)?;
            let (home, away) = sample_clubs()?;

            let result = engine.play_seeded(home, away, tracked.into(), seed)?;

            for line in &result.log {
                println!("{line}");
            }
            print_box_score(&result);
        }

        Commands::Series { request, games, first_seed, tracked, extra_innings } => {
            let (engine, home, away, tracked, request_seed) = match request {
                Some(path) => {
                    let request = bb_cli::load_game_request(&path)?;
                    let mut config = match request.config {
                        Some(config) => config,
                        None => EngineConfig::from_env()?,
                    };
                    config.extra_innings |= extra_innings;
                    let home = request.home_team.into_team()?;
                    let away = request.away_team.into_team()?;
                    (GameEngine::new(config)?, home, away, request.tracked, Some(request.seed))
                }
                None => {
                    let (home, away) = sample_clubs()?;
                    (GameEngine::new(engine_config(extra_innings)?)?, home, away, tracked.into(), None)
                }
            };
            let seed = first_seed.or(request_seed).unwrap_or(1);
            let seeds: Vec<u64> = (0..games).map(|i| seed.wrapping_add(i)).collect();

            println!("⚾ Simulating {} games: {} at {} (seeds {}..)", seeds.len(), away.name(), home.name(), seed);
            let report = bb_core::simulate_series(&engine, &home, &away, tracked, &seeds)?;
            let summary = &report.summary;

            println!("\n✅ Series complete");
            println!("   Record:           {}-{}-{}", summary.wins, summary.losses, summary.draws);
            println!("   Win rate:         {:.3}", summary.win_rate());
            println!("   Runs per game:    {:.2}", summary.tracked_runs_per_game);
            println!("   Allowed per game: {:.2}", summary.opponent_runs_per_game);
        }

        Commands::Rollup { players, deltas, out } => {
            let response = bb_cli::rollup_roster(&players, &deltas)?;
            let json = serde_json::to_string_pretty(&response.players)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("✅ Updated {} players", response.updated);
                    println!("📄 Roster saved to: {}", path.display());
                }
                None => println!("{json}"),
            }
        }

        Commands::Roster { csv, out, verify, metadata } => {
            println!("🔨 Building roster from CSV...");
            println!("   CSV Input: {}", csv.display());
            println!("   Output:    {}", out.display());

            let meta = bb_cli::build_roster(&csv, &out)?;
            println!("   Players:   {} ({} pitchers, {} batters)", meta.players, meta.pitchers, meta.batters);
            println!("   Checksum:  {}", meta.checksum);

            if verify {
                println!("\n🔍 Verifying roster integrity...");
                if bb_cli::verify_roster(&out, &meta.checksum)? {
                    println!("✅ Roster verification passed");
                } else {
                    anyhow::bail!("❌ Roster verification failed - checksum mismatch!");
                }
            }

            if let Some(metadata_path) = metadata {
                std::fs::write(&metadata_path, serde_json::to_string_pretty(&meta)?)?;
                println!("\n📄 Metadata saved to: {}", metadata_path.display());
            }
        }
    }

    Ok(())
}

/// `BB_ENGINE_CONFIG_PATH` if set, with the flag forcing extra innings on.
#[cfg(feature = "cli")]
fn engine_config(extra_innings: bool) -> Result<EngineConfig> {
    let mut config = EngineConfig::from_env()?;
    if extra_innings {
        config.extra_innings = true;
    }
    Ok(config)
}

#[cfg(feature = "cli")]
fn sample_clubs() -> Result<(Team, Team)> {
    let home = Team::new("Tigers", sample_roster(0), sample_lineup(0))?;
    let away = Team::new("Giants", sample_roster(100), sample_lineup(100))?;
    Ok((home, away))
}

#[cfg(feature = "cli")]
fn print_box_score(result: &GameResult) {
    let innings: Vec<String> = (1..=result.line_score.away.len()).map(|i| format!("{i:>3}")).collect();
    let runs = |line: &[u32]| line.iter().map(|r| format!("{r:>3}")).collect::<Vec<_>>().join("");

    println!();
    println!("{:<12}{}    R", "", innings.join(""));
    println!("{:<12}{}  {:>3}", result.away_team, runs(&result.line_score.away), result.away_score);
    println!("{:<12}{}  {:>3}", result.home_team, runs(&result.line_score.home), result.home_score);
    println!();

    match result.winner() {
        Some(winner) => println!("🏆 {winner} win"),
        None => println!("🤝 Tied after {} innings", result.innings_played),
    }
    println!("   Log SHA256: {}", result.log_sha256());
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("bb_cli is not available. Enable the 'cli' feature to use it.");
    std::process::exit(1);
}
