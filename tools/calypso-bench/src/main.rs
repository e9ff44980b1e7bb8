//! calypso-bench: run the simulator against a baseline policy and report
//! a JSON summary.
//!
//! Usage:
//!   calypso-bench --episodes 20 --tier 2 --area wide --boss --policy heuristic
//!   RUST_LOG=calypso_sim=debug calypso-bench --episodes 1

mod policy;

use std::process;

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::info;

use calypso_core::enums::{AreaType, EpisodeOutcome};
use calypso_core::error::SimError;
use calypso_sim::{SimConfig, SimulationEngine};

use policy::{HeuristicPolicy, Policy, RandomPolicy};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PolicyKind {
    Random,
    Heuristic,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AreaArg {
    Narrow,
    Medium,
    Wide,
}

impl From<AreaArg> for AreaType {
    fn from(area: AreaArg) -> Self {
        match area {
            AreaArg::Narrow => AreaType::Narrow,
            AreaArg::Medium => AreaType::Medium,
            AreaArg::Wide => AreaType::Wide,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "calypso-bench")]
#[command(about = "Run CALYPSO episodes with a baseline policy")]
struct Args {
    /// Number of episodes to run
    #[arg(long, default_value_t = 10)]
    episodes: u32,

    /// Base seed; episode N is reset with seed + N
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Opening enemy tier (1 or 2)
    #[arg(long, default_value_t = 1)]
    tier: u8,

    /// Alarm level (1..=3)
    #[arg(long, default_value_t = 1)]
    alarm: u8,

    #[arg(long, value_enum, default_value_t = AreaArg::Medium)]
    area: AreaArg,

    /// Spawn the boss
    #[arg(long)]
    boss: bool,

    #[arg(long, default_value_t = 2000)]
    max_steps: u32,

    #[arg(long, value_enum, default_value_t = PolicyKind::Heuristic)]
    policy: PolicyKind,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    episodes: u32,
    policy: String,
    mean_reward: f64,
    mean_kills: f64,
    mean_steps: f64,
    victories: u32,
    defeats: u32,
    draws: u32,
    truncations: u32,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let summary = match run(&args) {
        Ok(summary) => summary,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&summary) {
        Ok(json) => println!("{json}"),
        Err(e) => {
            eprintln!("Error: failed to encode summary: {e}");
            process::exit(1);
        }
    }
}

fn run(args: &Args) -> Result<Summary, SimError> {
    let config = SimConfig {
        seed: args.seed,
        initial_tier: args.tier,
        alarm_level: args.alarm,
        area_type: args.area.into(),
        enable_boss: args.boss,
        max_steps: args.max_steps,
        ..SimConfig::default()
    };
    let mut engine = SimulationEngine::new(config)?;
    let mut policy: Box<dyn Policy> = match args.policy {
        PolicyKind::Random => Box::new(RandomPolicy::new(args.seed)),
        PolicyKind::Heuristic => Box::new(HeuristicPolicy),
    };

    let mut summary = Summary {
        episodes: args.episodes,
        policy: format!("{:?}", args.policy).to_lowercase(),
        ..Summary::default()
    };
    let mut total_reward = 0.0;
    let mut total_kills = 0u64;
    let mut total_steps = 0u64;

    for episode in 0..args.episodes {
        let seed = args.seed.wrapping_add(u64::from(episode));
        let (mut observation, _) = engine.reset(Some(seed));
        let info = loop {
            let action = policy.act(&observation);
            let outcome = engine.step(action.index())?;
            observation = outcome.observation;
            if outcome.terminated || outcome.truncated {
                break outcome.info;
            }
        };

        info!(
            episode,
            reward = info.total_reward,
            kills = info.bot_kills,
            outcome = ?info.outcome,
            "episode complete"
        );
        total_reward += info.total_reward;
        total_kills += u64::from(info.bot_kills);
        total_steps += u64::from(info.step);
        match info.outcome {
            Some(EpisodeOutcome::Victory) => summary.victories += 1,
            Some(EpisodeOutcome::Defeat) => summary.defeats += 1,
            Some(EpisodeOutcome::Draw) => summary.draws += 1,
            Some(EpisodeOutcome::Truncated) | None => summary.truncations += 1,
        }
    }

    if args.episodes > 0 {
        let n = f64::from(args.episodes);
        summary.mean_reward = total_reward / n;
        summary.mean_kills = total_kills as f64 / n;
        summary.mean_steps = total_steps as f64 / n;
    }
    Ok(summary)
}
