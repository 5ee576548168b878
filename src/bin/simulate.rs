//! Fight balance simulator CLI.
//!
//! Run Monte Carlo simulations of one matchup to analyze balance.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                        # 1000 fights, stock matchup
//!   cargo run --bin simulate -- -c orc.toml -n 200  # Matchup from a file
//!   cargo run --bin simulate -- --seed 42 --replay  # One fight as JSON

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use skirmish::simulator::{replay_fight, run_simulation, SimConfig};
use skirmish::ConfigError;

#[derive(Parser, Debug)]
#[command(name = "simulate")]
#[command(about = "Simulate many fights between two combatants and report balance")]
struct Args {
    /// TOML file with the matchup and simulation settings
    #[arg(long, short = 'c')]
    config: Option<PathBuf>,

    /// Number of fights to simulate
    #[arg(long, short = 'n')]
    runs: Option<u32>,

    /// Random seed for reproducible runs
    #[arg(long, short = 's')]
    seed: Option<u64>,

    /// Round cap per fight (1-100)
    #[arg(long)]
    max_rounds: Option<u32>,

    /// Quick check (100 seeded fights, stock matchup)
    #[arg(long)]
    quick: bool,

    /// Loot analysis preset (brute with a bounty)
    #[arg(long)]
    loot: bool,

    /// Resolve a single fight and print its round log as JSON
    #[arg(long)]
    replay: bool,

    /// Also save the report as JSON
    #[arg(long)]
    json: bool,

    /// Log one line per fight
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Per-fight lines are logged at debug level by the simulator.
    let default_filter = if args.verbose {
        "info,skirmish::simulator=debug"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ConfigError> {
    let config = build_config(args)?;

    if args.replay {
        let result = replay_fight(&config)?;
        println!(
            "{}",
            serde_json::to_string_pretty(&result).unwrap_or_else(|_| "{}".to_string())
        );
        return Ok(());
    }

    print_header(&config);
    let report = run_simulation(&config)?;
    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<SimConfig, ConfigError> {
    let mut config = if let Some(path) = &args.config {
        SimConfig::load(path)?
    } else if args.loot {
        SimConfig::loot_analysis(1000)
    } else if args.quick {
        SimConfig::quick_check()
    } else {
        SimConfig::default()
    };

    if let Some(runs) = args.runs {
        config.num_runs = runs;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(max_rounds) = args.max_rounds {
        config.max_rounds = max_rounds;
    }
    if args.verbose {
        config.verbosity = 2;
    }

    config.validate()?;
    Ok(config)
}

fn print_header(config: &SimConfig) {
    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              SKIRMISH BALANCE SIMULATOR                       ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Rounds:     {}", config.max_rounds);
    println!(
        "  Hero:           {} (hp {}, str {}, def {}, speed {})",
        config.hero.id,
        config.hero.hp,
        config.hero.strength,
        config.hero.defense,
        config.hero.speed
    );
    println!(
        "  Enemy:          {} (hp {}, str {}, def {}, speed {})",
        config.enemy.id,
        config.enemy.hp,
        config.enemy.strength,
        config.enemy.defense,
        config.enemy.speed
    );
    if let Some(bounty) = &config.bounty {
        println!("  Bounty:         level {}", bounty.level);
    }
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();
}
