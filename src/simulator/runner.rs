//! Main simulation runner.
//!
//! Every run goes through `simulate_fight_with_rules`, so results match what
//! a live caller would see for the same matchup.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use super::config::SimConfig;
use super::report::{FightStats, SimReport};
use crate::combat::{first_striker, simulate_fight_with_rules, FightResult};
use crate::error::ConfigError;
use crate::rewards::roll_rewards;

/// Run every configured fight and aggregate a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    config.validate()?;

    let rules = config.rules();
    let opener = first_striker(&config.hero, &config.enemy);
    let mut all_fights = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = run_rng(config.seed, run_idx);

        let result = simulate_fight_with_rules(&config.hero, &config.enemy, &rules, &mut rng)?;
        let rewards = config
            .bounty
            .as_ref()
            .map(|bounty| roll_rewards(&result, bounty, &mut rng));

        let stats = FightStats::from_result(config, &result, opener, rewards);

        if config.verbosity >= 2 {
            debug!(
                fight = run_idx + 1,
                of = config.num_runs,
                winner = %result.winner,
                rounds = result.total_rounds,
                ended_by = ?result.ended_by,
                "fight finished"
            );
        }

        all_fights.push(stats);
    }

    let report = SimReport::from_fights(all_fights);
    if config.verbosity >= 1 {
        info!(
            runs = report.num_runs,
            hero_win_rate = report.hero_win_rate,
            avg_rounds = report.avg_rounds,
            "simulation complete"
        );
    }
    Ok(report)
}

/// Resolve one fight from the config, e.g. for a replay.
pub fn replay_fight(config: &SimConfig) -> Result<FightResult, ConfigError> {
    config.validate()?;
    let mut rng = run_rng(config.seed, 0);
    let result = simulate_fight_with_rules(&config.hero, &config.enemy, &config.rules(), &mut rng)?;
    Ok(result)
}

/// Seeded runs use `seed + run_idx` so each fight is reproducible on its own.
fn run_rng(seed: Option<u64>, run_idx: u32) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(u64::from(run_idx))),
        None => ChaCha8Rng::from_entropy(),
    }
}
