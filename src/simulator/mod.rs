//! Fight balance simulator for Monte Carlo analysis.
//!
//! Run thousands of seeded fights between two combatants to analyze:
//! - Win rates and how much the opening strike matters
//! - Fight length distribution
//! - Damage per hit on each side
//! - Reward payout when the enemy carries a bounty

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::{FightStats, SimReport};
pub use runner::{replay_fight, run_simulation};
