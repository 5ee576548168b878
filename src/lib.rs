//! Skirmish - Deterministic Turn-Based Fight Resolver
//!
//! Resolves a fight between two combatants round by round, rolls rewards for
//! a hero victory, and runs seeded balance simulations over many fights.

pub mod combat;
pub mod core;
pub mod error;
pub mod rewards;
pub mod simulator;

pub use combat::{
    simulate_fight, simulate_fight_with_rules, Combatant, FightEnd, FightResult, FightRules,
    RollSource, RoundLog, ScriptedRolls, Side,
};
pub use error::{CombatError, ConfigError};
