//! Turn-based fight resolution.

pub mod logic;
pub mod roll;
pub mod types;

pub use logic::{
    first_striker, simulate_fight, simulate_fight_with_rules, validate_combatant,
    validate_matchup,
};
pub use roll::{RollSource, ScriptedRolls};
pub use types::{Combatant, FightEnd, FightResult, FightRules, RoundLog, Side};
