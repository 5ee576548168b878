// =============================================================================
// Fight Resolution
// =============================================================================

/// Hard cap on simulated rounds. Unreachable with the damage floor in place.
pub const MAX_ROUNDS: u32 = 100;

/// Fraction of the defender's defense subtracted from each hit.
pub const DEFENSE_REDUCTION_FACTOR: f64 = 0.4;

/// Number of distinct outcomes of the per-hit random bonus.
pub const ROLL_OUTCOMES: u32 = 6;

/// Offset applied to the raw roll, giving bonuses in `-2..=3`.
pub const ROLL_OFFSET: i32 = 2;

/// Every hit deals at least this much damage.
pub const MIN_DAMAGE: u32 = 1;

// =============================================================================
// Rewards
// =============================================================================

/// XP granted per enemy level on a win.
pub const XP_PER_ENEMY_LEVEL: u32 = 5;

/// Companion XP granted on a win.
pub const COMPANION_XP_PER_WIN: u32 = 2;

/// Loot tier thresholds on a 0..100 roll: 2% epic, 18% rare, rest common.
pub const EPIC_LOOT_THRESHOLD: f64 = 2.0;
pub const RARE_LOOT_THRESHOLD: f64 = 20.0;

// =============================================================================
// Simulator
// =============================================================================

pub const DEFAULT_SIM_RUNS: u32 = 1000;
