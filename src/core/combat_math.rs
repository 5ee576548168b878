//! Shared combat math for the resolver and the simulator.
//!
//! These pure functions hold the damage formula so every caller agrees on it.

use super::constants::{DEFENSE_REDUCTION_FACTOR, MIN_DAMAGE, ROLL_OFFSET, ROLL_OUTCOMES};

/// Largest value strictly below 1.0.
const UNIT_CEILING: f64 = 1.0 - f64::EPSILON;

/// Convert a uniform `[0, 1)` value into the per-hit damage bonus.
///
/// `floor(unit * 6) - 2`, so the bonus is uniform over `-2..=3`. Values
/// outside `[0, 1)` are clamped first so a bad roll source cannot widen the
/// range.
pub fn roll_bonus(unit: f64) -> i32 {
    let unit = if unit.is_nan() {
        0.0
    } else {
        unit.clamp(0.0, UNIT_CEILING)
    };
    (unit * ROLL_OUTCOMES as f64).floor() as i32 - ROLL_OFFSET
}

/// Damage dealt by one hit.
///
/// # Arguments
/// * `strength` - Attacker's attack power
/// * `bonus` - Random bonus from [`roll_bonus`]
/// * `defense` - Defender's defense
///
/// # Returns
/// `max(1, floor(strength + bonus - defense * 0.4))`
pub fn calculate_damage(strength: f64, bonus: i32, defense: f64) -> u32 {
    let base = strength + f64::from(bonus);
    let raw = (base - defense * DEFENSE_REDUCTION_FACTOR).floor();

    if raw < f64::from(MIN_DAMAGE) {
        MIN_DAMAGE
    } else {
        raw.min(f64::from(u32::MAX)) as u32
    }
}

/// Apply damage to HP, returning remaining HP (minimum 0).
pub fn apply_damage(current_hp: u32, damage: u32) -> u32 {
    current_hp.saturating_sub(damage)
}

/// Check if a combatant is still standing.
pub fn is_alive(current_hp: u32) -> bool {
    current_hp > 0
}
