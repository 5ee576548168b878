use tracing::{debug, trace, warn};

use super::roll::RollSource;
use super::types::{Combatant, FightEnd, FightResult, FightRules, RoundLog, Side};
use crate::core::combat_math::{apply_damage, calculate_damage, is_alive, roll_bonus};
use crate::core::constants::MAX_ROUNDS;
use crate::error::CombatError;

/// Resolve a fight under the default rules (100 round cap).
///
/// # Arguments
/// * `hero` - First combatant; wins speed ties and hp ties at the round cap
/// * `enemy` - Second combatant
/// * `rolls` - Source of the per-hit random bonus
///
/// # Returns
/// The full round log and the winner, or a `CombatError` when either
/// combatant is not fit to fight.
pub fn simulate_fight(
    hero: &Combatant,
    enemy: &Combatant,
    rolls: &mut impl RollSource,
) -> Result<FightResult, CombatError> {
    simulate_fight_with_rules(hero, enemy, &FightRules::default(), rolls)
}

/// Resolve a fight with explicit rules.
pub fn simulate_fight_with_rules(
    hero: &Combatant,
    enemy: &Combatant,
    rules: &FightRules,
    rolls: &mut impl RollSource,
) -> Result<FightResult, CombatError> {
    validate_matchup(hero, enemy, rules)?;

    // Index 0 is the hero, 1 the enemy.
    let fighters = [hero, enemy];
    let mut hp = [hero.hp, enemy.hp];

    let mut attacker = match first_striker(hero, enemy) {
        Side::Hero => 0,
        Side::Enemy => 1,
    };
    let mut rounds = Vec::new();

    for round in 1..=rules.max_rounds {
        let defender = 1 - attacker;
        let bonus = roll_bonus(rolls.next_unit());
        let damage = calculate_damage(
            fighters[attacker].strength,
            bonus,
            fighters[defender].defense,
        );
        hp[defender] = apply_damage(hp[defender], damage);

        trace!(
            round,
            attacker = %fighters[attacker].id,
            bonus,
            damage,
            defender_hp = hp[defender],
            "round resolved"
        );

        rounds.push(RoundLog {
            round,
            attacker: fighters[attacker].id.clone(),
            defender: fighters[defender].id.clone(),
            damage,
            attacker_hp_after: hp[attacker],
            defender_hp_after: hp[defender],
        });

        if !is_alive(hp[0]) || !is_alive(hp[1]) {
            let winner = if is_alive(hp[0]) { Side::Hero } else { Side::Enemy };
            return Ok(finish(hero, enemy, winner, rounds, FightEnd::Knockout));
        }

        attacker = defender;
    }

    // Only reachable if the damage floor stops guaranteeing progress.
    let winner = if hp[1] > hp[0] { Side::Enemy } else { Side::Hero };
    warn!(
        max_rounds = rules.max_rounds,
        hero_hp = hp[0],
        enemy_hp = hp[1],
        "fight hit the round cap, deciding on remaining hp"
    );
    Ok(finish(hero, enemy, winner, rounds, FightEnd::RoundLimit))
}

/// Who attacks first: strictly greater speed, otherwise the hero.
pub fn first_striker(hero: &Combatant, enemy: &Combatant) -> Side {
    if enemy.speed > hero.speed {
        Side::Enemy
    } else {
        Side::Hero
    }
}

/// Check both combatants and the rules before any round is rolled.
pub fn validate_matchup(
    hero: &Combatant,
    enemy: &Combatant,
    rules: &FightRules,
) -> Result<(), CombatError> {
    if rules.max_rounds == 0 {
        return Err(CombatError::InvalidRules(
            "max_rounds must be at least 1".to_string(),
        ));
    }
    if rules.max_rounds > MAX_ROUNDS {
        return Err(CombatError::InvalidRules(format!(
            "max_rounds {} exceeds the cap of {}",
            rules.max_rounds, MAX_ROUNDS
        )));
    }
    validate_combatant(hero)?;
    validate_combatant(enemy)?;
    if hero.id == enemy.id {
        return Err(CombatError::DuplicateId(hero.id.clone()));
    }
    Ok(())
}

/// A combatant can fight when it is standing, within its max hp, and has
/// finite non-negative stats.
pub fn validate_combatant(c: &Combatant) -> Result<(), CombatError> {
    if c.hp == 0 {
        return Err(CombatError::NonPositiveHp { id: c.id.clone() });
    }
    if c.hp > c.max_hp {
        return Err(CombatError::HpAboveMax {
            id: c.id.clone(),
            hp: c.hp,
            max_hp: c.max_hp,
        });
    }
    for (stat, value) in [("str", c.strength), ("def", c.defense), ("speed", c.speed)] {
        if !value.is_finite() || value < 0.0 {
            return Err(CombatError::InvalidStat {
                id: c.id.clone(),
                stat,
                value,
            });
        }
    }
    Ok(())
}

fn finish(
    hero: &Combatant,
    enemy: &Combatant,
    winning_side: Side,
    rounds: Vec<RoundLog>,
    ended_by: FightEnd,
) -> FightResult {
    let winner = match winning_side {
        Side::Hero => hero.id.clone(),
        Side::Enemy => enemy.id.clone(),
    };
    let total_rounds = rounds.len() as u32;

    debug!(%winner, total_rounds, ?ended_by, "fight resolved");

    FightResult {
        winner,
        winning_side,
        rounds,
        total_rounds,
        ended_by,
    }
}
