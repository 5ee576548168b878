//! Simulation report generation.

use std::collections::BTreeMap;

use serde::Serialize;

use super::config::SimConfig;
use crate::combat::{FightEnd, FightResult, Side};
use crate::rewards::{FightRewards, LootTier};

/// Per-fight numbers kept for aggregation.
#[derive(Debug, Clone, Serialize)]
pub struct FightStats {
    pub hero_won: bool,
    pub rounds: u32,
    pub hit_round_limit: bool,
    pub opener_won: bool,
    pub hero_damage: u64,
    pub hero_hits: u32,
    pub enemy_damage: u64,
    pub enemy_hits: u32,
    pub rewards: Option<FightRewards>,
}

impl FightStats {
    pub fn from_result(
        config: &SimConfig,
        result: &FightResult,
        opener: Side,
        rewards: Option<FightRewards>,
    ) -> Self {
        let hero_id = config.hero.id.as_str();
        let enemy_id = config.enemy.id.as_str();

        Self {
            hero_won: result.hero_won(),
            rounds: result.total_rounds,
            hit_round_limit: result.ended_by == FightEnd::RoundLimit,
            opener_won: result.winning_side == opener,
            hero_damage: result.damage_dealt_by(hero_id),
            hero_hits: result.hits_by(hero_id),
            enemy_damage: result.damage_dealt_by(enemy_id),
            enemy_hits: result.hits_by(enemy_id),
            rewards,
        }
    }
}

/// Aggregated results from many simulated fights.
#[derive(Debug, Clone, Serialize)]
pub struct SimReport {
    pub num_runs: u32,
    pub hero_wins: u32,
    pub enemy_wins: u32,
    pub hero_win_rate: f64,
    pub round_limit_hits: u32,

    // Fight length
    pub avg_rounds: f64,
    pub shortest_fight: u32,
    pub longest_fight: u32,
    pub round_distribution: BTreeMap<u32, u32>,

    // Damage
    pub avg_hero_damage_per_hit: f64,
    pub avg_enemy_damage_per_hit: f64,
    pub opener_win_rate: f64,

    // Rewards, only populated when a bounty was configured
    pub avg_xp: f64,
    pub avg_gold: f64,
    pub epic_drops: u32,
    pub rare_drops: u32,
    pub common_drops: u32,

    #[serde(skip)]
    pub fights: Vec<FightStats>,
}

impl SimReport {
    /// Build a report from completed fights.
    pub fn from_fights(fights: Vec<FightStats>) -> Self {
        let num_runs = fights.len() as u32;
        let runs = num_runs.max(1) as f64;

        let hero_wins = fights.iter().filter(|f| f.hero_won).count() as u32;
        let enemy_wins = num_runs - hero_wins;
        let round_limit_hits = fights.iter().filter(|f| f.hit_round_limit).count() as u32;
        let opener_wins = fights.iter().filter(|f| f.opener_won).count() as u32;

        let avg_rounds = fights.iter().map(|f| f.rounds as f64).sum::<f64>() / runs;
        let shortest_fight = fights.iter().map(|f| f.rounds).min().unwrap_or(0);
        let longest_fight = fights.iter().map(|f| f.rounds).max().unwrap_or(0);

        let mut round_distribution = BTreeMap::new();
        for fight in &fights {
            *round_distribution.entry(fight.rounds).or_insert(0) += 1;
        }

        let avg_hero_damage_per_hit = per_hit(
            fights.iter().map(|f| f.hero_damage).sum(),
            fights.iter().map(|f| u64::from(f.hero_hits)).sum(),
        );
        let avg_enemy_damage_per_hit = per_hit(
            fights.iter().map(|f| f.enemy_damage).sum(),
            fights.iter().map(|f| u64::from(f.enemy_hits)).sum(),
        );

        let rewards: Vec<&FightRewards> = fights.iter().filter_map(|f| f.rewards.as_ref()).collect();
        let avg_xp = rewards.iter().map(|r| r.xp as f64).sum::<f64>() / runs;
        let avg_gold = rewards.iter().map(|r| r.gold as f64).sum::<f64>() / runs;
        let drops_of = |tier: LootTier| {
            rewards
                .iter()
                .flat_map(|r| r.items.iter())
                .filter(|item| item.tier == tier)
                .map(|item| item.quantity)
                .sum::<u32>()
        };
        let epic_drops = drops_of(LootTier::Epic);
        let rare_drops = drops_of(LootTier::Rare);
        let common_drops = drops_of(LootTier::Common);

        Self {
            num_runs,
            hero_wins,
            enemy_wins,
            hero_win_rate: hero_wins as f64 / runs,
            round_limit_hits,
            avg_rounds,
            shortest_fight,
            longest_fight,
            round_distribution,
            avg_hero_damage_per_hit,
            avg_enemy_damage_per_hit,
            opener_win_rate: opener_wins as f64 / runs,
            avg_xp,
            avg_gold,
            epic_drops,
            rare_drops,
            common_drops,
            fights,
        }
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════════════════════════════\n");
        report.push_str("                    FIGHT SIMULATION REPORT\n");
        report.push_str("═══════════════════════════════════════════════════════════════\n\n");

        report.push_str(&format!(
            "Fights: {} total, {} hero wins, {} enemy wins, {} hit the round cap\n\n",
            self.num_runs, self.hero_wins, self.enemy_wins, self.round_limit_hits
        ));

        report.push_str("── OUTCOME ──────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Hero Win Rate:       {:.1}%\n",
            self.hero_win_rate * 100.0
        ));
        report.push_str(&format!(
            "  Opener Win Rate:     {:.1}%\n\n",
            self.opener_win_rate * 100.0
        ));

        report.push_str("── FIGHT LENGTH ─────────────────────────────────────────────────\n");
        report.push_str(&format!("  Avg Rounds:          {:.1}\n", self.avg_rounds));
        report.push_str(&format!("  Shortest:            {}\n", self.shortest_fight));
        report.push_str(&format!("  Longest:             {}\n", self.longest_fight));
        for (rounds, count) in &self.round_distribution {
            let pct = (*count as f64 / self.num_runs.max(1) as f64) * 100.0;
            let bar: String = "█".repeat((pct / 5.0) as usize);
            report.push_str(&format!("  {:3} rounds: {:>5.1}% {}\n", rounds, pct, bar));
        }
        report.push('\n');

        report.push_str("── DAMAGE ───────────────────────────────────────────────────────\n");
        report.push_str(&format!(
            "  Hero Dmg/Hit:        {:.2}\n",
            self.avg_hero_damage_per_hit
        ));
        report.push_str(&format!(
            "  Enemy Dmg/Hit:       {:.2}\n\n",
            self.avg_enemy_damage_per_hit
        ));

        if self.fights.iter().any(|f| f.rewards.is_some()) {
            report.push_str("── REWARDS ──────────────────────────────────────────────────────\n");
            report.push_str(&format!("  Avg XP:              {:.1}\n", self.avg_xp));
            report.push_str(&format!("  Avg Gold:            {:.1}\n", self.avg_gold));
            report.push_str(&format!(
                "  Drops (C/R/E):       {}/{}/{}\n\n",
                self.common_drops, self.rare_drops, self.epic_drops
            ));
        }

        report.push_str("── BALANCE ASSESSMENT ───────────────────────────────────────────\n");
        let rating = if self.hero_win_rate > 0.95 {
            "TOO EASY - Hero almost never loses"
        } else if self.hero_win_rate > 0.6 {
            "GOOD - Hero favoured but can lose"
        } else if self.hero_win_rate > 0.4 {
            "EVEN - Coin flip"
        } else {
            "TOO HARD - Enemy usually wins"
        };
        report.push_str(&format!("  Rating:              {}\n", rating));

        if self.round_limit_hits > 0 {
            report.push_str("  ⚠️  Some fights hit the round cap - damage too low?\n");
        }
        if self.avg_rounds <= 2.0 {
            report.push_str("  ⚠️  Fights end almost instantly - hp too low?\n");
        }

        report.push_str("\n═══════════════════════════════════════════════════════════════\n");

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

fn per_hit(total_damage: u64, hits: u64) -> f64 {
    if hits == 0 {
        0.0
    } else {
        total_damage as f64 / hits as f64
    }
}
