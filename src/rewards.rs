//! Post-fight reward roll for a hero victory.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::combat::FightResult;
use crate::core::constants::{
    COMPANION_XP_PER_WIN, EPIC_LOOT_THRESHOLD, RARE_LOOT_THRESHOLD, XP_PER_ENEMY_LEVEL,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LootTier {
    Common,
    Rare,
    Epic,
}

/// Inclusive gold range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GoldRange {
    pub min: u32,
    pub max: u32,
}

/// Item ids an enemy can drop, grouped by tier.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LootTable {
    pub common: Vec<String>,
    pub rare: Vec<String>,
    pub epic: Vec<String>,
    pub gold: GoldRange,
}

impl LootTable {
    pub fn pool(&self, tier: LootTier) -> &[String] {
        match tier {
            LootTier::Common => &self.common,
            LootTier::Rare => &self.rare,
            LootTier::Epic => &self.epic,
        }
    }
}

/// What beating an enemy is worth.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bounty {
    pub level: u32,
    #[serde(default)]
    pub loot: LootTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDrop {
    pub item_id: String,
    pub tier: LootTier,
    pub quantity: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightRewards {
    pub xp: u32,
    pub gold: u32,
    pub items: Vec<ItemDrop>,
    pub companion_xp: u32,
}

impl FightRewards {
    pub fn is_empty(&self) -> bool {
        self == &FightRewards::default()
    }
}

/// Roll the rewards for a finished fight.
///
/// Nothing is granted unless the hero (first combatant) won.
pub fn roll_rewards(result: &FightResult, bounty: &Bounty, rng: &mut impl Rng) -> FightRewards {
    if !result.hero_won() {
        return FightRewards::default();
    }

    let xp = bounty.level.saturating_mul(XP_PER_ENEMY_LEVEL);
    let gold = roll_gold(bounty.loot.gold, rng);

    let tier = roll_loot_tier(rng);
    let pool = bounty.loot.pool(tier);
    let items = if pool.is_empty() {
        Vec::new()
    } else {
        let item_id = pool[rng.gen_range(0..pool.len())].clone();
        vec![ItemDrop {
            item_id,
            tier,
            quantity: 1,
        }]
    };

    FightRewards {
        xp,
        gold,
        items,
        companion_xp: COMPANION_XP_PER_WIN,
    }
}

/// Uniform gold in the range; reversed bounds are swapped.
pub fn roll_gold(range: GoldRange, rng: &mut impl Rng) -> u32 {
    let (lo, hi) = if range.min <= range.max {
        (range.min, range.max)
    } else {
        (range.max, range.min)
    };
    rng.gen_range(lo..=hi)
}

/// 2% epic, 18% rare, 80% common.
pub fn roll_loot_tier(rng: &mut impl Rng) -> LootTier {
    tier_for_roll(rng.gen::<f64>() * 100.0)
}

fn tier_for_roll(roll: f64) -> LootTier {
    if roll < EPIC_LOOT_THRESHOLD {
        LootTier::Epic
    } else if roll < RARE_LOOT_THRESHOLD {
        LootTier::Rare
    } else {
        LootTier::Common
    }
}
