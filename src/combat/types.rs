use serde::{Deserialize, Serialize};

use crate::core::constants::MAX_ROUNDS;

/// A participant in a fight.
///
/// Plain value type: the resolver copies `hp` and never mutates the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Combatant {
    pub id: String,
    #[serde(default)]
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    /// Attack power.
    #[serde(rename = "str")]
    pub strength: f64,
    #[serde(rename = "def")]
    pub defense: f64,
    /// Decides who strikes first.
    pub speed: f64,
}

impl Combatant {
    /// Create a combatant at full health.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        max_hp: u32,
        strength: f64,
        defense: f64,
        speed: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            hp: max_hp,
            max_hp,
            strength,
            defense,
            speed,
        }
    }

    /// Same combatant starting the fight wounded.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp;
        self
    }
}

/// Which argument of the resolver a combatant was passed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    /// First argument. Wins speed ties.
    Hero,
    /// Second argument.
    Enemy,
}

impl Side {
    pub fn opponent(self) -> Self {
        match self {
            Side::Hero => Side::Enemy,
            Side::Enemy => Side::Hero,
        }
    }
}

/// How a fight ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FightEnd {
    /// A combatant's hp reached zero.
    Knockout,
    /// The round cap was hit and remaining hp decided the winner.
    RoundLimit,
}

/// One resolved attack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundLog {
    /// 1-based.
    pub round: u32,
    pub attacker: String,
    pub defender: String,
    /// Always at least 1.
    pub damage: u32,
    pub attacker_hp_after: u32,
    pub defender_hp_after: u32,
}

/// Outcome of a simulated fight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightResult {
    pub winner: String,
    pub winning_side: Side,
    pub rounds: Vec<RoundLog>,
    pub total_rounds: u32,
    pub ended_by: FightEnd,
}

impl FightResult {
    pub fn hero_won(&self) -> bool {
        self.winning_side == Side::Hero
    }

    /// Total damage dealt by the combatant with the given id.
    pub fn damage_dealt_by(&self, id: &str) -> u64 {
        self.rounds
            .iter()
            .filter(|r| r.attacker == id)
            .map(|r| u64::from(r.damage))
            .sum()
    }

    /// Number of hits landed by the combatant with the given id.
    pub fn hits_by(&self, id: &str) -> u32 {
        let hits = self.rounds.iter().filter(|r| r.attacker == id).count();
        u32::try_from(hits).unwrap_or(u32::MAX)
    }
}

/// Tunable limits of a fight. The damage formula itself is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FightRules {
    pub max_rounds: u32,
}

impl Default for FightRules {
    fn default() -> Self {
        Self {
            max_rounds: MAX_ROUNDS,
        }
    }
}
