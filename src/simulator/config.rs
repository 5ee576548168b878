//! Simulation configuration.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::combat::{validate_matchup, Combatant, FightRules};
use crate::core::constants::{DEFAULT_SIM_RUNS, MAX_ROUNDS};
use crate::error::ConfigError;
use crate::rewards::{Bounty, GoldRange, LootTable};

/// Configuration for a simulation run.
///
/// Loadable from TOML; every field except the combatants has a default.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Number of fights to simulate
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Round cap per fight
    pub max_rounds: u32,

    pub hero: Combatant,
    pub enemy: Combatant,

    /// Enemy reward table; rewards are skipped when absent
    pub bounty: Option<Bounty>,

    /// Log verbosity (0 = silent, 1 = summary `info!`, 2 = per fight `debug!`)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: DEFAULT_SIM_RUNS,
            seed: None,
            max_rounds: MAX_ROUNDS,
            hero: Combatant::new("hero", "Hero", 50, 10.0, 5.0, 10.0),
            enemy: Combatant::new("goblin", "Goblin", 30, 6.0, 2.0, 5.0),
            bounty: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick sanity check: few runs against the stock goblin.
    pub fn quick_check() -> Self {
        Self {
            num_runs: 100,
            seed: Some(42),
            ..Default::default()
        }
    }

    /// Near-even matchup with loot, for tuning the reward economy.
    pub fn loot_analysis(num_runs: u32) -> Self {
        Self {
            num_runs,
            enemy: Combatant::new("brute", "Brute", 60, 11.0, 4.0, 8.0),
            bounty: Some(Bounty {
                level: 3,
                loot: LootTable {
                    common: vec!["bone_club".to_string(), "torn_hide".to_string()],
                    rare: vec!["brute_tusk".to_string()],
                    epic: vec!["warlord_helm".to_string()],
                    gold: GoldRange { min: 4, max: 12 },
                },
            }),
            ..Default::default()
        }
    }

    /// Parse a TOML document and validate it.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: SimConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn rules(&self) -> FightRules {
        FightRules {
            max_rounds: self.max_rounds,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.num_runs == 0 {
            return Err(ConfigError::Invalid("num_runs must be at least 1".to_string()));
        }
        validate_matchup(&self.hero, &self.enemy, &self.rules())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CombatError;

    #[test]
    fn test_default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
        assert!(SimConfig::quick_check().validate().is_ok());
        assert!(SimConfig::loot_analysis(10).validate().is_ok());
    }

    #[test]
    fn test_parse_toml() {
        let content = r#"
            num_runs = 250
            seed = 7
            max_rounds = 50

            [hero]
            id = "knight"
            name = "Knight"
            hp = 80
            maxHp = 80
            str = 12.0
            def = 6.0
            speed = 4.0

            [enemy]
            id = "wolf"
            hp = 25
            maxHp = 25
            str = 7.0
            def = 1.5
            speed = 9.0

            [bounty]
            level = 2

            [bounty.loot]
            common = ["wolf_pelt"]
            gold = { min = 1, max = 3 }
        "#;

        let config = SimConfig::from_toml_str(content).unwrap();
        assert_eq!(config.num_runs, 250);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.rules().max_rounds, 50);
        assert_eq!(config.hero.id, "knight");
        assert_eq!(config.enemy.name, "");
        assert_eq!(config.enemy.defense, 1.5);
        let bounty = config.bounty.unwrap();
        assert_eq!(bounty.level, 2);
        assert_eq!(bounty.loot.common, vec!["wolf_pelt".to_string()]);
        assert!(bounty.loot.epic.is_empty());
        assert_eq!(config.verbosity, 1);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = SimConfig::from_toml_str("num_runs = 5").unwrap();
        assert_eq!(config.num_runs, 5);
        assert_eq!(config.hero.id, "hero");
        assert!(config.bounty.is_none());
    }

    #[test]
    fn test_rejects_zero_runs() {
        let err = SimConfig::from_toml_str("num_runs = 0").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_rejects_invalid_combatant() {
        let content = r#"
            [enemy]
            id = "ghost"
            hp = 0
            maxHp = 10
            str = 1.0
            def = 1.0
            speed = 1.0
        "#;
        let err = SimConfig::from_toml_str(content).unwrap_err();
        assert!(matches!(err, ConfigError::Combat(_)));
    }

    #[test]
    fn test_rejects_round_cap_above_limit() {
        for content in [
            "num_runs = 1\nmax_rounds = 101",
            "num_runs = 1\nmax_rounds = 4000000000",
        ] {
            let err = SimConfig::from_toml_str(content).unwrap_err();
            assert!(
                matches!(err, ConfigError::Combat(CombatError::InvalidRules(_))),
                "{:?}",
                err
            );
        }
        let config = SimConfig::from_toml_str("num_runs = 1\nmax_rounds = 100").unwrap();
        assert_eq!(config.rules().max_rounds, MAX_ROUNDS);
    }

    #[test]
    fn test_rejects_malformed_toml() {
        let err = SimConfig::from_toml_str("num_runs = [").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
