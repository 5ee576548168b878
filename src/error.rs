use thiserror::Error;

/// Rejected fight input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CombatError {
    #[error("combatant {id} must start with hp > 0")]
    NonPositiveHp { id: String },

    #[error("combatant {id} has hp {hp} above max hp {max_hp}")]
    HpAboveMax { id: String, hp: u32, max_hp: u32 },

    #[error("combatant {id} has invalid {stat}: {value}")]
    InvalidStat {
        id: String,
        stat: &'static str,
        value: f64,
    },

    #[error("both combatants share id {0}")]
    DuplicateId(String),

    #[error("invalid fight rules: {0}")]
    InvalidRules(String),
}

/// Failure loading or validating a simulator configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid fight setup: {0}")]
    Combat(#[from] CombatError),

    #[error("invalid config: {0}")]
    Invalid(String),
}
