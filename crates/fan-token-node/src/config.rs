// fan-token-node/src/config.rs
use fan_token_core::{AccountId, Amount, Ledger, LedgerError, DEFAULT_MAX_SUPPLY};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to encode config: {0}")]
    Encode(#[from] toml::ser::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Ledger rejected configuration: {0}")]
    Ledger(#[from] LedgerError),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeConfig {
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    pub admin: String,
    pub max_supply: Amount,
    #[serde(default)]
    pub start_paused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String, // "error" | "warn" | "info" | "debug" | "trace"
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}

impl Default for NodeConfig {
    fn default() -> Self {
        Self {
            ledger: LedgerConfig {
                admin: "ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM".into(),
                max_supply: Amount::from_u64(DEFAULT_MAX_SUPPLY),
                start_paused: false,
            },
            logging: LoggingConfig::default(),
        }
    }
}

impl NodeConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let config: NodeConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ledger.admin.trim().is_empty() {
            return Err(ConfigError::Invalid("ledger.admin must not be empty".into()));
        }
        if self.ledger.max_supply.is_zero() {
            return Err(ConfigError::Invalid("ledger.max_supply must be positive".into()));
        }
        Ok(())
    }

    /// Fresh ledger described by the `[ledger]` section
    pub fn build_ledger(&self) -> Result<Ledger, ConfigError> {
        self.validate()?;

        let admin = AccountId::new(self.ledger.admin.clone());
        let mut ledger = Ledger::with_max_supply(admin.clone(), self.ledger.max_supply.clone());
        if self.ledger.start_paused {
            ledger.set_paused(&admin, true)?;
        }
        Ok(ledger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = NodeConfig::default();
        assert_eq!(config.ledger.max_supply, Amount::from_u64(100_000_000));
        assert!(!config.ledger.start_paused);
        assert_eq!(config.logging.level, "info");
        config.validate().unwrap();
    }

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = NodeConfig::default();
        config.ledger.admin = "treasury".into();
        config.ledger.start_paused = true;
        config.to_file(&path).unwrap();

        let loaded = NodeConfig::from_file(&path).unwrap();
        assert_eq!(loaded.ledger.admin, "treasury");
        assert!(loaded.ledger.start_paused);
        assert_eq!(loaded.ledger.max_supply, config.ledger.max_supply);
    }

    #[test]
    fn test_minimal_toml() {
        let config: NodeConfig = toml::from_str(
            r#"
            [ledger]
            admin = "A"
            max_supply = 1000
            "#,
        )
        .unwrap();
        assert_eq!(config.ledger.max_supply, Amount::from_u64(1000));
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = NodeConfig::default();
        config.ledger.admin = "  ".into();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let mut config = NodeConfig::default();
        config.ledger.max_supply = Amount::zero();
        assert!(matches!(config.build_ledger(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_build_ledger() {
        let mut config = NodeConfig::default();
        config.ledger.admin = "A".into();
        config.ledger.max_supply = Amount::from_u64(10);
        config.ledger.start_paused = true;

        let ledger = config.build_ledger().unwrap();
        assert_eq!(ledger.admin().as_str(), "A");
        assert_eq!(ledger.max_supply(), &Amount::from_u64(10));
        assert!(ledger.is_paused());
    }
}
