//! Configuration for the inventory system
//!
//! Loaded in layers:
//! 1. Default values in code
//! 2. An optional `config/inventory.{toml,yaml,json}` file
//! 3. Environment variable overrides with the `NOTEBOOK` prefix (`NOTEBOOK__ACTOR_BUFFER=64`)
//!
//! The low-stock threshold is a fixed business rule
//! ([`LOW_STOCK_THRESHOLD`](crate::model::LOW_STOCK_THRESHOLD)) and is not configurable.

use config::{ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct InventoryConfig {
    /// Channel capacity of every resource actor, at least 1
    pub actor_buffer: usize,

    /// Group material whose children are the interchangeable ring colours
    pub ring_group_id: String,

    /// Start the stores with the demo catalog and ledger
    pub seed_demo_data: bool,
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            actor_buffer: 32,
            ring_group_id: "transparent-ring".to_string(),
            seed_demo_data: true,
        }
    }
}

impl InventoryConfig {
    /// Load configuration from the optional file and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config/inventory")
    }

    /// Same as [`InventoryConfig::load`] with another file stem.
    pub fn load_from(file_stem: &str) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let config = config::Config::builder()
            .set_default("actor_buffer", defaults.actor_buffer as i64)?
            .set_default("ring_group_id", defaults.ring_group_id)?
            .set_default("seed_demo_data", defaults.seed_demo_data)?
            .add_source(File::with_name(file_stem).required(false))
            .add_source(
                Environment::with_prefix("NOTEBOOK")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Self = config.try_deserialize()?;
        if config.actor_buffer == 0 {
            return Err(ConfigError::Message("actor_buffer must be at least 1".to_string()));
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = InventoryConfig::load_from("config/does-not-exist").unwrap();
        assert_eq!(config.ring_group_id, "transparent-ring");
        assert!(config.seed_demo_data);
        assert!(config.actor_buffer > 0);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("notebook-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("inventory.toml");
        std::fs::write(&path, "seed_demo_data = false\nring_group_id = \"metal-ring\"\n").unwrap();

        let stem = dir.join("inventory");
        let config = InventoryConfig::load_from(stem.to_str().unwrap()).unwrap();
        assert!(!config.seed_demo_data);
        assert_eq!(config.ring_group_id, "metal-ring");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_zero_actor_buffer_is_rejected() {
        let dir = std::env::temp_dir().join(format!("notebook-zero-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("inventory.toml"), "actor_buffer = 0\n").unwrap();

        let stem = dir.join("inventory");
        let err = InventoryConfig::load_from(stem.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, ConfigError::Message(_)));
        assert!(err.to_string().contains("actor_buffer"));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
