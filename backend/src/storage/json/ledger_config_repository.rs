//! # Ledger Config Repository
//!
//! Stores the [`LedgerConfig`] as a single YAML file `ledger_config.yaml` at
//! the root of the data directory.
//!
//! ```text
//! data/
//! ├── ledger_config.yaml    ← This module manages this file
//! ├── donors.json
//! ├── donations.json
//! └── receipts/
//! ```
//!
//! ## YAML Format
//!
//! ```yaml
//! currency_symbol: ₹
//! utc_offset_minutes: 330
//! zone_abbreviation: IST
//! receipts_directory: receipts
//! ```

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::path::PathBuf;

use super::connection::JsonConnection;
use crate::domain::models::LedgerConfig;

const CONFIG_FILE_NAME: &str = "ledger_config.yaml";

/// File-based repository for the ledger configuration
#[derive(Debug, Clone)]
pub struct LedgerConfigRepository {
    connection: JsonConnection,
}

impl LedgerConfigRepository {
    pub fn new(connection: JsonConnection) -> Self {
        Self { connection }
    }

    fn config_path(&self) -> PathBuf {
        self.connection.base_directory().join(CONFIG_FILE_NAME)
    }

    /// Load the configuration, writing the defaults first if no file exists
    pub fn get_config(&self) -> Result<LedgerConfig> {
        let config_path = self.config_path();

        if !config_path.exists() {
            let config = LedgerConfig::default();
            self.save_config(&config)?;
            info!("Created default ledger config at {:?}", config_path);
            return Ok(config);
        }

        let yaml_content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: LedgerConfig = serde_yaml::from_str(&yaml_content)
            .with_context(|| format!("Invalid ledger config in {}", config_path.display()))?;
        config
            .zone()
            .with_context(|| format!("Invalid time zone in {}", config_path.display()))?;

        debug!("Loaded ledger config from {:?}", config_path);
        Ok(config)
    }

    /// Save the configuration
    pub fn save_config(&self, config: &LedgerConfig) -> Result<()> {
        config.zone()?;

        let config_path = self.config_path();
        let yaml_content = serde_yaml::to_string(config)?;

        // Use atomic write pattern: write to temp file, then rename
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved ledger config to {:?}", config_path);
        Ok(())
    }
}
