//! Ledger configuration model.
use anyhow::{anyhow, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};

/// User-tunable settings, persisted as `ledger_config.yaml` in the data directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Prefix for every formatted amount
    pub currency_symbol: String,
    /// Offset of the civil time zone donations are stamped in
    pub utc_offset_minutes: i32,
    /// Abbreviation appended to stored donation dates
    pub zone_abbreviation: String,
    /// Receipts folder, relative to the data directory
    pub receipts_directory: String,
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "₹".to_string(),
            utc_offset_minutes: 5 * 60 + 30,
            zone_abbreviation: "IST".to_string(),
            receipts_directory: "receipts".to_string(),
        }
    }
}

impl LedgerConfig {
    /// The configured time zone as a chrono offset
    pub fn zone(&self) -> Result<FixedOffset> {
        self.utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                anyhow!(
                    "UTC offset of {} minutes is out of range",
                    self.utc_offset_minutes
                )
            })
    }
}
