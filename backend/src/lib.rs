//! # Charity Tracker Backend
//!
//! All non-UI logic for the charity donation tracker.
//!
//! ## Architecture
//!
//! ```text
//! UI Layer (terminal, or any Presenter implementation)
//!     ↓
//! IO Layer (LedgerController, DTO mappers)
//!     ↓
//! Domain Layer (DonationLedger, models, receipts)
//!     ↓
//! Storage Layer (JSON files, in-memory store)
//! ```

use anyhow::{Context, Result};
use log::info;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub mod domain;
pub mod io;
pub mod storage;

use domain::DonationLedger;
use domain::models::LedgerConfig;
use storage::{JsonConnection, LedgerConfigRepository};

/// Everything the application needs, wired to the JSON files of one data directory
pub struct Backend {
    pub ledger: DonationLedger<JsonConnection>,
    pub data_directory: PathBuf,
}

impl Backend {
    /// Open the default data directory
    pub fn new() -> Result<Self> {
        let data_directory = JsonConnection::default_data_directory()?;
        Self::open(data_directory)
    }

    /// Open a specific data directory, creating it and its configuration if needed
    pub fn open<P: AsRef<Path>>(data_directory: P) -> Result<Self> {
        let data_directory = data_directory.as_ref().to_path_buf();
        info!("Opening data directory {}", data_directory.display());

        let connection = JsonConnection::new(&data_directory)?;
        let config: LedgerConfig = LedgerConfigRepository::new(connection.clone())
            .get_config()
            .context("Failed to load ledger configuration")?;
        let connection = connection.with_receipts_directory(&config.receipts_directory);

        let ledger = DonationLedger::new(Arc::new(connection), config)?;
        Ok(Self {
            ledger,
            data_directory,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::commands::{AddDonorCommand, DeleteOutcome, RecordDonationCommand};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_backend_round_trip_on_disk() {
        let temp_dir = TempDir::new().unwrap();
        let backend = Backend::open(temp_dir.path()).unwrap();

        backend
            .ledger
            .add_donor(AddDonorCommand {
                name: "Alice".to_string(),
                contact: "555-1234".to_string(),
            })
            .unwrap();
        let result = backend
            .ledger
            .record_donation(RecordDonationCommand {
                donor_name: "Alice".to_string(),
                amount: "100.50".to_string(),
            })
            .unwrap();

        assert!(temp_dir.path().join("ledger_config.yaml").exists());
        assert!(temp_dir.path().join("donors.json").exists());
        assert!(result.receipt_path.starts_with(temp_dir.path().join("receipts")));
        let receipt = fs::read_to_string(&result.receipt_path).unwrap();
        assert!(receipt.contains("Donor Name : Alice"));

        // A second backend on the same directory sees the same data
        let reopened = Backend::open(temp_dir.path()).unwrap();
        let summary = reopened.ledger.get_donor_summary().unwrap();
        assert_eq!(summary[0].total_donated, "₹100.50");

        let outcome = reopened.ledger.delete_all_data(&|_: &str| true).unwrap();
        assert_eq!(outcome, DeleteOutcome::Cleared);
        assert!(!temp_dir.path().join("donors.json").exists());
        assert!(!temp_dir.path().join("donations.json").exists());
        assert!(reopened.ledger.get_donor_summary().unwrap().is_empty());
    }

    #[test]
    fn test_backend_uses_configured_receipts_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("ledger_config.yaml"),
            "receipts_directory: slips\n",
        )
        .unwrap();
        let backend = Backend::open(temp_dir.path()).unwrap();

        backend
            .ledger
            .add_donor(AddDonorCommand {
                name: "Bob".to_string(),
                contact: "b@example.com".to_string(),
            })
            .unwrap();
        let result = backend
            .ledger
            .record_donation(RecordDonationCommand {
                donor_name: "Bob".to_string(),
                amount: "5".to_string(),
            })
            .unwrap();

        assert!(result.receipt_path.starts_with(temp_dir.path().join("slips")));
    }
}
