//! # Storage Traits
//!
//! This module defines the storage port the ledger is written against, so the
//! JSON files used by the desktop app and the in-memory store used by tests
//! can be swapped without touching domain code.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The named record collections the ledger persists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StoreId {
    Donors,
    Donations,
}

impl StoreId {
    /// File name of the store inside the data directory
    pub fn file_name(&self) -> &'static str {
        match self {
            StoreId::Donors => "donors.json",
            StoreId::Donations => "donations.json",
        }
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreId::Donors => write!(f, "donors"),
            StoreId::Donations => write!(f, "donations"),
        }
    }
}

/// Failures raised at the storage seam
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store exists but is not a sequence of the expected records
    #[error("the {store} store could not be parsed: {source}")]
    Corrupt {
        store: StoreId,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode the {store} store: {source}")]
    Encode {
        store: StoreId,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O failure on {target}: {source}")]
    Io {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

/// Trait defining the storage operations the donation ledger needs
///
/// Stores are whole documents: every load returns the full sequence and
/// every save replaces it. A store that was never created, or was removed,
/// loads as an empty sequence.
pub trait LedgerStorage: Send + Sync {
    /// Load every record of a store
    fn load_records<T: DeserializeOwned>(&self, store: StoreId) -> Result<Vec<T>, StoreError>;

    /// Replace the full content of a store
    fn save_records<T: Serialize>(&self, store: StoreId, records: &[T]) -> Result<(), StoreError>;

    /// Remove a store entirely. Removing an absent store is not an error.
    fn remove_store(&self, store: StoreId) -> Result<(), StoreError>;

    /// Write a receipt file, returning where it was written.
    /// An existing receipt with the same name is overwritten.
    fn write_receipt(&self, file_name: &str, contents: &str) -> Result<PathBuf, StoreError>;
}
