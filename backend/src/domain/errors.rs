use crate::storage::traits::{StoreError, StoreId};

/// Errors returned by ledger operations
///
/// Every variant is recoverable: the operation that raised it has left both
/// stores as they were (except the documented receipt case) and the caller
/// may carry on.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A required field was missing or blank
    #[error("{0}")]
    Validation(String),

    #[error("Donor '{0}' already exists!")]
    Duplicate(String),

    #[error("No donor found with name '{0}'.")]
    NotFound(String),

    #[error("'{0}' is not a valid amount.")]
    InvalidAmount(String),

    #[error("The {store} file is damaged and could not be read: {reason}")]
    CorruptStore { store: StoreId, reason: String },

    #[error("Storage failure: {0}")]
    Storage(String),
}

impl From<StoreError> for LedgerError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::Corrupt { store, source } => LedgerError::CorruptStore {
                store,
                reason: source.to_string(),
            },
            other => LedgerError::Storage(other.to_string()),
        }
    }
}
