//! In-memory storage used to exercise the ledger without touching the disk.
//!
//! Stores are kept as encoded JSON blobs and go through the same codec as the
//! file-backed connection, so parse failures behave identically.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, MutexGuard};

use super::json::codec::{decode_records, encode_records};
use super::traits::{LedgerStorage, StoreError, StoreId};

#[derive(Debug, Default)]
pub struct MemoryConnection {
    stores: Mutex<HashMap<StoreId, Vec<u8>>>,
    receipts: Mutex<BTreeMap<String, String>>,
    fail_receipts: AtomicBool,
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

impl MemoryConnection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace a store with raw text, bypassing the codec
    pub fn insert_raw(&self, store: StoreId, contents: &str) {
        lock(&self.stores).insert(store, contents.as_bytes().to_vec());
    }

    /// Raw text of a store, if it exists
    pub fn raw(&self, store: StoreId) -> Option<String> {
        lock(&self.stores)
            .get(&store)
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    pub fn contains_store(&self, store: StoreId) -> bool {
        lock(&self.stores).contains_key(&store)
    }

    /// Receipts written so far, keyed by file name
    pub fn receipts(&self) -> BTreeMap<String, String> {
        lock(&self.receipts).clone()
    }

    /// Make every subsequent receipt write fail
    pub fn set_fail_receipts(&self, fail: bool) {
        self.fail_receipts.store(fail, Ordering::SeqCst);
    }
}

impl LedgerStorage for MemoryConnection {
    fn load_records<T: DeserializeOwned>(&self, store: StoreId) -> Result<Vec<T>, StoreError> {
        match lock(&self.stores).get(&store) {
            Some(bytes) => decode_records(store, bytes),
            None => Ok(Vec::new()),
        }
    }

    fn save_records<T: Serialize>(&self, store: StoreId, records: &[T]) -> Result<(), StoreError> {
        let bytes = encode_records(store, records)?;
        lock(&self.stores).insert(store, bytes);
        Ok(())
    }

    fn remove_store(&self, store: StoreId) -> Result<(), StoreError> {
        lock(&self.stores).remove(&store);
        Ok(())
    }

    fn write_receipt(&self, file_name: &str, contents: &str) -> Result<PathBuf, StoreError> {
        if self.fail_receipts.load(Ordering::SeqCst) {
            return Err(StoreError::Io {
                target: file_name.to_string(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "receipts are read-only"),
            });
        }

        lock(&self.receipts).insert(file_name.to_string(), contents.to_string());
        Ok(PathBuf::from("receipts").join(file_name))
    }
}
