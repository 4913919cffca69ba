use anyhow::{Context, Result};
use log::{debug, error, info, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::codec::{decode_records, encode_records};
use crate::storage::traits::{LedgerStorage, StoreError, StoreId};

const DEFAULT_DIRECTORY_NAME: &str = "Charity Tracker";
const REDIRECT_FILE_NAME: &str = ".charity_redirect";
const DEFAULT_RECEIPTS_DIRECTORY: &str = "receipts";

/// JsonConnection manages the data directory holding the JSON stores and receipts
#[derive(Debug, Clone)]
pub struct JsonConnection {
    base_directory: PathBuf,
    receipts_directory: PathBuf,
}

impl JsonConnection {
    /// Create a new JSON connection with a base directory
    pub fn new<P: AsRef<Path>>(base_directory: P) -> Result<Self> {
        let base_path = base_directory.as_ref().to_path_buf();

        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .with_context(|| format!("Failed to create data directory {}", base_path.display()))?;
            info!("Created data directory: {}", base_path.display());
        }

        Ok(Self {
            receipts_directory: base_path.join(DEFAULT_RECEIPTS_DIRECTORY),
            base_directory: base_path,
        })
    }

    /// Resolve the data directory: `~/Documents/Charity Tracker`, unless a
    /// redirect file there points at another existing directory
    pub fn default_data_directory() -> Result<PathBuf> {
        let documents_dir = dirs::document_dir()
            .or_else(dirs::home_dir)
            .context("Could not determine home directory")?;
        let default_data_dir = documents_dir.join(DEFAULT_DIRECTORY_NAME);

        let redirect_file = default_data_dir.join(REDIRECT_FILE_NAME);
        if !redirect_file.exists() {
            info!("No redirect file found, using default data directory: {}", default_data_dir.display());
            return Ok(default_data_dir);
        }

        match fs::read_to_string(&redirect_file) {
            Ok(redirected_path) => {
                let path = PathBuf::from(redirected_path.trim());
                if path.is_dir() {
                    info!("Found redirect file, using data directory: {}", path.display());
                    Ok(path)
                } else {
                    warn!(
                        "Redirect file points to non-existent directory: {}. Using default.",
                        path.display()
                    );
                    Ok(default_data_dir)
                }
            }
            Err(e) => {
                error!("Failed to read redirect file: {}. Using default directory.", e);
                Ok(default_data_dir)
            }
        }
    }

    /// Place receipts in a different folder, relative to the base directory
    pub fn with_receipts_directory<P: AsRef<Path>>(mut self, receipts_directory: P) -> Self {
        self.receipts_directory = self.base_directory.join(receipts_directory);
        self
    }

    /// Get the base directory path
    pub fn base_directory(&self) -> &Path {
        &self.base_directory
    }

    /// Get the receipts directory path
    pub fn receipts_directory(&self) -> &Path {
        &self.receipts_directory
    }

    /// Get the file path backing a store
    pub fn store_path(&self, store: StoreId) -> PathBuf {
        self.base_directory.join(store.file_name())
    }

    fn io_error(path: &Path, source: io::Error) -> StoreError {
        StoreError::Io {
            target: path.display().to_string(),
            source,
        }
    }

    /// Write a file by renaming a fully written sibling over it
    fn write_atomically(path: &Path, contents: &[u8]) -> Result<(), StoreError> {
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, contents).map_err(|e| Self::io_error(&temp_path, e))?;
        fs::rename(&temp_path, path).map_err(|e| Self::io_error(path, e))
    }
}

impl LedgerStorage for JsonConnection {
    fn load_records<T: DeserializeOwned>(&self, store: StoreId) -> Result<Vec<T>, StoreError> {
        let path = self.store_path(store);
        let bytes = match fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("Store file {} doesn't exist, returning empty list", path.display());
                return Ok(Vec::new());
            }
            Err(e) => return Err(Self::io_error(&path, e)),
        };

        let records = decode_records(store, &bytes)?;
        debug!("Loaded {} records from {}", records.len(), path.display());
        Ok(records)
    }

    fn save_records<T: Serialize>(&self, store: StoreId, records: &[T]) -> Result<(), StoreError> {
        let path = self.store_path(store);
        let bytes = encode_records(store, records)?;

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory).map_err(|e| Self::io_error(&self.base_directory, e))?;
        }

        Self::write_atomically(&path, &bytes)?;
        debug!("Saved {} records to {}", records.len(), path.display());
        Ok(())
    }

    fn remove_store(&self, store: StoreId) -> Result<(), StoreError> {
        let path = self.store_path(store);
        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed store file {}", path.display());
                Ok(())
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(Self::io_error(&path, e)),
        }
    }

    fn write_receipt(&self, file_name: &str, contents: &str) -> Result<PathBuf, StoreError> {
        if !self.receipts_directory.exists() {
            fs::create_dir_all(&self.receipts_directory)
                .map_err(|e| Self::io_error(&self.receipts_directory, e))?;
            info!("Created receipts directory: {}", self.receipts_directory.display());
        }

        let path = self.receipts_directory.join(file_name);
        fs::write(&path, contents).map_err(|e| Self::io_error(&path, e))?;
        Ok(path)
    }
}
