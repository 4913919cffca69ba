//! Domain model for a donor.
use serde::{Deserialize, Serialize};

/// A donor as persisted in the donors store.
///
/// The name is the identity: two donors whose names are equal after trimming
/// and lowercasing are the same donor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    pub name: String,
    pub contact: String,
}

impl Donor {
    /// Build a donor from raw form input, trimming both fields.
    pub fn new(name: &str, contact: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            contact: contact.trim().to_string(),
        }
    }

    /// Whether `name` refers to this donor.
    pub fn matches(&self, name: &str) -> bool {
        name_key(&self.name) == name_key(name)
    }
}

/// Normalized lookup key for donor names.
pub fn name_key(name: &str) -> String {
    name.trim().to_lowercase()
}
