//! Domain model for a donation.
use serde::{Deserialize, Serialize};

use super::donor::name_key;

/// A single donation as persisted in the donations store.
///
/// Donations are immutable once written. `donor_name` keeps the name exactly
/// as it was typed when recording, which may differ in case or padding from
/// the stored donor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    #[serde(rename = "name")]
    pub donor_name: String,
    pub amount: f64,
    /// Human-readable timestamp, e.g. "2024-03-01 18:45:10 IST". Never re-parsed.
    pub date: String,
}

impl Donation {
    /// Whether this donation belongs to the donor called `donor_name`.
    pub fn is_from(&self, donor_name: &str) -> bool {
        name_key(&self.donor_name) == name_key(donor_name)
    }
}
