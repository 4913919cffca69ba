//! Domain-level command and result types
//! These structs are used by the ledger and are **not** exposed to the UI
//! directly. The io layer maps them to the DTOs in the `shared` crate.

use std::path::PathBuf;

use super::models::{Donation, Donor};

/// Input for adding a donor, as typed into the form.
#[derive(Debug, Clone)]
pub struct AddDonorCommand {
    pub name: String,
    pub contact: String,
}

/// Result of adding a donor.
#[derive(Debug, Clone)]
pub struct AddDonorResult {
    pub donor: Donor,
}

/// Input for recording a donation. The amount is raw text and is parsed by the ledger.
#[derive(Debug, Clone)]
pub struct RecordDonationCommand {
    pub donor_name: String,
    pub amount: String,
}

/// Result of recording a donation.
#[derive(Debug, Clone)]
pub struct RecordDonationResult {
    pub donation: Donation,
    pub receipt_path: PathBuf,
}

/// Per-donor totals, in donor insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct DonorTotal {
    pub donor: Donor,
    pub total: f64,
}

/// Aggregates over all donations.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportSummary {
    pub donation_count: usize,
    pub total: f64,
    pub average: f64,
    pub top: Donation,
}

/// What a destructive operation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted {
        donors_removed: usize,
        donations_removed: usize,
    },
    /// Both stores were removed outright
    Cleared,
    /// The user declined the confirmation prompt
    Cancelled,
}

/// Blocking yes/no question asked before destructive operations.
pub trait Confirmation {
    fn confirm(&self, prompt: &str) -> bool;
}

impl<F: Fn(&str) -> bool> Confirmation for F {
    fn confirm(&self, prompt: &str) -> bool {
        self(prompt)
    }
}
