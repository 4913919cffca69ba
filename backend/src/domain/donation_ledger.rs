//! Donation ledger: donor and donation bookkeeping plus reporting.
//!
//! Every operation loads the stores it needs in full, validates its input
//! before touching anything, and writes whole stores back. There is no
//! transaction spanning the donors and donations stores.

use anyhow::Result as AnyResult;
use chrono::FixedOffset;
use log::{debug, error, info, warn};
use std::sync::Arc;

use shared::{format_currency, DonationReport, DonorSummaryRow};

use super::clock::{Clock, SystemClock};
use super::commands::{
    AddDonorCommand, AddDonorResult, Confirmation, DeleteOutcome, DonorTotal,
    RecordDonationCommand, RecordDonationResult, ReportSummary,
};
use super::errors::LedgerError;
use super::models::{Donation, Donor, LedgerConfig};
use super::receipt::Receipt;
use crate::storage::traits::{LedgerStorage, StoreId};

pub struct DonationLedger<S: LedgerStorage> {
    storage: Arc<S>,
    config: LedgerConfig,
    zone: FixedOffset,
    clock: Arc<dyn Clock>,
}

impl<S: LedgerStorage> DonationLedger<S> {
    /// Create a ledger stamping donations with the wall clock
    pub fn new(storage: Arc<S>, config: LedgerConfig) -> AnyResult<Self> {
        Self::with_clock(storage, config, Arc::new(SystemClock))
    }

    pub fn with_clock(storage: Arc<S>, config: LedgerConfig, clock: Arc<dyn Clock>) -> AnyResult<Self> {
        let zone = config.zone()?;
        Ok(Self {
            storage,
            config,
            zone,
            clock,
        })
    }

    pub fn config(&self) -> &LedgerConfig {
        &self.config
    }

    fn load_donors(&self) -> Result<Vec<Donor>, LedgerError> {
        Ok(self.storage.load_records(StoreId::Donors)?)
    }

    fn load_donations(&self) -> Result<Vec<Donation>, LedgerError> {
        Ok(self.storage.load_records(StoreId::Donations)?)
    }

    fn format_amount(&self, amount: f64) -> String {
        format_currency(&self.config.currency_symbol, amount)
    }

    /// Add a new donor
    pub fn add_donor(&self, command: AddDonorCommand) -> Result<AddDonorResult, LedgerError> {
        let donor = Donor::new(&command.name, &command.contact);
        info!("Adding donor: {}", donor.name);

        if donor.name.is_empty() || donor.contact.is_empty() {
            warn!("Rejected donor with missing name or contact");
            return Err(LedgerError::Validation(
                "Both name and contact are required!".to_string(),
            ));
        }

        let mut donors = self.load_donors()?;
        if donors.iter().any(|existing| existing.matches(&donor.name)) {
            warn!("Donor already exists: {}", donor.name);
            return Err(LedgerError::Duplicate(donor.name));
        }

        donors.push(donor.clone());
        self.storage.save_records(StoreId::Donors, &donors)?;

        info!("Added donor: {} ({} donors total)", donor.name, donors.len());
        Ok(AddDonorResult { donor })
    }

    /// Record a donation for an existing donor and write its receipt
    ///
    /// The donation keeps the donor name as typed. If the receipt cannot be
    /// written the donation stays recorded and a storage error is returned.
    pub fn record_donation(&self, command: RecordDonationCommand) -> Result<RecordDonationResult, LedgerError> {
        info!("Recording donation for {}: {}", command.donor_name, command.amount);

        let donors = self.load_donors()?;
        if !donors.iter().any(|donor| donor.matches(&command.donor_name)) {
            warn!("Donation for unknown donor: {}", command.donor_name);
            return Err(LedgerError::NotFound(command.donor_name.trim().to_string()));
        }

        let amount = parse_amount(&command.amount)?;

        let mut donations = self.load_donations()?;
        let running_total = donations.iter().fold(amount, |total, donation| total + donation.amount);
        if !running_total.is_finite() {
            warn!("Rejected amount {} for {}: total would overflow", amount, command.donor_name);
            return Err(LedgerError::InvalidAmount(command.amount.trim().to_string()));
        }

        let recorded_at = self.clock.now().with_timezone(&self.zone);
        let donation = Donation {
            donor_name: command.donor_name,
            amount,
            date: format!(
                "{} {}",
                recorded_at.format("%Y-%m-%d %H:%M:%S"),
                self.config.zone_abbreviation
            ),
        };

        donations.push(donation.clone());
        self.storage.save_records(StoreId::Donations, &donations)?;

        let receipt = Receipt::render(&donation, &recorded_at, &self.config.currency_symbol);
        let receipt_path = self
            .storage
            .write_receipt(&receipt.file_name, &receipt.contents)
            .map_err(|e| {
                error!("Donation recorded but receipt {} failed: {}", receipt.file_name, e);
                LedgerError::from(e)
            })?;

        info!("Recorded {} for {}, receipt at {}", amount, donation.donor_name, receipt_path.display());
        Ok(RecordDonationResult {
            donation,
            receipt_path,
        })
    }

    /// Total donated per donor, in donor insertion order
    pub fn donor_totals(&self) -> Result<Vec<DonorTotal>, LedgerError> {
        let donors = self.load_donors()?;
        let donations = self.load_donations()?;

        let totals = donors
            .into_iter()
            .map(|donor| {
                let total = donations
                    .iter()
                    .filter(|donation| donation.is_from(&donor.name))
                    .fold(0.0, |total, donation| total + donation.amount);
                DonorTotal { donor, total }
            })
            .collect::<Vec<_>>();

        debug!("Computed totals for {} donors", totals.len());
        Ok(totals)
    }

    /// Rows for the donor list: name, contact and formatted total
    pub fn get_donor_summary(&self) -> Result<Vec<DonorSummaryRow>, LedgerError> {
        Ok(self
            .donor_totals()?
            .into_iter()
            .map(|row| DonorSummaryRow {
                total_donated: self.format_amount(row.total),
                name: row.donor.name,
                contact: row.donor.contact,
            })
            .collect())
    }

    /// Aggregates over every donation, `None` when nothing was recorded yet
    pub fn report_summary(&self) -> Result<Option<ReportSummary>, LedgerError> {
        let donations = self.load_donations()?;
        let Some(first) = donations.first() else {
            info!("No donations available for report");
            return Ok(None);
        };

        let total = donations.iter().fold(0.0, |total, donation| total + donation.amount);
        let average = total / donations.len() as f64;
        // Strict comparison keeps the earliest donation on ties
        let top = donations
            .iter()
            .skip(1)
            .fold(first, |top, donation| if donation.amount > top.amount { donation } else { top });

        Ok(Some(ReportSummary {
            donation_count: donations.len(),
            total,
            average,
            top: top.clone(),
        }))
    }

    /// Formatted report for display
    pub fn generate_report(&self) -> Result<Option<DonationReport>, LedgerError> {
        let Some(summary) = self.report_summary()? else {
            return Ok(None);
        };

        info!(
            "Report: {} donations, total {:.2}, average {:.2}",
            summary.donation_count, summary.total, summary.average
        );
        Ok(Some(DonationReport {
            donation_count: summary.donation_count,
            total: self.format_amount(summary.total),
            average: self.format_amount(summary.average),
            top_amount: self.format_amount(summary.top.amount),
            top_donor: summary.top.donor_name,
        }))
    }

    /// Delete a donor and every donation recorded under their name
    pub fn delete_donor(&self, name: &str, confirmation: &dyn Confirmation) -> Result<DeleteOutcome, LedgerError> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Rejected delete with empty donor name");
            return Err(LedgerError::Validation("Please enter a donor name!".to_string()));
        }

        let mut donors = self.load_donors()?;
        let mut donations = self.load_donations()?;

        if !donors.iter().any(|donor| donor.matches(name)) {
            warn!("Delete requested for unknown donor: {}", name);
            return Err(LedgerError::NotFound(name.to_string()));
        }

        if !confirmation.confirm(&format!("Delete donor '{}' and their donations?", name)) {
            info!("Delete of donor {} cancelled", name);
            return Ok(DeleteOutcome::Cancelled);
        }

        let donors_before = donors.len();
        let donations_before = donations.len();
        donors.retain(|donor| !donor.matches(name));
        donations.retain(|donation| !donation.is_from(name));

        self.storage.save_records(StoreId::Donors, &donors)?;
        self.storage.save_records(StoreId::Donations, &donations)?;

        let donors_removed = donors_before - donors.len();
        let donations_removed = donations_before - donations.len();
        info!(
            "Deleted donor {}: {} donor records, {} donations",
            name, donors_removed, donations_removed
        );
        Ok(DeleteOutcome::Deleted {
            donors_removed,
            donations_removed,
        })
    }

    /// Remove both stores. Receipts are kept.
    pub fn delete_all_data(&self, confirmation: &dyn Confirmation) -> Result<DeleteOutcome, LedgerError> {
        if !confirmation.confirm("Delete ALL donors and donations?") {
            info!("Delete of all data cancelled");
            return Ok(DeleteOutcome::Cancelled);
        }

        self.storage.remove_store(StoreId::Donors)?;
        self.storage.remove_store(StoreId::Donations)?;

        info!("Deleted all donors and donations");
        Ok(DeleteOutcome::Cleared)
    }
}

/// Parse a typed amount. Any finite number is accepted, including zero and negatives.
/// `-0` is stored as `0`.
fn parse_amount(text: &str) -> Result<f64, LedgerError> {
    match text.trim().parse::<f64>() {
        Ok(amount) if amount == 0.0 => Ok(0.0),
        Ok(amount) if amount.is_finite() => Ok(amount),
        _ => {
            warn!("Rejected amount: {:?}", text);
            Err(LedgerError::InvalidAmount(text.trim().to_string()))
        }
    }
}
