//! Conversions from ledger results to the DTOs in the `shared` crate.

use shared::{format_currency, AddDonorResponse, DeleteResponse, RecordDonationResponse};

use crate::domain::commands::{AddDonorResult, DeleteOutcome, RecordDonationResult};

pub struct DonorMapper;

impl DonorMapper {
    pub fn to_response(result: AddDonorResult) -> AddDonorResponse {
        AddDonorResponse {
            success_message: format!("Donor '{}' added successfully!", result.donor.name),
            name: result.donor.name,
            contact: result.donor.contact,
        }
    }
}

pub struct DonationMapper;

impl DonationMapper {
    pub fn to_response(result: RecordDonationResult, currency_symbol: &str) -> RecordDonationResponse {
        let formatted_amount = format_currency(currency_symbol, result.donation.amount);
        let receipt_path = result.receipt_path.display().to_string();
        RecordDonationResponse {
            success_message: format!(
                "{} recorded for {}\nReceipt saved:\n{}",
                formatted_amount, result.donation.donor_name, receipt_path
            ),
            donor_name: result.donation.donor_name,
            formatted_amount,
            date: result.donation.date,
            receipt_path,
        }
    }
}

pub struct DeleteMapper;

impl DeleteMapper {
    /// `message` is used only when something was actually deleted
    pub fn to_response(outcome: DeleteOutcome, message: String) -> DeleteResponse {
        match outcome {
            DeleteOutcome::Deleted {
                donors_removed,
                donations_removed,
            } => DeleteResponse {
                deleted: true,
                donors_removed,
                donations_removed,
                message: Some(message),
            },
            DeleteOutcome::Cleared => DeleteResponse {
                deleted: true,
                donors_removed: 0,
                donations_removed: 0,
                message: Some(message),
            },
            DeleteOutcome::Cancelled => DeleteResponse {
                deleted: false,
                donors_removed: 0,
                donations_removed: 0,
                message: None,
            },
        }
    }
}
