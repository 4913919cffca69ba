//! Receipt rendering.
//!
//! A receipt is written once per donation and never read back. Its file name
//! and its date line come from the same instant as the stored donation.

use chrono::{DateTime, FixedOffset};

use super::models::Donation;

#[derive(Debug, Clone, PartialEq)]
pub struct Receipt {
    pub file_name: String,
    pub contents: String,
}

impl Receipt {
    pub fn render(donation: &Donation, recorded_at: &DateTime<FixedOffset>, currency_symbol: &str) -> Self {
        Self {
            file_name: receipt_file_name(&donation.donor_name, recorded_at),
            contents: format!(
                "\n=== Charity Donation Receipt ===\n\
                 Donor Name : {}\n\
                 Amount     : {}\n\
                 Date       : {}\n\
                 -------------------------------\n\
                 Thank you for your generous donation!\n",
                donation.donor_name,
                shared::format_currency(currency_symbol, donation.amount),
                donation.date,
            ),
        }
    }
}

/// Longest donor name part, in characters, kept in a receipt file name
const MAX_NAME_CHARS: usize = 48;

/// `receipt_<donor>_<yyyyMMddHHmmss>.txt`
///
/// Characters other than letters, digits, `-` and `.` become underscores and
/// the donor part is cut to `MAX_NAME_CHARS`.
pub fn receipt_file_name(donor_name: &str, recorded_at: &DateTime<FixedOffset>) -> String {
    let safe_name: String = donor_name
        .chars()
        .take(MAX_NAME_CHARS)
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '.' { c } else { '_' })
        .collect();

    format!("receipt_{}_{}.txt", safe_name, recorded_at.format("%Y%m%d%H%M%S"))
}
