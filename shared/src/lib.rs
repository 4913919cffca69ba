use serde::{Deserialize, Serialize};

/// One row of the "View Donors" table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorSummaryRow {
    pub name: String,
    pub contact: String,
    /// Currency-prefixed total with two decimals, e.g. "₹100.50"
    pub total_donated: String,
}

/// Aggregate figures over every recorded donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationReport {
    pub donation_count: usize,
    pub total: String,
    pub average: String,
    /// Donor name of the largest donation (first one wins on ties)
    pub top_donor: String,
    pub top_amount: String,
}

/// Response after adding a donor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddDonorResponse {
    pub name: String,
    pub contact: String,
    pub success_message: String,
}

/// Response after recording a donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordDonationResponse {
    pub donor_name: String,
    pub formatted_amount: String,
    /// Date text as stored in the donations file
    pub date: String,
    pub receipt_path: String,
    pub success_message: String,
}

/// Response after a destructive operation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// False when the user declined the confirmation prompt
    pub deleted: bool,
    pub donors_removed: usize,
    pub donations_removed: usize,
    pub message: Option<String>,
}

/// Format an amount as a currency string with two decimals
///
/// Negative zero prints as zero.
pub fn format_currency(symbol: &str, amount: f64) -> String {
    let amount = if amount == 0.0 { 0.0 } else { amount };
    format!("{}{:.2}", symbol, amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency("₹", 100.5), "₹100.50");
        assert_eq!(format_currency("$", 0.0), "$0.00");
        assert_eq!(format_currency("₹", -12.5), "₹-12.50");
        assert_eq!(format_currency("₹", -0.0), "₹0.00");
        assert_eq!(format_currency("₹", [0.0f64; 0].iter().sum::<f64>()), "₹0.00");
    }

    #[test]
    fn test_summary_row_serialization() {
        let row = DonorSummaryRow {
            name: "Alice".to_string(),
            contact: "555-1234".to_string(),
            total_donated: "₹10.00".to_string(),
        };

        let json = serde_json::to_string(&row).unwrap();
        let parsed: DonorSummaryRow = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, row);
    }
}
