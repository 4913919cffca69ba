//! Presentation-facing entry points.
//!
//! Each action runs one ledger operation and reports the outcome through the
//! [`Presenter`]. Errors never escape: they become warnings and the action
//! returns `None`, leaving the application running.

use log::{error, info};

use shared::{AddDonorResponse, DeleteResponse, DonationReport, DonorSummaryRow, RecordDonationResponse};

use super::mappers::{DeleteMapper, DonationMapper, DonorMapper};
use super::presenter::Presenter;
use crate::domain::commands::{AddDonorCommand, RecordDonationCommand};
use crate::domain::{DonationLedger, LedgerError};
use crate::storage::traits::LedgerStorage;

pub struct LedgerController<S: LedgerStorage, P: Presenter> {
    ledger: DonationLedger<S>,
    presenter: P,
}

/// Dialog title for each error class
pub fn error_title(error: &LedgerError) -> &'static str {
    match error {
        LedgerError::Validation(_) => "Input Error",
        LedgerError::Duplicate(_) => "Duplicate",
        LedgerError::NotFound(_) => "Not Found",
        LedgerError::InvalidAmount(_) => "Invalid Input",
        LedgerError::CorruptStore { .. } => "Corrupt Data",
        LedgerError::Storage(_) => "Storage Error",
    }
}

impl<S: LedgerStorage, P: Presenter> LedgerController<S, P> {
    pub fn new(ledger: DonationLedger<S>, presenter: P) -> Self {
        Self { ledger, presenter }
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    fn report_error(&self, error: &LedgerError) {
        self.report_error_with(error, &error.to_string());
    }

    /// Log the error and warn with a message other than its own text
    fn report_error_with(&self, error: &LedgerError, message: &str) {
        match error {
            LedgerError::CorruptStore { .. } | LedgerError::Storage(_) => {
                error!("Operation failed: {}", error)
            }
            _ => info!("Operation rejected: {}", error),
        }
        self.presenter.warn(error_title(error), message);
    }

    pub fn add_donor(&self, name: &str, contact: &str) -> Option<AddDonorResponse> {
        let command = AddDonorCommand {
            name: name.to_string(),
            contact: contact.to_string(),
        };

        match self.ledger.add_donor(command) {
            Ok(result) => {
                let response = DonorMapper::to_response(result);
                self.presenter.notify("Success", &response.success_message);
                Some(response)
            }
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }

    pub fn record_donation(&self, donor_name: &str, amount: &str) -> Option<RecordDonationResponse> {
        let command = RecordDonationCommand {
            donor_name: donor_name.to_string(),
            amount: amount.to_string(),
        };

        match self.ledger.record_donation(command) {
            Ok(result) => {
                let response = DonationMapper::to_response(result, &self.ledger.config().currency_symbol);
                self.presenter.notify("Donation Recorded", &response.success_message);
                Some(response)
            }
            Err(e @ LedgerError::NotFound(_)) => {
                self.report_error_with(&e, "Donor not found. Please add them first.");
                None
            }
            Err(e @ LedgerError::InvalidAmount(_)) => {
                self.report_error_with(&e, "Enter a valid amount.");
                None
            }
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }

    /// Rows for the donor table; empty when the stores cannot be read
    pub fn refresh_donor_list(&self) -> Vec<DonorSummaryRow> {
        match self.ledger.get_donor_summary() {
            Ok(rows) => rows,
            Err(e) => {
                self.report_error(&e);
                Vec::new()
            }
        }
    }

    pub fn generate_report(&self) -> Option<DonationReport> {
        match self.ledger.generate_report() {
            Ok(Some(report)) => {
                self.presenter.notify(
                    "Donation Report",
                    &format!(
                        "Total Donations: {}\nAverage Donation: {}\nTop Donor: {} ({})",
                        report.total, report.average, report.top_donor, report.top_amount
                    ),
                );
                Some(report)
            }
            Ok(None) => {
                self.presenter.notify("No Data", "No donations available.");
                None
            }
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }

    pub fn delete_donor(&self, name: &str) -> Option<DeleteResponse> {
        match self.ledger.delete_donor(name, &self.presenter) {
            Ok(outcome) => {
                let response = DeleteMapper::to_response(
                    outcome,
                    format!("Donor '{}' and their donations deleted successfully!", name.trim()),
                );
                if let Some(message) = &response.message {
                    self.presenter.notify("Deleted", message);
                }
                Some(response)
            }
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }

    pub fn delete_all_data(&self) -> Option<DeleteResponse> {
        match self.ledger.delete_all_data(&self.presenter) {
            Ok(outcome) => {
                let response = DeleteMapper::to_response(outcome, "All data deleted successfully!".to_string());
                if let Some(message) = &response.message {
                    self.presenter.notify("Deleted", message);
                }
                Some(response)
            }
            Err(e) => {
                self.report_error(&e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::clock::FixedClock;
    use crate::domain::commands::Confirmation;
    use crate::domain::models::LedgerConfig;
    use crate::storage::memory::MemoryConnection;
    use crate::storage::traits::StoreId;
    use chrono::{TimeZone, Utc};
    use std::cell::{Cell, RefCell};
    use std::sync::Arc;

    #[derive(Debug, Clone, PartialEq)]
    enum Shown {
        Notify(String, String),
        Warn(String, String),
    }

    struct RecordingPresenter {
        answer: Cell<bool>,
        prompts: RefCell<Vec<String>>,
        shown: RefCell<Vec<Shown>>,
    }

    impl RecordingPresenter {
        fn answering(answer: bool) -> Self {
            Self {
                answer: Cell::new(answer),
                prompts: RefCell::new(Vec::new()),
                shown: RefCell::new(Vec::new()),
            }
        }

        fn last(&self) -> Shown {
            self.shown.borrow().last().cloned().expect("nothing was shown")
        }
    }

    impl Confirmation for RecordingPresenter {
        fn confirm(&self, prompt: &str) -> bool {
            self.prompts.borrow_mut().push(prompt.to_string());
            self.answer.get()
        }
    }

    impl Presenter for RecordingPresenter {
        fn notify(&self, title: &str, message: &str) {
            self.shown
                .borrow_mut()
                .push(Shown::Notify(title.to_string(), message.to_string()));
        }

        fn warn(&self, title: &str, message: &str) {
            self.shown
                .borrow_mut()
                .push(Shown::Warn(title.to_string(), message.to_string()));
        }
    }

    fn setup_controller(answer: bool) -> (LedgerController<MemoryConnection, RecordingPresenter>, Arc<MemoryConnection>) {
        let storage = Arc::new(MemoryConnection::new());
        let clock = FixedClock(Utc.with_ymd_and_hms(2024, 3, 1, 13, 15, 10).unwrap());
        let ledger =
            DonationLedger::with_clock(storage.clone(), LedgerConfig::default(), Arc::new(clock)).unwrap();
        (
            LedgerController::new(ledger, RecordingPresenter::answering(answer)),
            storage,
        )
    }

    fn warn(title: &str, message: &str) -> Shown {
        Shown::Warn(title.to_string(), message.to_string())
    }

    fn notify(title: &str, message: &str) -> Shown {
        Shown::Notify(title.to_string(), message.to_string())
    }

    #[test]
    fn test_add_donor_messages() {
        let (controller, _) = setup_controller(true);

        assert!(controller.add_donor("Alice", "555").is_some());
        assert_eq!(
            controller.presenter().last(),
            notify("Success", "Donor 'Alice' added successfully!")
        );

        assert!(controller.add_donor("alice", "555").is_none());
        assert_eq!(
            controller.presenter().last(),
            warn("Duplicate", "Donor 'alice' already exists!")
        );

        assert!(controller.add_donor("", "555").is_none());
        assert_eq!(
            controller.presenter().last(),
            warn("Input Error", "Both name and contact are required!")
        );
    }

    #[test]
    fn test_record_donation_messages() {
        let (controller, _) = setup_controller(true);
        controller.add_donor("Alice", "555");

        assert!(controller.record_donation("Bob", "5").is_none());
        assert_eq!(
            controller.presenter().last(),
            warn("Not Found", "Donor not found. Please add them first.")
        );

        assert!(controller.record_donation("Alice", "abc").is_none());
        assert_eq!(
            controller.presenter().last(),
            warn("Invalid Input", "Enter a valid amount.")
        );

        assert!(controller.record_donation("Alice", "inf").is_none());
        assert_eq!(
            controller.presenter().last(),
            warn("Invalid Input", "Enter a valid amount.")
        );

        let response = controller.record_donation("Alice", "100.50").unwrap();
        assert_eq!(response.date, "2024-03-01 18:45:10 IST");
        match controller.presenter().last() {
            Shown::Notify(title, message) => {
                assert_eq!(title, "Donation Recorded");
                assert!(message.starts_with("₹100.50 recorded for Alice"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }

    #[test]
    fn test_refresh_and_report() {
        let (controller, _) = setup_controller(true);

        controller.generate_report();
        assert_eq!(
            controller.presenter().last(),
            notify("No Data", "No donations available.")
        );

        controller.add_donor("Alice", "555");
        controller.record_donation("Alice", "10");
        controller.record_donation("Alice", "30");

        let rows = controller.refresh_donor_list();
        assert_eq!(rows[0].total_donated, "₹40.00");

        let report = controller.generate_report().unwrap();
        assert_eq!(report.top_donor, "Alice");
        assert_eq!(
            controller.presenter().last(),
            notify(
                "Donation Report",
                "Total Donations: ₹40.00\nAverage Donation: ₹20.00\nTop Donor: Alice (₹30.00)"
            )
        );
    }

    #[test]
    fn test_delete_donor_confirmed() {
        let (controller, _) = setup_controller(true);
        controller.add_donor("Alice", "555");
        controller.record_donation("Alice", "10");

        let response = controller.delete_donor("Alice").unwrap();

        assert!(response.deleted);
        assert_eq!(response.donations_removed, 1);
        assert_eq!(
            *controller.presenter().prompts.borrow(),
            vec!["Delete donor 'Alice' and their donations?".to_string()]
        );
        assert_eq!(
            controller.presenter().last(),
            notify("Deleted", "Donor 'Alice' and their donations deleted successfully!")
        );
        assert!(controller.refresh_donor_list().is_empty());
    }

    #[test]
    fn test_delete_declined_shows_nothing() {
        let (controller, storage) = setup_controller(false);
        controller.add_donor("Alice", "555");
        let shown_before = controller.presenter().shown.borrow().len();

        let response = controller.delete_all_data().unwrap();

        assert!(!response.deleted);
        assert_eq!(controller.presenter().shown.borrow().len(), shown_before);
        assert!(storage.contains_store(StoreId::Donors));
    }

    #[test]
    fn test_delete_all_confirmed() {
        let (controller, storage) = setup_controller(true);
        controller.add_donor("Alice", "555");

        controller.delete_all_data().unwrap();

        assert_eq!(
            controller.presenter().last(),
            notify("Deleted", "All data deleted successfully!")
        );
        assert!(!storage.contains_store(StoreId::Donors));
    }

    #[test]
    fn test_corrupt_store_is_a_warning() {
        let (controller, storage) = setup_controller(true);
        storage.insert_raw(StoreId::Donations, "oops");
        controller.add_donor("Alice", "555");

        assert!(controller.refresh_donor_list().is_empty());
        match controller.presenter().last() {
            Shown::Warn(title, message) => {
                assert_eq!(title, "Corrupt Data");
                assert!(message.contains("donations"));
            }
            other => panic!("unexpected message: {:?}", other),
        }
    }
}
