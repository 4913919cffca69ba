use crate::domain::commands::Confirmation;

/// What the ledger needs from whatever UI is driving it.
///
/// `confirm` blocks until the user answers.
pub trait Presenter: Confirmation {
    /// Success or informational message
    fn notify(&self, title: &str, message: &str);

    /// Validation or failure message
    fn warn(&self, title: &str, message: &str);
}
