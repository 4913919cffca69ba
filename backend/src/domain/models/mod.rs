pub mod donation;
pub mod donor;
pub mod ledger_config;

pub use donation::Donation;
pub use donor::{name_key, Donor};
pub use ledger_config::LedgerConfig;
