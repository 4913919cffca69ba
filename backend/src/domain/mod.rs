//! # Domain Module
//!
//! Business logic for the charity tracker, independent of any UI framework or
//! storage mechanism.
//!
//! ## Module Organization
//!
//! - **donation_ledger**: donor and donation CRUD plus per-donor totals and the report
//! - **receipt**: receipt file naming and text
//! - **clock**: injectable time source
//! - **commands**: command, result and outcome types used by the ledger
//! - **errors**: the error taxonomy surfaced to the presentation layer
//! - **models**: persisted records and configuration
//!
//! ## Business Rules
//!
//! - Donor names are unique after trimming and ignoring case
//! - Donations can only be recorded for an existing donor
//! - Deleting a donor also deletes every donation recorded under that name
//! - Destructive operations require confirmation

pub mod clock;
pub mod commands;
pub mod donation_ledger;
pub mod errors;
pub mod models;
pub mod receipt;

pub use clock::{Clock, FixedClock, SystemClock};
pub use commands::*;
pub use donation_ledger::DonationLedger;
pub use errors::LedgerError;
