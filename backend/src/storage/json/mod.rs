//! # JSON Storage Module
//!
//! File-based storage for the charity tracker. Each store is one JSON
//! document in the data directory, read whole and replaced whole.
//!
//! ## File Format
//!
//! ```json
//! [
//!     {
//!         "name": "Alice",
//!         "amount": 100.5,
//!         "date": "2024-03-01 18:45:10 IST"
//!     }
//! ]
//! ```

pub mod codec;
pub mod connection;
pub mod ledger_config_repository;

#[cfg(test)]
pub mod test_utils;

pub use connection::JsonConnection;
pub use ledger_config_repository::LedgerConfigRepository;
