//! # IO Module
//!
//! The boundary between the ledger and whatever UI drives it. The UI
//! implements [`Presenter`]; [`LedgerController`] calls the ledger and turns
//! its results and errors into messages and DTOs.

pub mod ledger_controller;
pub mod mappers;
pub mod presenter;

pub use ledger_controller::{error_title, LedgerController};
pub use presenter::Presenter;
