//! # Storage Module
//!
//! Persistence for the charity tracker. The domain layer only sees the
//! [`LedgerStorage`] trait; this module provides the JSON-file backend used by
//! the application and an in-memory backend for tests and previews.

pub mod json;
pub mod memory;
pub mod traits;

pub use json::{JsonConnection, LedgerConfigRepository};
pub use memory::MemoryConnection;
pub use traits::{LedgerStorage, StoreError, StoreId};
