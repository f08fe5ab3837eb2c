//! `supplytrace-core` — foundation contracts for the product ledger.
//!
//! This crate contains **pure contracts** (no storage or transport
//! implementations): the error model, the key-value store port the ledger
//! operations consume, and the clock that supplies history timestamps.

pub mod clock;
pub mod error;
pub mod store;

pub use clock::{Clock, ManualClock, SystemClock, history_timestamp};
pub use error::{LedgerError, LedgerResult};
pub use store::{RangeScan, ScanEntry, StateStore, StoreError};
