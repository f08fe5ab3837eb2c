//! Product lifecycle ledger (domain module).
//!
//! This crate contains the business rules for tracking products through a
//! supply chain: the persisted `Product` record and the five operations
//! over the abstract key-value store port. No IO, no transport, no
//! storage implementation lives here.

pub mod ledger;
pub mod product;

pub use ledger::ProductLedger;
pub use product::Product;
