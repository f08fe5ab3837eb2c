//! Infrastructure layer: store backends and the contract dispatcher.
//!
//! Domain rules stay in `supplytrace-ledger`; this crate wires them to
//! concrete pieces — the in-memory store used by tests/dev and the
//! function-name dispatch surface the host platform invokes.

pub mod dispatch;
pub mod store;

#[cfg(test)]
mod integration_tests;

pub use dispatch::{ContractDispatcher, DispatchError};
pub use store::InMemoryStateStore;
