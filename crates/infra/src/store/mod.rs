//! Key-value store backends.
//!
//! The store contract itself lives in `supplytrace-core`; this module
//! holds implementations of it.

pub mod in_memory;

pub use in_memory::InMemoryStateStore;
