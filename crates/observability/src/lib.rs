//! Shared observability setup (tracing/logging) for supplytrace processes.

/// Tracing configuration (filters, formatting).
pub mod tracing;

pub use tracing::{init, init_with_filter};
