//! Key-value store boundary consumed by the ledger operations.
//!
//! The host ledger platform owns durability and transaction atomicity;
//! this port only describes the narrow surface the product ledger needs:
//! get-by-key, put-by-key, and a range scan. Implementations adapt it to
//! the actual backing store's client API; tests use an in-memory one.

use std::sync::Arc;

use thiserror::Error;

/// Store-access failure (I/O, transport, host-transaction failure).
///
/// Absence of a key is **not** an error anywhere on this surface.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store access failed: {0}")]
    Access(String),
}

impl StoreError {
    pub fn access(msg: impl Into<String>) -> Self {
        Self::Access(msg.into())
    }
}

/// One scanned entry: key and the raw stored bytes.
pub type ScanEntry = (String, Vec<u8>);

/// Owned cursor over a key range.
///
/// Dropping the handle releases the underlying cursor, so cleanup happens
/// on every exit path: success, decode failure, or early break.
pub type RangeScan<'s> = Box<dyn Iterator<Item = Result<ScanEntry, StoreError>> + Send + 's>;

/// Narrow key-value contract the ledger operations are written against.
pub trait StateStore: Send + Sync {
    /// Read the raw bytes stored at `key`. Absence is `Ok(None)`.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Write `value` under `key`, overwriting any previous value.
    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Scan keys in `[start_key, end_key)`. Empty-string bounds denote the
    /// full range. Iteration order is the store's own and carries no
    /// meaning for callers.
    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<RangeScan<'_>, StoreError>;
}

impl<S> StateStore for Arc<S>
where
    S: StateStore + ?Sized,
{
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        (**self).put(key, value)
    }

    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<RangeScan<'_>, StoreError> {
        (**self).range_scan(start_key, end_key)
    }
}
