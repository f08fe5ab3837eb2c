//! Ledger error model.

use thiserror::Error;

use crate::store::StoreError;

/// Result type used across the ledger operations.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Failure of a ledger operation.
///
/// Every operation either fully succeeds (one conceptual write, or a pure
/// read) or fails with one of these and no visible side effect. Nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// Register was called for a product id already present. The existing
    /// record is untouched.
    #[error("product {0} already exists")]
    AlreadyExists(String),

    /// Query/UpdateStatus was called for an absent product id.
    #[error("product {0} does not exist")]
    NotFound(String),

    /// The underlying store failed (I/O, transport, or host-transaction
    /// failure). Propagated unchanged to the caller.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Bytes at `key` could not be converted to or from a product record.
    /// On the read path this indicates corruption or a foreign writer;
    /// List aborts on the first such record.
    #[error("invalid product record at key {key}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

impl LedgerError {
    pub fn already_exists(id: impl Into<String>) -> Self {
        Self::AlreadyExists(id.into())
    }

    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound(id.into())
    }

    pub fn codec(key: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Codec {
            key: key.into(),
            source,
        }
    }
}
