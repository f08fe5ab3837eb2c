use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use supplytrace_core::history_timestamp;

/// A tracked product: identity, latest status, and full status history.
///
/// Serialized field names (`ProductID`, `CurrentStatus`, `StatusHistory`)
/// match the records the host ledger already holds, so stored bytes
/// round-trip against data written by other deployments of this contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Unique identifier; also the storage key. Immutable after registration.
    #[serde(rename = "ProductID")]
    pub product_id: String,

    /// Latest lifecycle status label. Free-form: callers supply arbitrary
    /// status strings, there is no closed status enum in this contract.
    #[serde(rename = "CurrentStatus")]
    pub current_status: String,

    /// Status at each recorded change, keyed by RFC3339 timestamp at
    /// second precision. Key order carries no wire meaning.
    #[serde(rename = "StatusHistory")]
    pub status_history: BTreeMap<String, String>,
}

impl Product {
    /// Build a freshly registered product with its initial history entry.
    pub fn registered(
        product_id: impl Into<String>,
        status: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        let status = status.into();
        let mut status_history = BTreeMap::new();
        status_history.insert(history_timestamp(at), status.clone());

        Self {
            product_id: product_id.into(),
            current_status: status,
            status_history,
        }
    }

    /// Record a status change: overwrite `current_status` and insert a
    /// history entry at `at`.
    ///
    /// History keys have second precision, so a same-second `at` collides
    /// with an existing key and overwrites that entry's value instead of
    /// adding a new one.
    pub fn record_status(&mut self, status: impl Into<String>, at: DateTime<Utc>) {
        let status = status.into();
        self.status_history
            .insert(history_timestamp(at), status.clone());
        self.current_status = status;
    }

    /// The latest history entry as `(timestamp, status)`.
    ///
    /// History keys are fixed-width RFC3339 UTC, so the lexicographically
    /// last key is the temporally latest. A product always has at least
    /// one entry once registered.
    pub fn latest_history_entry(&self) -> Option<(&str, &str)> {
        self.status_history
            .iter()
            .next_back()
            .map(|(t, s)| (t.as_str(), s.as_str()))
    }
}
