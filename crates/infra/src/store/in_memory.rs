use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::RwLock;

use supplytrace_core::{RangeScan, ScanEntry, StateStore, StoreError};

/// In-memory key-value store.
///
/// Intended for tests/dev. Not optimized for performance, and it offers
/// no cross-call transaction semantics: racing read-modify-write callers
/// are last-writer-wins, as documented on the ledger operations.
#[derive(Debug, Default)]
pub struct InMemoryStateStore {
    state: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StateStore for InMemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::access("state lock poisoned"))?;

        Ok(state.get(key).cloned())
    }

    fn put(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let mut state = self
            .state
            .write()
            .map_err(|_| StoreError::access("state lock poisoned"))?;

        state.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn range_scan(&self, start_key: &str, end_key: &str) -> Result<RangeScan<'_>, StoreError> {
        let state = self
            .state
            .read()
            .map_err(|_| StoreError::access("state lock poisoned"))?;

        // Empty-string bounds denote the full range.
        let lower = if start_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Included(start_key)
        };
        let upper = if end_key.is_empty() {
            Bound::Unbounded
        } else {
            Bound::Excluded(end_key)
        };

        // Snapshot under the read lock; the returned handle never holds it.
        let entries: Vec<ScanEntry> = state
            .range::<str, _>((lower, upper))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();

        Ok(Box::new(entries.into_iter().map(Ok::<ScanEntry, StoreError>)))
    }
}
