//! The five ledger operations over the store port.
//!
//! Every operation is synchronous, takes the store handle explicitly, and
//! performs a single conceptual write or a pure read. Atomicity across the
//! reads and writes of one call, and serialization of racing callers, are
//! the host store's transaction concerns; nothing here caches, retries, or
//! spawns.

use supplytrace_core::{Clock, LedgerError, LedgerResult, StateStore, SystemClock};

use crate::product::Product;

/// Product lifecycle operations over an abstract key-value store.
///
/// Generic over the clock so tests can drive timestamps deterministically;
/// production uses [`SystemClock`].
#[derive(Debug, Clone, Default)]
pub struct ProductLedger<C = SystemClock> {
    clock: C,
}

impl ProductLedger<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ProductLedger<C> {
    /// Build a ledger over a caller-supplied clock.
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Register a new product under `product_id` with an initial status.
    ///
    /// Create-once: fails with [`LedgerError::AlreadyExists`] when the id
    /// is taken, and no write is issued in that case. The registration
    /// itself becomes the first status-history entry.
    pub fn register<S: StateStore>(
        &self,
        store: &S,
        product_id: &str,
        status: &str,
    ) -> LedgerResult<()> {
        if self.exists(store, product_id)? {
            return Err(LedgerError::already_exists(product_id));
        }

        let product = Product::registered(product_id, status, self.clock.now());
        self.write(store, &product)?;

        tracing::info!("registered product {} with status {}", product_id, status);
        Ok(())
    }

    /// Record a status change on an existing product.
    ///
    /// Loads the record (failing with [`LedgerError::NotFound`] when
    /// absent), overwrites `current_status`, inserts a history entry at the
    /// current clock second, and writes the record back. This is a
    /// read-modify-write with no concurrency token: racing callers are
    /// last-writer-wins, arbitrated only by the host store's own
    /// transaction machinery.
    pub fn update_status<S: StateStore>(
        &self,
        store: &S,
        product_id: &str,
        new_status: &str,
    ) -> LedgerResult<()> {
        let mut product = self.query(store, product_id)?;
        product.record_status(new_status, self.clock.now());
        self.write(store, &product)?;

        tracing::info!("product {} moved to status {}", product_id, new_status);
        Ok(())
    }

    /// Load the full record for `product_id`, including its history.
    pub fn query<S: StateStore>(&self, store: &S, product_id: &str) -> LedgerResult<Product> {
        let bytes = store
            .get(product_id)?
            .ok_or_else(|| LedgerError::not_found(product_id))?;

        serde_json::from_slice(&bytes).map_err(|e| LedgerError::codec(product_id, e))
    }

    /// Existence probe for `product_id`.
    ///
    /// Absence is a normal `false`, never an error; only store-access
    /// failures propagate. The stored bytes are not decoded.
    pub fn exists<S: StateStore>(&self, store: &S, product_id: &str) -> LedgerResult<bool> {
        Ok(store.get(product_id)?.is_some())
    }

    /// Enumerate every stored product.
    ///
    /// Runs a full range scan and decodes each record, failing fast on the
    /// first undecodable one (no partial results). Iteration order is
    /// whatever the store yields and carries no meaning. The scan handle
    /// is released by drop on every exit path.
    pub fn list<S: StateStore>(&self, store: &S) -> LedgerResult<Vec<Product>> {
        let scan = store.range_scan("", "")?;

        let mut products = Vec::new();
        for entry in scan {
            let (key, bytes) = entry?;
            let product =
                serde_json::from_slice(&bytes).map_err(|e| LedgerError::codec(key, e))?;
            products.push(product);
        }

        tracing::debug!("listed {} products", products.len());
        Ok(products)
    }

    fn write<S: StateStore>(&self, store: &S, product: &Product) -> LedgerResult<()> {
        let bytes = serde_json::to_vec(product)
            .map_err(|e| LedgerError::codec(product.product_id.as_str(), e))?;
        store.put(&product.product_id, &bytes)?;
        Ok(())
    }
}
