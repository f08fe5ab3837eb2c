//! Contract-boundary dispatch (function name + string args → operation).
//!
//! The host transaction runtime hands invocations across the wire as a
//! function name with positional string arguments. This module routes
//! them to the typed ledger operations and renders results as JSON, so
//! the transport layer never touches domain types directly.
//!
//! Error mapping is centralized here: ledger failures pass through
//! wrapped, while routing problems (unknown name, wrong arity) get their
//! own variants for the host to translate.

use serde_json::Value as JsonValue;
use thiserror::Error;

use supplytrace_core::{Clock, LedgerError, StateStore, SystemClock};
use supplytrace_ledger::ProductLedger;

/// Failure of an invocation at the contract boundary.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// The function name matches nothing in the contract surface.
    #[error("unknown function {0}")]
    UnknownFunction(String),

    /// The function exists but was called with the wrong argument count.
    #[error("{function} expects {expected} argument(s), got {actual}")]
    Arity {
        function: String,
        expected: usize,
        actual: usize,
    },

    /// The routed ledger operation failed; passed through unchanged.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The operation succeeded but its result could not be rendered as JSON.
    #[error("result encoding failed")]
    Encode(#[source] serde_json::Error),
}

/// Routes host invocations to the product ledger.
///
/// Owns the store handle and the ledger; one dispatcher serves the whole
/// contract surface.
#[derive(Debug)]
pub struct ContractDispatcher<S, C = SystemClock> {
    store: S,
    ledger: ProductLedger<C>,
}

impl<S: StateStore> ContractDispatcher<S, SystemClock> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            ledger: ProductLedger::new(),
        }
    }
}

impl<S: StateStore, C: Clock> ContractDispatcher<S, C> {
    /// Build a dispatcher over a caller-supplied ledger (custom clock).
    pub fn with_ledger(store: S, ledger: ProductLedger<C>) -> Self {
        Self { store, ledger }
    }

    /// Invoke a contract function by name.
    ///
    /// Mutating functions return JSON `null`; `QueryProduct` and
    /// `ListAllProducts` return the record(s) in the persisted wire
    /// shape; `ProductExists` returns a JSON boolean.
    pub fn invoke(&self, function: &str, args: &[&str]) -> Result<JsonValue, DispatchError> {
        tracing::debug!("invoking {} with {} argument(s)", function, args.len());

        match function {
            "RegisterProduct" => {
                let [product_id, status] = expect_args::<2>(function, args)?;
                self.ledger.register(&self.store, product_id, status)?;
                Ok(JsonValue::Null)
            }
            "UpdateStatus" => {
                let [product_id, new_status] = expect_args::<2>(function, args)?;
                self.ledger
                    .update_status(&self.store, product_id, new_status)?;
                Ok(JsonValue::Null)
            }
            "QueryProduct" => {
                let [product_id] = expect_args::<1>(function, args)?;
                let product = self.ledger.query(&self.store, product_id)?;
                serde_json::to_value(product).map_err(DispatchError::Encode)
            }
            "ListAllProducts" => {
                let [] = expect_args::<0>(function, args)?;
                let products = self.ledger.list(&self.store)?;
                serde_json::to_value(products).map_err(DispatchError::Encode)
            }
            "ProductExists" => {
                let [product_id] = expect_args::<1>(function, args)?;
                let exists = self.ledger.exists(&self.store, product_id)?;
                Ok(JsonValue::Bool(exists))
            }
            other => Err(DispatchError::UnknownFunction(other.to_string())),
        }
    }
}

fn expect_args<'a, const N: usize>(
    function: &str,
    args: &[&'a str],
) -> Result<[&'a str; N], DispatchError> {
    <[&str; N]>::try_from(args).map_err(|_| DispatchError::Arity {
        function: function.to_string(),
        expected: N,
        actual: args.len(),
    })
}
