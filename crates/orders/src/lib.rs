//! Orders domain module.
//!
//! An append-only ledger of orders placed against the catalog. Pricing and
//! validation are deterministic; the only shared mutable state lives behind
//! an [`OrderStore`].

pub mod ledger;
pub mod order;
pub mod store;

pub use ledger::{OrderLedger, QuantityPolicy};
pub use order::Order;
pub use store::{InMemoryOrderStore, OrderStore, OrderStoreError};
