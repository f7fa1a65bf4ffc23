use std::sync::Arc;

use pizzeria_catalog::Catalog;
use pizzeria_core::{DomainError, DomainResult, ItemId};

use crate::order::Order;
use crate::store::{OrderStore, OrderStoreError};

/// How the ledger treats zero or negative quantities.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum QuantityPolicy {
    /// Accept any quantity; non-positive values yield a zero/negative total.
    #[default]
    AllowAny,
    /// Reject `quantity <= 0` before anything is appended.
    PositiveOnly,
}

impl QuantityPolicy {
    fn check(self, quantity: i64) -> DomainResult<()> {
        match self {
            QuantityPolicy::AllowAny => Ok(()),
            QuantityPolicy::PositiveOnly if quantity > 0 => Ok(()),
            QuantityPolicy::PositiveOnly => Err(DomainError::validation(format!(
                "quantity must be positive, got {quantity}"
            ))),
        }
    }
}

impl From<OrderStoreError> for DomainError {
    fn from(err: OrderStoreError) -> Self {
        DomainError::storage(err.to_string())
    }
}

/// The order ledger: validates and prices new orders against the catalog and
/// appends them to the store.
///
/// Invariant: every stored order references an item present in the catalog
/// when it was created.
#[derive(Debug)]
pub struct OrderLedger<S> {
    catalog: Arc<Catalog>,
    store: S,
    policy: QuantityPolicy,
}

impl<S: OrderStore> OrderLedger<S> {
    pub fn new(catalog: Arc<Catalog>, store: S) -> Self {
        Self {
            catalog,
            store,
            policy: QuantityPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: QuantityPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// All orders, in creation order.
    pub fn list(&self) -> DomainResult<Vec<Order>> {
        Ok(self.store.list()?)
    }

    /// Place an order. Not idempotent: each successful call appends one entry.
    pub fn create(&self, item_id: ItemId, quantity: i64) -> DomainResult<Order> {
        let item = self.catalog.find_by_id(item_id)?;
        self.policy.check(quantity)?;
        let order = Order::price(item, quantity)?;

        self.store.append(order.clone())?;
        tracing::debug!(item_id = %order.item_id, quantity, total = order.total, "order appended");
        Ok(order)
    }
}
