use std::sync::{Arc, RwLock};

use thiserror::Error;

use crate::order::Order;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum OrderStoreError {
    /// A writer panicked while holding the ledger lock.
    #[error("order store lock poisoned")]
    Poisoned,
}

/// Append-only order storage shared by all request handlers.
///
/// Implementations must make `append` and `list` atomic with respect to each
/// other: a reader sees either all of an append or none of it.
pub trait OrderStore: Send + Sync {
    fn append(&self, order: Order) -> Result<(), OrderStoreError>;
    /// Snapshot of all orders, in creation order.
    fn list(&self) -> Result<Vec<Order>, OrderStoreError>;
}

impl<S> OrderStore for Arc<S>
where
    S: OrderStore + ?Sized,
{
    fn append(&self, order: Order) -> Result<(), OrderStoreError> {
        (**self).append(order)
    }

    fn list(&self) -> Result<Vec<Order>, OrderStoreError> {
        (**self).list()
    }
}

/// In-memory order store. State is discarded when the process exits.
#[derive(Debug, Default)]
pub struct InMemoryOrderStore {
    orders: RwLock<Vec<Order>>,
}

impl InMemoryOrderStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl OrderStore for InMemoryOrderStore {
    fn append(&self, order: Order) -> Result<(), OrderStoreError> {
        let mut orders = self.orders.write().map_err(|_| OrderStoreError::Poisoned)?;
        orders.push(order);
        Ok(())
    }

    fn list(&self) -> Result<Vec<Order>, OrderStoreError> {
        let orders = self.orders.read().map_err(|_| OrderStoreError::Poisoned)?;
        Ok(orders.clone())
    }
}
