//! Shared state handle passed to every handler.

use std::sync::Arc;

use pizzeria_catalog::{Catalog, Item};
use pizzeria_core::DomainResult;
use pizzeria_orders::{InMemoryOrderStore, Order, OrderLedger, OrderStore, QuantityPolicy};

use crate::app::dto::CreateOrderRequest;

/// Catalog + order ledger, shared across concurrent requests.
///
/// The catalog is read-only; all ledger access goes through the store's
/// locking discipline.
pub struct AppServices {
    ledger: OrderLedger<Arc<dyn OrderStore>>,
}

impl AppServices {
    pub fn new(catalog: Catalog, store: Arc<dyn OrderStore>, policy: QuantityPolicy) -> Self {
        Self {
            ledger: OrderLedger::new(Arc::new(catalog), store).with_policy(policy),
        }
    }

    /// In-memory wiring: state lives for the lifetime of the process.
    pub fn in_memory(catalog: Catalog, policy: QuantityPolicy) -> Self {
        Self::new(catalog, Arc::new(InMemoryOrderStore::new()), policy)
    }

    pub fn catalog_list(&self) -> DomainResult<&[Item]> {
        let catalog = self.ledger.catalog();
        catalog.ensure_not_empty()?;
        Ok(catalog.list())
    }

    pub fn orders_list(&self) -> DomainResult<Vec<Order>> {
        self.ledger.catalog().ensure_not_empty()?;
        self.ledger.list()
    }

    /// Decode, validate, price and append a new order.
    ///
    /// Every failure returns before the ledger is touched.
    pub fn place_order(&self, body: &[u8]) -> DomainResult<Order> {
        self.ledger.catalog().ensure_not_empty()?;
        let req = CreateOrderRequest::decode(body)?;
        self.ledger.create(req.item_id, req.quantity)
    }
}
