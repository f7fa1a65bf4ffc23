use serde::Serialize;

use pizzeria_catalog::Item;
use pizzeria_core::{DomainError, DomainResult, ItemId};

/// A placed order. Immutable once appended to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    pub item_id: ItemId,
    pub quantity: i64,
    /// `unit_price * quantity`, frozen at creation time.
    pub total: i64,
}

impl Order {
    /// Price `quantity` units of `item`.
    pub fn price(item: &Item, quantity: i64) -> DomainResult<Self> {
        let total = i64::try_from(item.unit_price)
            .ok()
            .and_then(|unit| unit.checked_mul(quantity))
            .ok_or_else(|| {
                DomainError::validation(format!(
                    "order total overflows for item {} x {quantity}",
                    item.id
                ))
            })?;

        Ok(Self {
            item_id: item.id,
            quantity,
            total,
        })
    }
}
