use serde::{Deserialize, Serialize};

use pizzeria_core::ItemId;

/// A catalog entry: identifier, display name and unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    /// Price in smallest currency unit.
    #[serde(alias = "price")]
    pub unit_price: u64,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>, unit_price: u64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }
}
