use std::collections::HashSet;
use std::path::Path;

use pizzeria_core::{DomainError, DomainResult, ItemId};

use crate::item::Item;

/// Immutable, ordered collection of items.
///
/// Ids are unique by construction; the order of `list()` is the order the
/// items were supplied in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(items: Vec<Item>) -> DomainResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if !seen.insert(item.id) {
                return Err(DomainError::invariant(format!(
                    "duplicate item id in catalog: {}",
                    item.id
                )));
            }
        }
        Ok(Self { items })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// The menu the service ships with when no seed file is configured.
    pub fn default_menu() -> Self {
        Self {
            items: vec![
                Item::new(1, "Pepperoni", 12),
                Item::new(2, "Capricciosa", 11),
                Item::new(3, "Margherita", 10),
            ],
        }
    }

    /// Parse a JSON array of items.
    pub fn from_json_slice(bytes: &[u8]) -> DomainResult<Self> {
        let items: Vec<Item> = serde_json::from_slice(bytes)
            .map_err(|e| DomainError::validation(format!("invalid catalog seed: {e}")))?;
        Self::new(items)
    }

    /// Load the seed catalog from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> DomainResult<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|e| {
            DomainError::validation(format!("cannot read catalog {}: {e}", path.display()))
        })?;
        Self::from_json_slice(&bytes)
    }

    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Linear scan for the item with `id`.
    pub fn find_by_id(&self, id: ItemId) -> DomainResult<&Item> {
        self.items
            .iter()
            .find(|item| item.id == id)
            .ok_or(DomainError::ItemNotFound(id))
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn ensure_not_empty(&self) -> DomainResult<()> {
        if self.is_empty() {
            return Err(DomainError::CatalogEmpty);
        }
        Ok(())
    }
}
