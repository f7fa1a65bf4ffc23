//! Catalog domain module.
//!
//! The catalog is the fixed set of purchasable items. It is built once at
//! process start and never mutated afterwards (no IO beyond the optional seed
//! file, no HTTP, no storage).

pub mod catalog;
pub mod item;

pub use catalog::Catalog;
pub use item::Item;
