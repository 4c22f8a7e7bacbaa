//! Inventory records and stock-level rules.
//!
//! Pure domain logic (no IO, no HTTP, no storage).

pub mod item;

pub use item::{InventoryRecord, StockRisk};
