//! `ainventory-core`: shared building blocks for the inventory data service.
//!
//! Pure domain primitives only (no IO, no HTTP, no storage).

pub mod record;
pub mod sku;

pub use record::{Categorized, WarehouseScoped};
pub use sku::Sku;
