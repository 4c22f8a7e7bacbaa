use serde::{Deserialize, Serialize};

use ainventory_core::{Categorized, Sku, WarehouseScoped};

/// One stocked product in one warehouse.
///
/// `stock` is not required to lie within `[min_stock, max_stock]`; the
/// thresholds only drive [`StockRisk`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRecord {
    pub sku: Sku,
    pub name: String,
    pub stock: i64,
    pub min_stock: i64,
    pub max_stock: i64,
    pub warehouse: String,
    pub category: String,
    pub brand: String,
}

/// Shortage risk of an inventory row, as shown on the dashboard.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StockRisk {
    Low,
    Medium,
    High,
}

impl InventoryRecord {
    /// `High` below the minimum, `Medium` below 1.5 × minimum, else `Low`.
    pub fn risk(&self) -> StockRisk {
        if self.stock < self.min_stock {
            StockRisk::High
        } else if self.stock * 2 < self.min_stock * 3 {
            StockRisk::Medium
        } else {
            StockRisk::Low
        }
    }

    pub fn needs_reorder(&self) -> bool {
        self.stock < self.min_stock
    }
}

impl WarehouseScoped for InventoryRecord {
    fn warehouse(&self) -> &str {
        &self.warehouse
    }
}

impl Categorized for InventoryRecord {
    fn category(&self) -> &str {
        &self.category
    }
}
