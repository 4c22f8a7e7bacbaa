use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ainventory_core::{Sku, WarehouseScoped};

/// Units of one SKU sold on one day from one warehouse.
///
/// `date` serializes as `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesRecord {
    pub date: NaiveDate,
    pub sku: Sku,
    pub quantity: u32,
    pub revenue: f64,
    pub warehouse: String,
}

impl WarehouseScoped for SalesRecord {
    fn warehouse(&self) -> &str {
        &self.warehouse
    }
}

/// Aggregate over a set of sales rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesTotals {
    pub sales_count: usize,
    pub total_quantity: u64,
    pub total_revenue: f64,
}

impl SalesTotals {
    pub fn from_records<'a>(records: impl IntoIterator<Item = &'a SalesRecord>) -> Self {
        records.into_iter().fold(Self::default(), |mut acc, r| {
            acc.sales_count += 1;
            acc.total_quantity += u64::from(r.quantity);
            acc.total_revenue += r.revenue;
            acc
        })
    }
}
