//! Dashboard summary.
//!
//! Combines the three tables into the figures the dashboard shows: revenue,
//! shortage risk per SKU, stock per category and the models behind forecasts.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use ainventory_core::Sku;
use ainventory_forecasting::{models_used, reorder_quantity};
use ainventory_inventory::StockRisk;
use ainventory_sales::SalesTotals;

use crate::fixture::Dataset;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardTotals {
    pub total_revenue: f64,
    pub total_quantity: u64,
    pub sales_count: usize,
    pub sku_count: usize,
    /// Inventory rows below their minimum stock.
    pub risk_items: usize,
}

/// One inventory row joined with its forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkuOverview {
    pub sku: Sku,
    pub name: String,
    pub stock: i64,
    pub forecast: f64,
    pub reorder: u64,
    pub risk: StockRisk,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryStock {
    pub category: String,
    pub stock: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub totals: DashboardTotals,
    pub skus: Vec<SkuOverview>,
    pub categories: Vec<CategoryStock>,
    pub models: Vec<String>,
}

impl DashboardSummary {
    pub fn build(dataset: &Dataset) -> Self {
        let sales = SalesTotals::from_records(&dataset.sales);

        // First forecast per SKU wins.
        let mut forecast_by_sku: HashMap<&Sku, f64> = HashMap::new();
        for f in &dataset.forecasts {
            forecast_by_sku.entry(&f.sku).or_insert(f.forecast);
        }

        let skus: Vec<SkuOverview> = dataset
            .inventory
            .iter()
            .map(|item| {
                let forecast = forecast_by_sku.get(&item.sku).copied();
                SkuOverview {
                    sku: item.sku.clone(),
                    name: item.name.clone(),
                    stock: item.stock,
                    forecast: forecast.unwrap_or(0.0),
                    reorder: reorder_quantity(forecast, item.stock),
                    risk: item.risk(),
                }
            })
            .collect();

        let mut by_category: BTreeMap<&str, i64> = BTreeMap::new();
        for item in &dataset.inventory {
            *by_category.entry(item.category.as_str()).or_default() += item.stock;
        }
        let categories = by_category
            .into_iter()
            .map(|(category, stock)| CategoryStock {
                category: category.to_string(),
                stock,
            })
            .collect();

        Self {
            totals: DashboardTotals {
                total_revenue: sales.total_revenue,
                total_quantity: sales.total_quantity,
                sales_count: sales.sales_count,
                sku_count: dataset.inventory.len(),
                risk_items: dataset.inventory.iter().filter(|i| i.needs_reorder()).count(),
            },
            skus,
            categories,
            models: models_used(&dataset.forecasts),
        }
    }
}
