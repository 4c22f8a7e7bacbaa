//! Built-in sample dataset standing in for a real data store.
//!
//! Every call to [`Dataset::sample`] returns a fresh owned copy. Callers filter
//! their own copy, so one request can never narrow the data another request sees.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ainventory_core::Sku;
use ainventory_forecasting::ForecastRecord;
use ainventory_inventory::InventoryRecord;
use ainventory_sales::SalesRecord;

/// The three record tables served by the data endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub sales: Vec<SalesRecord>,
    pub inventory: Vec<InventoryRecord>,
    pub forecasts: Vec<ForecastRecord>,
}

impl Dataset {
    pub fn sample() -> Self {
        Self {
            sales: sample_sales(),
            inventory: sample_inventory(),
            forecasts: sample_forecasts(),
        }
    }
}

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

fn sale(date: NaiveDate, sku: &str, quantity: u32, revenue: f64, warehouse: &str) -> SalesRecord {
    SalesRecord {
        date,
        sku: Sku::new(sku),
        quantity,
        revenue,
        warehouse: warehouse.to_string(),
    }
}

#[allow(clippy::too_many_arguments)]
fn item(
    sku: &str,
    name: &str,
    stock: i64,
    min_stock: i64,
    max_stock: i64,
    warehouse: &str,
    category: &str,
    brand: &str,
) -> InventoryRecord {
    InventoryRecord {
        sku: Sku::new(sku),
        name: name.to_string(),
        stock,
        min_stock,
        max_stock,
        warehouse: warehouse.to_string(),
        category: category.to_string(),
        brand: brand.to_string(),
    }
}

fn forecast(sku: &str, date: NaiveDate, value: f64, confidence: f64, model: &str) -> ForecastRecord {
    ForecastRecord {
        sku: Sku::new(sku),
        date,
        forecast: value,
        confidence,
        model: model.to_string(),
    }
}

fn sample_sales() -> Vec<SalesRecord> {
    vec![
        sale(day(2024, 1, 1), "SKU001", 45, 22500.0, "Москва"),
        sale(day(2024, 1, 2), "SKU001", 52, 26000.0, "Москва"),
        sale(day(2024, 1, 3), "SKU002", 38, 19000.0, "СПб"),
        sale(day(2024, 1, 4), "SKU003", 67, 33500.0, "Москва"),
        sale(day(2024, 1, 5), "SKU001", 41, 20500.0, "СПб"),
    ]
}

fn sample_inventory() -> Vec<InventoryRecord> {
    vec![
        item("SKU001", "iPhone 15 Pro", 156, 50, 200, "Москва", "Электроника", "Apple"),
        item("SKU002", "MacBook Air M2", 23, 20, 100, "СПб", "Электроника", "Apple"),
        item("SKU003", "Nike Air Max", 89, 30, 150, "Москва", "Обувь", "Nike"),
        item("SKU004", "Adidas Ultraboost", 45, 25, 80, "СПб", "Обувь", "Adidas"),
        item("SKU005", "Samsung Galaxy S24", 67, 40, 120, "Москва", "Электроника", "Samsung"),
    ]
}

fn sample_forecasts() -> Vec<ForecastRecord> {
    let feb = day(2024, 2, 1);
    vec![
        forecast("SKU001", feb, 180.0, 0.85, "Prophet"),
        forecast("SKU002", feb, 45.0, 0.78, "SARIMA"),
        forecast("SKU003", feb, 120.0, 0.92, "LightGBM"),
        forecast("SKU004", feb, 65.0, 0.81, "Prophet"),
        forecast("SKU005", feb, 95.0, 0.88, "Ensemble"),
    ]
}
