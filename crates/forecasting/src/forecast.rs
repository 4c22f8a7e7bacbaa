use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ainventory_core::Sku;

/// Predicted demand for one SKU on one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastRecord {
    pub sku: Sku,
    pub date: NaiveDate,
    pub forecast: f64,

    /// Model confidence, conventionally in \[0, 1\] (not enforced).
    pub confidence: f64,

    /// Free-form model label ("Prophet", "SARIMA", ...).
    pub model: String,
}

/// Units to order so that stock covers the forecast, rounded up.
///
/// A missing forecast counts as zero demand.
pub fn reorder_quantity(forecast: Option<f64>, stock: i64) -> u64 {
    let demand = forecast.unwrap_or(0.0);
    let shortfall = (demand - stock as f64).ceil();
    if shortfall.is_finite() && shortfall > 0.0 {
        shortfall as u64
    } else {
        0
    }
}

/// Distinct model labels, sorted.
pub fn models_used<'a>(records: impl IntoIterator<Item = &'a ForecastRecord>) -> Vec<String> {
    records
        .into_iter()
        .map(|r| r.model.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
