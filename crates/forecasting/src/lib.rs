//! `ainventory-forecasting`
//!
//! Forecast records as produced by external models. Nothing here fits a
//! model: forecasts arrive as finished numbers with a model label attached.

pub mod forecast;

pub use forecast::{ForecastRecord, models_used, reorder_quantity};
