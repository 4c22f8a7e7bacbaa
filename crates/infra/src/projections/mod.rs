//! Read models computed from a (filtered) dataset.
//!
//! These are rebuilt on every request from a fresh dataset copy; nothing is cached.

pub mod dashboard;

pub use dashboard::{CategoryStock, DashboardSummary, DashboardTotals, SkuOverview};
