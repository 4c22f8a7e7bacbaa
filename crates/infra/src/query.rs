//! Read queries over a [`Dataset`].
//!
//! A query selects one record table (or all three) and applies equality filters.
//! Filters run on the caller's copy and return new vectors; the input dataset
//! is never modified.

use serde::Serialize;

use ainventory_core::{Categorized, WarehouseScoped};
use ainventory_forecasting::ForecastRecord;
use ainventory_inventory::InventoryRecord;
use ainventory_sales::SalesRecord;

use crate::fixture::Dataset;

/// Which table a query returns.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum RecordType {
    #[default]
    All,
    Sales,
    Inventory,
    Forecasts,
}

impl RecordType {
    /// Known `type` tags; anything else is `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "all" => Some(Self::All),
            "sales" => Some(Self::Sales),
            "inventory" => Some(Self::Inventory),
            "forecasts" => Some(Self::Forecasts),
            _ => None,
        }
    }

    /// Resolve a `type` parameter. Missing, empty and unrecognised tags all
    /// select every table.
    pub fn resolve(tag: Option<&str>) -> Self {
        match tag.filter(|t| !t.is_empty()) {
            None => Self::All,
            Some(t) => Self::from_tag(t).unwrap_or_else(|| {
                tracing::debug!(record_type = t, "unrecognised data type, returning all tables");
                Self::All
            }),
        }
    }
}

/// Equality filters.
///
/// `warehouse` applies to sales and inventory, `category` to inventory only.
/// Forecasts carry neither attribute and are never filtered. When both are set
/// a row must match both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataFilter {
    pub warehouse: Option<String>,
    pub category: Option<String>,
}

impl DataFilter {
    fn keeps_warehouse<R: WarehouseScoped>(&self, record: &R) -> bool {
        self.warehouse
            .as_deref()
            .is_none_or(|w| record.in_warehouse(w))
    }

    fn keeps_category<R: Categorized>(&self, record: &R) -> bool {
        self.category.as_deref().is_none_or(|c| record.in_category(c))
    }

    pub fn sales(&self, records: &[SalesRecord]) -> Vec<SalesRecord> {
        records
            .iter()
            .filter(|r| self.keeps_warehouse(*r))
            .cloned()
            .collect()
    }

    pub fn inventory(&self, records: &[InventoryRecord]) -> Vec<InventoryRecord> {
        records
            .iter()
            .filter(|r| self.keeps_warehouse(*r) && self.keeps_category(*r))
            .cloned()
            .collect()
    }

    pub fn forecasts(&self, records: &[ForecastRecord]) -> Vec<ForecastRecord> {
        records.to_vec()
    }

    /// Filtered copy of every table.
    pub fn apply(&self, dataset: &Dataset) -> Dataset {
        Dataset {
            sales: self.sales(&dataset.sales),
            inventory: self.inventory(&dataset.inventory),
            forecasts: self.forecasts(&dataset.forecasts),
        }
    }
}

/// Parsed `GET /api/data` request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataQuery {
    pub record_type: RecordType,
    pub filter: DataFilter,
}

impl DataQuery {
    /// Build from raw query parameters. Empty filter values are ignored.
    pub fn from_params(
        record_type: Option<&str>,
        warehouse: Option<&str>,
        category: Option<&str>,
    ) -> Self {
        let non_empty = |v: Option<&str>| v.filter(|s| !s.is_empty()).map(str::to_string);
        Self {
            record_type: RecordType::resolve(record_type),
            filter: DataFilter {
                warehouse: non_empty(warehouse),
                category: non_empty(category),
            },
        }
    }

    pub fn execute(&self, dataset: &Dataset) -> QueryResult {
        match self.record_type {
            RecordType::All => QueryResult::All(self.filter.apply(dataset)),
            RecordType::Sales => QueryResult::Sales(self.filter.sales(&dataset.sales)),
            RecordType::Inventory => {
                QueryResult::Inventory(self.filter.inventory(&dataset.inventory))
            }
            RecordType::Forecasts => {
                QueryResult::Forecasts(self.filter.forecasts(&dataset.forecasts))
            }
        }
    }
}

/// Query output; serializes as the bare array, or as the full dataset object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum QueryResult {
    All(Dataset),
    Sales(Vec<SalesRecord>),
    Inventory(Vec<InventoryRecord>),
    Forecasts(Vec<ForecastRecord>),
}

impl QueryResult {
    pub fn len(&self) -> usize {
        match self {
            QueryResult::All(ds) => ds.sales.len() + ds.inventory.len() + ds.forecasts.len(),
            QueryResult::Sales(v) => v.len(),
            QueryResult::Inventory(v) => v.len(),
            QueryResult::Forecasts(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(t: Option<&str>, w: Option<&str>, c: Option<&str>) -> DataQuery {
        DataQuery::from_params(t, w, c)
    }

    #[test]
    fn parses_known_types() {
        assert_eq!(RecordType::from_tag("sales"), Some(RecordType::Sales));
        assert_eq!(RecordType::from_tag("inventory"), Some(RecordType::Inventory));
        assert_eq!(RecordType::from_tag("forecasts"), Some(RecordType::Forecasts));
        assert_eq!(RecordType::from_tag("all"), Some(RecordType::All));
        assert_eq!(RecordType::from_tag("Sales"), None);
    }

    #[test]
    fn unknown_type_falls_back_to_all_tables() {
        let ds = Dataset::sample();
        let q = query(Some("orders"), None, None);
        assert_eq!(q.record_type, RecordType::All);
        assert_eq!(q.execute(&ds), QueryResult::All(Dataset::sample()));
    }

    #[test]
    fn missing_or_empty_type_selects_all() {
        assert_eq!(query(None, None, None).record_type, RecordType::All);
        assert_eq!(query(Some(""), None, None).record_type, RecordType::All);
    }

    #[test]
    fn empty_filter_values_are_ignored() {
        let q = query(None, Some(""), Some(""));
        assert_eq!(q.filter, DataFilter::default());
    }

    #[test]
    fn sales_type_returns_only_sales() {
        let ds = Dataset::sample();
        match query(Some("sales"), None, None).execute(&ds) {
            QueryResult::Sales(rows) => assert_eq!(rows, ds.sales),
            other => panic!("expected sales, got {other:?}"),
        }
    }

    #[test]
    fn warehouse_filter_applies_to_sales_and_inventory() {
        let ds = Dataset::sample();
        let QueryResult::All(out) = query(None, Some("Москва"), None).execute(&ds) else {
            panic!("expected all tables");
        };
        assert_eq!(out.sales.len(), 3);
        assert_eq!(out.inventory.len(), 3);
        assert!(out.sales.iter().all(|r| r.warehouse == "Москва"));
        assert!(out.inventory.iter().all(|r| r.warehouse == "Москва"));
        assert_eq!(out.forecasts.len(), 5);
    }

    #[test]
    fn category_filter_applies_to_inventory_only() {
        let ds = Dataset::sample();
        let QueryResult::All(out) = query(None, None, Some("Обувь")).execute(&ds) else {
            panic!("expected all tables");
        };
        assert_eq!(out.sales.len(), 5);
        let skus: Vec<_> = out.inventory.iter().map(|r| r.sku.as_str()).collect();
        assert_eq!(skus, vec!["SKU003", "SKU004"]);
    }

    #[test]
    fn combined_filters_use_and_semantics() {
        let ds = Dataset::sample();
        match query(Some("inventory"), Some("СПб"), Some("Электроника")).execute(&ds) {
            QueryResult::Inventory(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].sku.as_str(), "SKU002");
            }
            other => panic!("expected inventory, got {other:?}"),
        }
    }

    #[test]
    fn forecasts_ignore_filters() {
        let ds = Dataset::sample();
        let out = query(Some("forecasts"), Some("СПб"), Some("Обувь")).execute(&ds);
        assert_eq!(out.len(), 5);
    }

    #[test]
    fn execute_leaves_dataset_untouched() {
        let ds = Dataset::sample();
        let _ = query(None, Some("СПб"), Some("Обувь")).execute(&ds);
        assert_eq!(ds, Dataset::sample());
    }

    #[test]
    fn unknown_warehouse_yields_empty_tables() {
        let ds = Dataset::sample();
        let out = query(Some("sales"), Some("Казань"), None).execute(&ds);
        assert!(out.is_empty());
    }

    #[test]
    fn single_table_serializes_as_array() {
        let ds = Dataset::sample();
        let json = serde_json::to_value(query(Some("inventory"), None, None).execute(&ds)).unwrap();
        assert!(json.is_array());
        let json = serde_json::to_value(query(None, None, None).execute(&ds)).unwrap();
        assert!(json["sales"].is_array());
        assert!(json["inventory"].is_array());
        assert!(json["forecasts"].is_array());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn warehouse() -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                Just(Some("Москва".to_string())),
                Just(Some("СПб".to_string())),
                "[a-z]{1,8}".prop_map(Some),
            ]
        }

        fn category() -> impl Strategy<Value = Option<String>> {
            prop_oneof![
                Just(None),
                Just(Some("Электроника".to_string())),
                Just(Some("Обувь".to_string())),
                "[a-z]{1,8}".prop_map(Some),
            ]
        }

        proptest! {
            /// Property: every returned row matches every filter that was set.
            #[test]
            fn filtered_rows_match(w in warehouse(), c in category()) {
                let filter = DataFilter { warehouse: w.clone(), category: c.clone() };
                let out = filter.apply(&Dataset::sample());
                if let Some(w) = &w {
                    prop_assert!(out.sales.iter().all(|r| &r.warehouse == w));
                    prop_assert!(out.inventory.iter().all(|r| &r.warehouse == w));
                }
                if let Some(c) = &c {
                    prop_assert!(out.inventory.iter().all(|r| &r.category == c));
                }
            }

            /// Property: repeating a filtered query gives the same answer, and
            /// an unfiltered query afterwards still sees the whole dataset.
            #[test]
            fn queries_do_not_compound(w in warehouse(), c in category()) {
                let filtered = DataQuery { record_type: RecordType::All, filter: DataFilter { warehouse: w, category: c } };
                let first = filtered.execute(&Dataset::sample());
                let second = filtered.execute(&Dataset::sample());
                prop_assert_eq!(first, second);

                let unfiltered = DataQuery::default().execute(&Dataset::sample());
                prop_assert_eq!(unfiltered, QueryResult::All(Dataset::sample()));
            }
        }
    }
}
