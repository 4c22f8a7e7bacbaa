//! Column layouts expected in uploaded spreadsheets.

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::{Value as JsonValue, json};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UploadTemplate {
    pub columns: Vec<&'static str>,
    pub required: Vec<&'static str>,
    pub example: JsonValue,
}

/// Templates keyed by data kind (`products`, `inventory`, `sales`).
pub fn upload_templates() -> BTreeMap<&'static str, UploadTemplate> {
    let mut templates = BTreeMap::new();

    templates.insert(
        "products",
        UploadTemplate {
            columns: vec![
                "sku",
                "name",
                "description",
                "category",
                "brand",
                "unit_cost",
                "unit_price",
                "weight",
                "dimensions",
            ],
            required: vec!["sku", "name"],
            example: json!({
                "sku": "PROD001",
                "name": "Название продукта",
                "description": "Описание продукта",
                "category": "Электроника",
                "brand": "Generic",
                "unit_cost": 100.0,
                "unit_price": 150.0,
                "weight": 0.5,
                "dimensions": "10x5x2 см",
            }),
        },
    );

    templates.insert(
        "inventory",
        UploadTemplate {
            columns: vec![
                "sku",
                "current_stock",
                "min_stock",
                "max_stock",
                "reorder_point",
                "safety_stock",
                "lead_time_days",
            ],
            required: vec!["sku"],
            example: json!({
                "sku": "PROD001",
                "current_stock": 50.0,
                "min_stock": 10.0,
                "max_stock": 100.0,
                "reorder_point": 15.0,
                "safety_stock": 5.0,
                "lead_time_days": 7,
            }),
        },
    );

    templates.insert(
        "sales",
        UploadTemplate {
            columns: vec![
                "sku",
                "sale_date",
                "quantity",
                "revenue",
                "cost",
                "customer_id",
                "transaction_id",
            ],
            required: vec!["sku", "sale_date", "quantity"],
            example: json!({
                "sku": "PROD001",
                "sale_date": "2024-01-15",
                "quantity": 5.0,
                "revenue": 750.0,
                "cost": 500.0,
                "customer_id": "CUST001",
                "transaction_id": "TXN001",
            }),
        },
    );

    templates
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn three_templates() {
        let t = upload_templates();
        assert_eq!(t.keys().copied().collect::<Vec<_>>(), vec!["inventory", "products", "sales"]);
    }

    #[test]
    fn required_columns_are_listed_columns() {
        for (kind, template) in upload_templates() {
            for col in &template.required {
                assert!(template.columns.contains(col), "{kind}: {col} missing from columns");
            }
        }
    }

    #[test]
    fn examples_cover_every_column() {
        for (kind, template) in upload_templates() {
            let example = template.example.as_object().unwrap();
            for col in &template.columns {
                assert!(example.contains_key(*col), "{kind}: example lacks {col}");
            }
        }
    }
}
