//! Record traits: the attributes the query engine filters on.

/// A record that belongs to one warehouse (e.g. "Москва", "СПб").
pub trait WarehouseScoped {
    fn warehouse(&self) -> &str;

    /// Equality match on the warehouse name.
    fn in_warehouse(&self, warehouse: &str) -> bool {
        self.warehouse() == warehouse
    }
}

/// A record that belongs to one product category.
pub trait Categorized {
    fn category(&self) -> &str;

    /// Equality match on the category name.
    fn in_category(&self, category: &str) -> bool {
        self.category() == category
    }
}
