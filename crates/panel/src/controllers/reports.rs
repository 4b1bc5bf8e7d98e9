//! Inventory-by-stock report.

use almacen_core::InventoryItem;
use almacen_core::ValidationError;
use almacen_core::collection::stock_at_most;
use almacen_core::keys::INVENTORY;
use almacen_core::validation::parse_threshold;

use crate::store::JsonStore;

/// Result of a stock query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockQuery {
    /// The parsed threshold.
    pub threshold: i64,
    /// Items with `quantity <= threshold`, in storage order.
    pub items: Vec<InventoryItem>,
}

#[derive(Debug, Clone)]
pub struct ReportController {
    store: JsonStore,
}

impl ReportController {
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// Products whose stock is at most the submitted threshold.
    ///
    /// The inventory is only read once the threshold has parsed.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidThreshold`] if `raw_threshold` is
    /// not an integer.
    pub fn low_stock(&self, raw_threshold: &str) -> Result<StockQuery, ValidationError> {
        let threshold = parse_threshold(raw_threshold)?;
        let inventory = self.store.get(INVENTORY, Vec::new());
        let items = stock_at_most(&inventory, threshold);

        tracing::debug!(threshold, matched = items.len(), "Stock report");
        Ok(StockQuery { threshold, items })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn store_with(quantities: &[(&str, i64)]) -> JsonStore {
        let store = JsonStore::in_memory();
        let items: Vec<_> = quantities
            .iter()
            .map(|(id, quantity)| InventoryItem {
                id: (*id).to_string(),
                name: (*id).to_string(),
                price: Decimal::ONE,
                quantity: *quantity,
            })
            .collect();
        store.set(INVENTORY, &items).unwrap();
        store
    }

    #[test]
    fn test_low_stock_filters_inclusively_in_order() {
        let reports = ReportController::new(store_with(&[("A", 8), ("B", 3), ("C", 5), ("D", 0)]));
        let query = reports.low_stock("5").unwrap();

        assert_eq!(query.threshold, 5);
        let ids: Vec<_> = query.items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["B", "C", "D"]);
    }

    #[test]
    fn test_no_matches() {
        let reports = ReportController::new(store_with(&[("A", 8)]));
        assert!(reports.low_stock("2").unwrap().items.is_empty());
    }

    #[test]
    fn test_invalid_threshold() {
        let reports = ReportController::new(store_with(&[("A", 8)]));
        assert_eq!(
            reports.low_stock("mucho"),
            Err(ValidationError::InvalidThreshold)
        );
    }
}
