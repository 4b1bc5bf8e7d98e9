//! Sales controller.
//!
//! Sales are read-only. The first time the report is opened on an empty
//! store, two sample sales are written so later loads see the same data.

use almacen_core::Sale;
use almacen_core::keys::SALES;

use crate::store::{JsonStore, StoreError};

#[derive(Debug, Clone)]
pub struct SalesController {
    store: JsonStore,
}

impl SalesController {
    #[must_use]
    pub const fn new(store: JsonStore) -> Self {
        Self { store }
    }

    /// The stored sales, seeding the sample records if there are none.
    ///
    /// A stored empty list is kept as is; only an absent or undecodable
    /// value is replaced by the seed.
    ///
    /// # Errors
    ///
    /// Returns an error if the seed cannot be written.
    pub fn load(&self) -> Result<Vec<Sale>, StoreError> {
        if let Some(sales) = self.store.get_optional(SALES) {
            return Ok(sales);
        }

        let seed = Sale::seed();
        self.store.set(SALES, &seed)?;
        tracing::info!(count = seed.len(), "Seeded sample sales");
        Ok(seed)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn test_empty_store_is_seeded_and_persisted() {
        let store = JsonStore::in_memory();
        let sales = SalesController::new(store.clone());

        let loaded = sales.load().unwrap();
        assert_eq!(loaded, Sale::seed());
        assert_eq!(store.try_get(SALES).unwrap(), Some(Sale::seed()));
    }

    #[test]
    fn test_existing_sales_are_not_reseeded() {
        let store = JsonStore::in_memory();
        let own = vec![Sale {
            id: "V010".to_string(),
            name: "Rosa".to_string(),
            role: "Cajera".to_string(),
            total: Decimal::new(10, 0),
        }];
        store.set(SALES, &own).unwrap();

        assert_eq!(SalesController::new(store).load().unwrap(), own);
    }

    #[test]
    fn test_stored_empty_list_is_kept() {
        let store = JsonStore::in_memory();
        store.set(SALES, &Vec::new()).unwrap();
        assert!(SalesController::new(store).load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_sales_are_reseeded() {
        let store = JsonStore::in_memory();
        store.backend().set_item("ventas", "null".to_string()).unwrap();

        let loaded = SalesController::new(store.clone()).load().unwrap();
        assert_eq!(loaded.len(), 2);
        assert_eq!(store.try_get(SALES).unwrap().map(|s| s.len()), Some(2));
    }
}
