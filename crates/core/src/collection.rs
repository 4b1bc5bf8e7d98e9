//! Whole-collection operations.
//!
//! Collections are always read, changed in memory and written back whole.
//! These helpers only touch the in-memory `Vec`.

use crate::types::{Identified, InventoryItem};

/// Remove the entry the user clicked.
///
/// The rendered row carries both its position and its id. The entry at
/// `index` is removed when its id still matches; if the collection moved
/// underneath the page, the first entry with `id` is removed instead.
/// Returns `None` (and leaves the collection untouched) when no entry
/// carries `id`.
pub fn remove_entry<T: Identified>(items: &mut Vec<T>, index: usize, id: &str) -> Option<T> {
    let position = match items.get(index) {
        Some(item) if item.id() == id => index,
        _ => items.iter().position(|item| item.id() == id)?,
    };
    Some(items.remove(position))
}

/// Inventory entries with `quantity <= threshold`, in storage order.
#[must_use]
pub fn stock_at_most(items: &[InventoryItem], threshold: i64) -> Vec<InventoryItem> {
    items
        .iter()
        .filter(|item| item.is_stock_at_most(threshold))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    fn item(id: &str, quantity: i64) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Producto {id}"),
            price: Decimal::ONE,
            quantity,
        }
    }

    fn ids(items: &[InventoryItem]) -> Vec<&str> {
        items.iter().map(|i| i.id.as_str()).collect()
    }

    #[test]
    fn test_remove_at_rendered_index() {
        let mut items = vec![item("A", 1), item("B", 2), item("C", 3)];
        let removed = remove_entry(&mut items, 1, "B");

        assert_eq!(removed.map(|i| i.id), Some("B".to_string()));
        assert_eq!(ids(&items), ["A", "C"]);
    }

    #[test]
    fn test_remove_falls_back_to_id_when_index_drifted() {
        // Page rendered [A, B, C]; A was removed elsewhere before the click on C (index 2).
        let mut items = vec![item("B", 2), item("C", 3)];
        let removed = remove_entry(&mut items, 2, "C");

        assert_eq!(removed.map(|i| i.id), Some("C".to_string()));
        assert_eq!(ids(&items), ["B"]);
    }

    #[test]
    fn test_remove_prefers_clicked_duplicate() {
        let mut items = vec![item("A", 1), item("A", 2), item("B", 3)];
        let removed = remove_entry(&mut items, 1, "A");

        assert_eq!(removed.map(|i| i.quantity), Some(2));
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut items = vec![item("A", 1), item("B", 2)];
        assert!(remove_entry(&mut items, 0, "Z").is_none());
        assert_eq!(ids(&items), ["A", "B"]);
    }

    #[test]
    fn test_stock_at_most_preserves_order() {
        let items = vec![item("A", 10), item("B", 2), item("C", 5), item("D", 6)];
        let low = stock_at_most(&items, 5);
        assert_eq!(ids(&low), ["B", "C"]);
    }

    #[test]
    fn test_stock_at_most_with_negative_threshold() {
        let items = vec![item("A", 0), item("B", -3)];
        assert_eq!(ids(&stock_at_most(&items, -1)), ["B"]);
        assert!(stock_at_most(&[], 100).is_empty());
    }
}
