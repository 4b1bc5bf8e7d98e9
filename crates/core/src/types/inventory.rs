//! Inventory records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Identified;

/// A product in the inventory collection.
///
/// Neither the price nor the quantity sign is checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryItem {
    /// Caller-supplied product code.
    pub id: String,
    /// Product name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Unit price, stored as a JSON number.
    #[serde(rename = "precio", with = "super::amount")]
    pub price: Decimal,
    /// Units in stock.
    #[serde(rename = "cantidad")]
    pub quantity: i64,
}

impl InventoryItem {
    /// Whether the stock level is at or below `threshold`.
    #[must_use]
    pub const fn is_stock_at_most(&self, threshold: i64) -> bool {
        self.quantity <= threshold
    }
}

impl Identified for InventoryItem {
    fn id(&self) -> &str {
        &self.id
    }
}
