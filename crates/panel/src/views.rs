//! Declarative table views.
//!
//! Each function maps the current collection to the rows a page displays,
//! in storage order. Templates only print these rows, so what a page shows
//! can be tested without rendering HTML.

use rust_decimal::Decimal;

use almacen_core::{Employee, InventoryItem, Sale};

/// Number of columns in the stock report table.
pub const STOCK_REPORT_COLUMNS: usize = 3;

/// A row of the inventory table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryRow {
    /// Position in the rendered list, submitted back by the delete button.
    pub index: usize,
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub quantity: i64,
}

/// A row of the employee table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: String,
    pub name: String,
    pub position: String,
}

/// A row of the sales report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SaleRow {
    pub id: String,
    pub name: String,
    pub role: String,
    pub total: Decimal,
}

/// A row of the stock report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockRow {
    pub id: String,
    pub name: String,
    pub quantity: i64,
}

/// Body of the stock report table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StockReport {
    /// No threshold submitted yet (or the last one was invalid): empty table.
    #[default]
    NotRequested,
    /// Matching products.
    Rows(Vec<StockRow>),
    /// The threshold matched nothing; one row spanning the table.
    Empty {
        /// Informational text shown in the spanning row.
        message: String,
    },
}

impl StockReport {
    /// Data rows to print (empty unless [`StockReport::Rows`]).
    #[must_use]
    pub fn rows(&self) -> &[StockRow] {
        match self {
            Self::Rows(rows) => rows,
            Self::NotRequested | Self::Empty { .. } => &[],
        }
    }

    /// The spanning informational row, if any.
    #[must_use]
    pub fn empty_message(&self) -> Option<&str> {
        match self {
            Self::Empty { message } => Some(message.as_str()),
            Self::NotRequested | Self::Rows(_) => None,
        }
    }

    /// Column span of the informational row.
    #[must_use]
    pub const fn colspan(&self) -> usize {
        STOCK_REPORT_COLUMNS
    }
}

/// Rows for the inventory table.
#[must_use]
pub fn inventory_rows(items: &[InventoryItem]) -> Vec<InventoryRow> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| InventoryRow {
            index,
            id: item.id.clone(),
            name: item.name.clone(),
            price: item.price,
            quantity: item.quantity,
        })
        .collect()
}

/// Rows for the employee table.
#[must_use]
pub fn employee_rows(employees: &[Employee]) -> Vec<EmployeeRow> {
    employees
        .iter()
        .map(|e| EmployeeRow {
            id: e.id.clone(),
            name: e.name.clone(),
            position: e.position.clone(),
        })
        .collect()
}

/// Rows for the sales report.
#[must_use]
pub fn sale_rows(sales: &[Sale]) -> Vec<SaleRow> {
    sales
        .iter()
        .map(|s| SaleRow {
            id: s.id.clone(),
            name: s.name.clone(),
            role: s.role.clone(),
            total: s.total,
        })
        .collect()
}

/// Report body for the products that matched `threshold`.
#[must_use]
pub fn stock_report(threshold: i64, matches: &[InventoryItem]) -> StockReport {
    if matches.is_empty() {
        return StockReport::Empty {
            message: format!("No hay productos con stock menor o igual a {threshold}."),
        };
    }

    StockReport::Rows(
        matches
            .iter()
            .map(|item| StockRow {
                id: item.id.clone(),
                name: item.name.clone(),
                quantity: item.quantity,
            })
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, quantity: i64) -> InventoryItem {
        InventoryItem {
            id: id.to_string(),
            name: format!("Producto {id}"),
            price: Decimal::new(250, 2),
            quantity,
        }
    }

    #[test]
    fn test_inventory_rows_keep_order_and_index() {
        let rows = inventory_rows(&[item("B", 1), item("A", 2)]);
        let summary: Vec<_> = rows.iter().map(|r| (r.index, r.id.as_str())).collect();
        assert_eq!(summary, [(0, "B"), (1, "A")]);
        assert_eq!(rows[0].price, Decimal::new(250, 2));
    }

    #[test]
    fn test_sale_rows() {
        let rows = sale_rows(&Sale::seed());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Ana López");
        assert_eq!(rows[1].role, "Vendedor");
    }

    #[test]
    fn test_employee_rows() {
        let employees = [Employee {
            id: "E1".to_string(),
            name: "Luis".to_string(),
            position: "Almacenista".to_string(),
        }];
        let rows = employee_rows(&employees);
        assert_eq!(rows[0].position, "Almacenista");
    }

    #[test]
    fn test_stock_report_rows() {
        let report = stock_report(5, &[item("A", 1), item("C", 5)]);
        assert_eq!(report.rows().len(), 2);
        assert_eq!(report.rows()[1].quantity, 5);
        assert!(report.empty_message().is_none());
    }

    #[test]
    fn test_stock_report_empty_spans_table() {
        let report = stock_report(3, &[]);
        assert!(report.rows().is_empty());
        assert_eq!(
            report.empty_message(),
            Some("No hay productos con stock menor o igual a 3.")
        );
        assert_eq!(report.colspan(), 3);
    }

    #[test]
    fn test_not_requested_report_is_blank() {
        let report = StockReport::default();
        assert!(report.rows().is_empty());
        assert!(report.empty_message().is_none());
    }
}
