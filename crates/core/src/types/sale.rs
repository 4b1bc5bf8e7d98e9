//! Sales records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Identified;

/// A sale attributed to a salesperson. Read-only in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sale {
    /// Sale code (e.g. `V001`).
    pub id: String,
    /// Salesperson name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Salesperson position.
    #[serde(rename = "puesto")]
    pub role: String,
    /// Sale total, stored as a JSON number.
    #[serde(with = "super::amount")]
    pub total: Decimal,
}

impl Sale {
    /// Sample sales written the first time the sales report is opened.
    #[must_use]
    pub fn seed() -> Vec<Self> {
        vec![
            Self {
                id: "V001".to_string(),
                name: "Juan Pérez".to_string(),
                role: "Cajero".to_string(),
                total: Decimal::new(95050, 2),
            },
            Self {
                id: "V002".to_string(),
                name: "Ana López".to_string(),
                role: "Vendedor".to_string(),
                total: Decimal::new(120_000, 2),
            },
        ]
    }
}

impl Identified for Sale {
    fn id(&self) -> &str {
        &self.id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_records() {
        let seed = Sale::seed();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[0].id, "V001");
        assert_eq!(seed[0].name, "Juan Pérez");
        assert_eq!(seed[0].total.to_string(), "950.50");
        assert_eq!(seed[1].id, "V002");
        assert_eq!(seed[1].name, "Ana López");
        assert_eq!(seed[1].total.to_string(), "1200.00");
    }

    #[test]
    fn test_seed_totals_read_back_unchanged() {
        for sale in Sale::seed() {
            assert_eq!(crate::types::amount::stored(sale.total), Some(sale.total));
        }
    }

    #[test]
    fn test_decodes_browser_storage_format() {
        let raw = r#"{"id":"V001","nombre":"Juan Pérez","puesto":"Cajero","total":950.5}"#;
        let sale: Sale = serde_json::from_str(raw).unwrap();
        assert_eq!(sale.role, "Cajero");
        assert_eq!(sale.total, Decimal::new(9505, 1));
    }
}
