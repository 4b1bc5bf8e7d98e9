//! Form input parsing.
//!
//! Raw form values are trimmed, required fields must be non-empty and
//! numeric fields must parse completely. Prices are returned as they will
//! read back from the store. Error messages are shown to the user verbatim.

use rust_decimal::Decimal;
use thiserror::Error;

use crate::types::{Employee, InventoryItem, amount};

/// A rejected form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Product form with an empty field or a non-numeric price/quantity.
    #[error("Completa todos los campos del producto.")]
    IncompleteItem,

    /// Employee form with an empty field.
    #[error("Completa todos los campos del empleado.")]
    IncompleteEmployee,

    /// Stock report threshold that is not an integer.
    #[error("Ingresa un número válido para el stock.")]
    InvalidThreshold,
}

/// Build an inventory item from raw form values.
///
/// # Errors
///
/// Returns [`ValidationError::IncompleteItem`] if `id` or `name` is blank,
/// if `price`/`quantity` do not parse, or if the price is too large to be
/// stored.
pub fn parse_item(
    id: &str,
    name: &str,
    price: &str,
    quantity: &str,
) -> Result<InventoryItem, ValidationError> {
    let id = required(id).ok_or(ValidationError::IncompleteItem)?;
    let name = required(name).ok_or(ValidationError::IncompleteItem)?;
    let price = parse_decimal(price)
        .and_then(amount::stored)
        .ok_or(ValidationError::IncompleteItem)?;
    let quantity = parse_integer(quantity).ok_or(ValidationError::IncompleteItem)?;

    Ok(InventoryItem {
        id,
        name,
        price,
        quantity,
    })
}

/// Build an employee from raw form values.
///
/// # Errors
///
/// Returns [`ValidationError::IncompleteEmployee`] if any field is blank.
pub fn parse_employee(
    id: &str,
    name: &str,
    position: &str,
) -> Result<Employee, ValidationError> {
    let missing = || ValidationError::IncompleteEmployee;
    Ok(Employee {
        id: required(id).ok_or_else(missing)?,
        name: required(name).ok_or_else(missing)?,
        position: required(position).ok_or_else(missing)?,
    })
}

/// Parse the maximum stock level for the inventory report.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidThreshold`] unless the input is an integer.
pub fn parse_threshold(raw: &str) -> Result<i64, ValidationError> {
    parse_integer(raw).ok_or(ValidationError::InvalidThreshold)
}

fn required(raw: &str) -> Option<String> {
    let value = raw.trim();
    (!value.is_empty()).then(|| value.to_string())
}

fn parse_integer(raw: &str) -> Option<i64> {
    raw.trim().parse().ok()
}

fn parse_decimal(raw: &str) -> Option<Decimal> {
    let value = raw.trim();
    if value.is_empty() {
        return None;
    }
    Decimal::from_str_exact(value)
        .or_else(|_| Decimal::from_scientific(value))
        .ok()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn test_parse_item_valid() {
        let item = parse_item("P1", "Pan", "10", "5").unwrap();
        assert_eq!(item.id, "P1");
        assert_eq!(item.name, "Pan");
        assert_eq!(item.price, Decimal::new(10, 0));
        assert_eq!(item.quantity, 5);
    }

    #[test]
    fn test_parse_item_trims_fields() {
        let item = parse_item("  P2 ", " Leche entera ", " 23.50 ", " 12 ").unwrap();
        assert_eq!(item.id, "P2");
        assert_eq!(item.name, "Leche entera");
        assert_eq!(item.price, Decimal::new(2350, 2));
        assert_eq!(item.quantity, 12);
    }

    #[test]
    fn test_parse_item_accepts_unchecked_signs() {
        let item = parse_item("P3", "Ajuste", "-1.5", "-4").unwrap();
        assert_eq!(item.price, Decimal::new(-15, 1));
        assert_eq!(item.quantity, -4);
    }

    #[test]
    fn test_parse_item_rejects_blank_text() {
        assert_eq!(
            parse_item("", "Pan", "10", "5"),
            Err(ValidationError::IncompleteItem)
        );
        assert_eq!(
            parse_item("P1", "   ", "10", "5"),
            Err(ValidationError::IncompleteItem)
        );
    }

    #[test]
    fn test_parse_item_rejects_non_numeric() {
        assert!(parse_item("P1", "Pan", "diez", "5").is_err());
        assert!(parse_item("P1", "Pan", "", "5").is_err());
        assert!(parse_item("P1", "Pan", "10", "cinco").is_err());
        assert!(parse_item("P1", "Pan", "10", "2.5").is_err());
    }

    #[test]
    fn test_parse_item_rejects_unstorable_prices() {
        for price in [
            "79228162514264337593543950335",
            "-79228162514264337593543950335",
            "0.00000000000000000000000000001",
            "-1e-30",
        ] {
            assert_eq!(
                parse_item("P1", "Pan", price, "5"),
                Err(ValidationError::IncompleteItem),
                "{price}"
            );
        }
    }

    #[test]
    fn test_parse_item_price_is_the_stored_price() {
        let item = parse_item("P1", "Pan", "0.123456789012345678", "5").unwrap();
        assert_eq!(item.price, Decimal::from_str("0.12345678901234568").unwrap());

        let item = parse_item("P2", "Leche", "1e3", "5").unwrap();
        assert_eq!(item.price, Decimal::new(1000, 0));
    }

    #[test]
    fn test_parse_employee() {
        let employee = parse_employee("E1", " Ana ", "Cajera").unwrap();
        assert_eq!(employee.name, "Ana");
        assert_eq!(employee.position, "Cajera");

        assert_eq!(
            parse_employee("E1", "Ana", ""),
            Err(ValidationError::IncompleteEmployee)
        );
    }

    #[test]
    fn test_parse_threshold() {
        assert_eq!(parse_threshold("5"), Ok(5));
        assert_eq!(parse_threshold(" -2 "), Ok(-2));
        assert_eq!(parse_threshold("abc"), Err(ValidationError::InvalidThreshold));
        assert_eq!(parse_threshold(""), Err(ValidationError::InvalidThreshold));
    }

    #[test]
    fn test_error_messages_are_user_facing() {
        assert_eq!(
            ValidationError::IncompleteItem.to_string(),
            "Completa todos los campos del producto."
        );
        assert_eq!(
            ValidationError::InvalidThreshold.to_string(),
            "Ingresa un número válido para el stock."
        );
    }
}
