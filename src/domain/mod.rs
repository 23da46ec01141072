// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Entities are plain records keyed by database-assigned integer ids.
// Input validation is pure: raw form strings in, validated input or a
// ValidationError (whose Display is the user-facing message) out.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod catalog;
pub mod movement;
pub mod staff;
pub mod stock;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Staff Domain
pub use staff::{validate_employee_input, Employee, EmployeeType, Group, NewEmployee};

// Catalog Domain
pub use catalog::{validate_product_input, validate_size_input, NewProduct, NewSize, Product, Size};

// Stock Domain
pub use stock::{
    parse_current_quantity, parse_min_stock_limit, parse_receipt_quantity,
    validate_stock_levels, validate_stock_receipt, AvailableSize, InventoryStock, StockLevels,
    StockReceipt,
};

// Movements
pub use movement::{validate_delivery_input, DeliveryRequest, Movement, DELIVERY_MOVEMENT_TYPE};

// ============================================================================
// VALIDATION ERRORS
// ============================================================================

use thiserror::Error;

/// Input validation failures.
/// The Display text of each variant is shown to the user verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter a valid employee name and select a group.")]
    InvalidEmployeeInput,

    #[error("Please select an employee to update.")]
    NoEmployeeSelected,

    #[error("Please enter valid product name, description and applicability type.")]
    InvalidProductInput,

    #[error("Please select a product to update.")]
    NoProductSelected,

    #[error("Please enter valid size value and notation type.")]
    InvalidSizeInput,

    #[error("Please select a size to update.")]
    NoSizeSelected,

    #[error("Invalid quantity. Must be a positive number.")]
    InvalidReceiptQuantity,

    #[error("Invalid min stock limit. Must be a non-negative number.")]
    InvalidMinStockLimit,

    #[error("Invalid current quantity. Must be a non-negative number.")]
    InvalidCurrentQuantity,

    #[error("Please select a product and a size.")]
    MissingStockSelection,

    #[error("No stock item selected for update.")]
    NoStockItemSelected,

    #[error("Invalid quantity. Must be a positive number.")]
    InvalidDeliveryQuantity,

    #[error("Please select an employee, a product and a size.")]
    MissingDeliverySelection,
}

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// True when the raw input holds something other than whitespace
pub(crate) fn is_filled(input: &str) -> bool {
    !input.trim().is_empty()
}

/// Parse an integer form field, tolerating surrounding whitespace.
/// Form numbers are 32-bit; anything wider is rejected as invalid input.
pub(crate) fn parse_int(input: &str) -> Option<i64> {
    input.trim().parse::<i32>().ok().map(i64::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_int_tolerates_whitespace() {
        assert_eq!(parse_int(" 42 "), Some(42));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("4.5"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_parse_int_is_limited_to_32_bits() {
        assert_eq!(parse_int("2147483647"), Some(2_147_483_647));
        assert_eq!(parse_int("2147483648"), None);
        assert_eq!(parse_int("9223372036854775807"), None);
    }

    #[test]
    fn test_is_filled() {
        assert!(is_filled("a"));
        assert!(!is_filled("   "));
        assert!(!is_filled(""));
    }
}
