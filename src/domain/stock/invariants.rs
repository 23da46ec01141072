use super::entity::{StockLevels, StockReceipt};
use crate::domain::{parse_int, ValidationError, ValidationResult};

/// Received quantity must be a positive integer
pub fn parse_receipt_quantity(input: &str) -> ValidationResult<i64> {
    match parse_int(input) {
        Some(quantity) if quantity > 0 => Ok(quantity),
        _ => Err(ValidationError::InvalidReceiptQuantity),
    }
}

/// Absolute quantity may be zero but never negative
pub fn parse_current_quantity(input: &str) -> ValidationResult<i64> {
    match parse_int(input) {
        Some(quantity) if quantity >= 0 => Ok(quantity),
        _ => Err(ValidationError::InvalidCurrentQuantity),
    }
}

pub fn parse_min_stock_limit(input: &str) -> ValidationResult<i64> {
    match parse_int(input) {
        Some(limit) if limit >= 0 => Ok(limit),
        _ => Err(ValidationError::InvalidMinStockLimit),
    }
}

/// Checked in form order: quantity, limit, then the product/size selection
pub fn validate_stock_receipt(
    product_id: i64,
    size_id: i64,
    quantity: &str,
    min_stock_limit: &str,
) -> ValidationResult<StockReceipt> {
    let quantity = parse_receipt_quantity(quantity)?;
    let min_stock_limit = parse_min_stock_limit(min_stock_limit)?;

    if product_id <= 0 || size_id <= 0 {
        return Err(ValidationError::MissingStockSelection);
    }

    Ok(StockReceipt {
        product_id,
        size_id,
        quantity,
        min_stock_limit,
    })
}

pub fn validate_stock_levels(
    current_quantity: &str,
    min_stock_limit: &str,
) -> ValidationResult<StockLevels> {
    Ok(StockLevels {
        current_quantity: parse_current_quantity(current_quantity)?,
        min_stock_limit: parse_min_stock_limit(min_stock_limit)?,
    })
}
