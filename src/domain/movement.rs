use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{parse_int, ValidationError, ValidationResult};

/// Movement type recorded by the delivery transaction
pub const DELIVERY_MOVEMENT_TYPE: &str = "Delivery";

/// One row of the movement history, with display labels already joined in.
/// Movements are immutable once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Movement {
    pub movement_id: i64,
    pub movement_date: DateTime<Utc>,
    pub movement_type: String,
    pub quantity_moved: i64,
    pub inventory_stock_id: i64,
    pub product_name: String,
    pub product_description: Option<String>,
    pub product_size: String,
    pub size_notation: String,
    pub remaining_stock: i64,
    pub min_stock_limit: i64,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
    pub employee_group: Option<String>,
    pub employee_type: Option<String>,
    pub notes: Option<String>,
}

/// Validated delivery, ready for the database transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRequest {
    pub inventory_stock_id: i64,
    pub employee_id: i64,
    pub quantity: i64,
}

/// Quantity is checked first, then the employee and stock selections
pub fn validate_delivery_input(
    inventory_stock_id: i64,
    employee_id: i64,
    quantity: &str,
) -> ValidationResult<DeliveryRequest> {
    let quantity = match parse_int(quantity) {
        Some(quantity) if quantity > 0 => quantity,
        _ => return Err(ValidationError::InvalidDeliveryQuantity),
    };

    if inventory_stock_id <= 0 || employee_id <= 0 {
        return Err(ValidationError::MissingDeliverySelection);
    }

    Ok(DeliveryRequest {
        inventory_stock_id,
        employee_id,
        quantity,
    })
}
