use serde::{Deserialize, Serialize};

/// Current quantity and reorder threshold for one (product, size) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryStock {
    pub inventory_stock_id: i64,
    pub product_id: i64,

    /// Display only
    pub product_name: Option<String>,

    pub size_id: i64,

    /// Display only
    pub size_value: Option<String>,

    pub current_quantity: i64,
    pub min_stock_limit: i64,
}

impl InventoryStock {
    pub fn is_below_minimum(&self) -> bool {
        self.current_quantity < self.min_stock_limit
    }

    /// Same row with overwritten levels; product and size are kept
    pub fn with_levels(&self, levels: StockLevels) -> Self {
        Self {
            current_quantity: levels.current_quantity,
            min_stock_limit: levels.min_stock_limit,
            ..self.clone()
        }
    }
}

/// A stock row that still has units, as offered in the delivery size list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableSize {
    pub inventory_stock_id: i64,
    pub size_value: String,
}

/// Incoming units for a pair: quantity is added, the limit replaces the old one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockReceipt {
    pub product_id: i64,
    pub size_id: i64,
    pub quantity: i64,
    pub min_stock_limit: i64,
}

/// Absolute levels for an existing stock row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockLevels {
    pub current_quantity: i64,
    pub min_stock_limit: i64,
}
