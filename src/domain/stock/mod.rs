pub mod entity;
pub mod invariants;

pub use entity::{AvailableSize, InventoryStock, StockLevels, StockReceipt};
pub use invariants::{
    parse_current_quantity, parse_min_stock_limit, parse_receipt_quantity,
    validate_stock_levels, validate_stock_receipt,
};
