pub mod entity;
pub mod invariants;

pub use entity::{NewProduct, NewSize, Product, Size};
pub use invariants::{validate_product_input, validate_size_input};
