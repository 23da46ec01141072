// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories are data mappers over fixed, parameterized SQL
// - NO event emission
// - NO cross-repository calls
// - Rejection rules for deliveries live in the schema, not here

pub mod employee_repository;
pub mod employee_type_repository;
pub mod group_repository;
pub mod inventory_stock_repository;
pub mod movement_repository;
pub mod product_repository;
pub mod size_repository;


pub use employee_repository::{EmployeeRepository, SqliteEmployeeRepository};
pub use employee_type_repository::{EmployeeTypeRepository, SqliteEmployeeTypeRepository};
pub use group_repository::{GroupRepository, SqliteGroupRepository};
pub use inventory_stock_repository::{InventoryStockRepository, SqliteInventoryStockRepository};
pub use movement_repository::{MovementRepository, SqliteMovementRepository};
pub use product_repository::{ProductRepository, SqliteProductRepository};
pub use size_repository::{SizeRepository, SqliteSizeRepository};

#[cfg(test)]
pub use employee_repository::MockEmployeeRepository;
#[cfg(test)]
pub use group_repository::MockGroupRepository;
#[cfg(test)]
pub use inventory_stock_repository::MockInventoryStockRepository;
#[cfg(test)]
pub use movement_repository::MockMovementRepository;
#[cfg(test)]
pub use product_repository::MockProductRepository;
#[cfg(test)]
pub use size_repository::MockSizeRepository;
