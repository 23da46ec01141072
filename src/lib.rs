// src/lib.rs
// InventoryHub - Local-first inventory, stock and delivery manager
//
// Architecture:
// - Domain: plain entities and pure input validation
// - Repositories: SQLite persistence behind traits; stock-changing writes
//   run in immediate transactions
// - View-models: per-view state and commands; failures become status messages
// - Event-driven: views refresh each other only through the event bus
// - Application layer: AppState plus DTO-returning commands for a UI shell

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod view_models;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    AvailableSize, Employee, EmployeeType, Group, InventoryStock, Movement, Product, Size,
    ValidationError, DELIVERY_MOVEMENT_TYPE,
};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::{AppConfig, DatabaseConfig, FormDefaults};
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, CatalogChanged, CatalogEntity, ChangeKind, DeliveryRegistered, DomainEvent,
    EventBus, EventLogEntry, StockItemDeleted, StockItemUpdated, StockReceived,
};

// ============================================================================
// PUBLIC API - Database
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{
    EmployeeRepository, EmployeeTypeRepository, GroupRepository, InventoryStockRepository,
    MovementRepository, ProductRepository, SizeRepository, SqliteEmployeeRepository,
    SqliteEmployeeTypeRepository, SqliteGroupRepository, SqliteInventoryStockRepository,
    SqliteMovementRepository, SqliteProductRepository, SqliteSizeRepository,
};

// ============================================================================
// PUBLIC API - View-models
// ============================================================================

pub use view_models::{
    CommandState, DeliveryViewModel, EditorCommands, EmployeeViewModel, InventoryStockViewModel,
    MessageKind, MovementHistoryViewModel, ProductViewModel, SizeViewModel, StatusMessage,
};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::AppState;

// Re-export application submodules
pub use application::commands;
pub use application::dto;
