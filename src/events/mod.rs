// src/events/mod.rs
//
// Internal Event System - Public API
//
// Views never hold references to each other; a view-model emits a fact
// after a successful write and the registered refresh handlers reload
// whichever other views display that data.
//
// EventHandler is internal to the bus and is NOT exported.

pub mod bus;
pub mod handlers;
pub mod types;

// ============================================================================
// PUBLIC EXPORTS - Event Types and Bus Only
// ============================================================================

pub use types::DomainEvent;

pub use types::{
    // Catalog
    CatalogChanged,
    CatalogEntity,
    ChangeKind,

    // Deliveries
    DeliveryRegistered,

    // Stock
    StockItemDeleted,
    StockItemUpdated,
    StockReceived,
};

pub use bus::{EventBus, EventLogEntry};

pub use handlers::{register_view_refresh_handlers, RefreshTargets};

/// Initialize a new event bus
pub fn create_event_bus() -> EventBus {
    EventBus::new()
}
