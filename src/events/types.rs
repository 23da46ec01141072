// events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the ids needed to react; listeners reload what they show

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// STOCK EVENTS
// ============================================================================

/// Emitted after units were received for a (product, size) pair,
/// whether a new stock row was created or an existing one topped up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockReceived {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: i64,
    pub size_id: i64,
    pub quantity: i64,
    pub min_stock_limit: i64,
}

impl StockReceived {
    pub fn new(product_id: i64, size_id: i64, quantity: i64, min_stock_limit: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
            size_id,
            quantity,
            min_stock_limit,
        }
    }
}

impl DomainEvent for StockReceived {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "StockReceived" }
}

/// Emitted when a stock row's levels were overwritten
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub inventory_stock_id: i64,
}

impl StockItemUpdated {
    pub fn new(inventory_stock_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            inventory_stock_id,
        }
    }
}

impl DomainEvent for StockItemUpdated {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "StockItemUpdated" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub inventory_stock_id: i64,
}

impl StockItemDeleted {
    pub fn new(inventory_stock_id: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            inventory_stock_id,
        }
    }
}

impl DomainEvent for StockItemDeleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "StockItemDeleted" }
}

// ============================================================================
// DELIVERY EVENTS
// ============================================================================

/// Emitted after the delivery transaction committed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryRegistered {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub inventory_stock_id: i64,
    pub employee_id: i64,
    pub quantity: i64,
}

impl DeliveryRegistered {
    pub fn new(inventory_stock_id: i64, employee_id: i64, quantity: i64) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            inventory_stock_id,
            employee_id,
            quantity,
        }
    }
}

impl DomainEvent for DeliveryRegistered {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "DeliveryRegistered" }
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CatalogEntity {
    Employee,
    Product,
    Size,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeKind {
    Added,
    Updated,
    Deleted,
}

/// Emitted after an employee, product or size was written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub entity: CatalogEntity,

    /// `None` when the new id was not reported back
    pub entity_id: Option<i64>,

    pub change: ChangeKind,
}

impl CatalogChanged {
    pub fn new(entity: CatalogEntity, entity_id: Option<i64>, change: ChangeKind) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            entity,
            entity_id,
            change,
        }
    }
}

impl DomainEvent for CatalogChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "CatalogChanged" }
}
