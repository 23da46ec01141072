// src/events/handlers/view_refresh_handler.rs
//
// Reloads the views that display data another view just wrote.
//
// RULES:
// - A handler never locks the view that emitted the event (it is already
//   locked by the running command)
// - A handler never emits events
// - Views are held weakly; a dropped view is skipped
// - A view that is busy (locked by another command) is skipped with a warning

use std::sync::{Mutex, TryLockError, Weak};

use crate::events::{
    CatalogChanged, CatalogEntity, DeliveryRegistered, EventBus, StockItemDeleted,
    StockItemUpdated, StockReceived,
};
use crate::view_models::{DeliveryViewModel, InventoryStockViewModel, MovementHistoryViewModel};

/// Views that react to writes made elsewhere
#[derive(Clone, Default)]
pub struct RefreshTargets {
    pub stock: Weak<Mutex<InventoryStockViewModel>>,
    pub delivery: Weak<Mutex<DeliveryViewModel>>,
    pub movement_history: Weak<Mutex<MovementHistoryViewModel>>,
}

// ============================================================================
// HANDLER REGISTRATION
// ============================================================================

pub fn register_view_refresh_handlers(bus: &EventBus, targets: RefreshTargets) {
    // Stock levels changed: the delivery size list depends on them
    let t = targets.clone();
    bus.subscribe::<StockReceived, _>(move |_| reload_delivery(&t));
    let t = targets.clone();
    bus.subscribe::<StockItemUpdated, _>(move |_| reload_delivery(&t));
    let t = targets.clone();
    bus.subscribe::<StockItemDeleted, _>(move |_| reload_delivery(&t));

    // A delivery appends history and lowers a stock row
    let t = targets.clone();
    bus.subscribe::<DeliveryRegistered, _>(move |event| {
        log::debug!(
            "Refreshing after delivery of {} from stock row {}",
            event.quantity,
            event.inventory_stock_id
        );
        with_view(&t.movement_history, "movement history", |vm| vm.refresh());
        with_view(&t.stock, "stock", |vm| vm.load_data());
    });

    let t = targets;
    bus.subscribe::<CatalogChanged, _>(move |event| handle_catalog_changed(&t, event));

    log::debug!("View refresh handlers registered");
}

fn reload_delivery(targets: &RefreshTargets) {
    with_view(&targets.delivery, "delivery", |vm| vm.load_data());
}

/// Catalog rows feed the pick lists of the stock and delivery views, and
/// their names appear in the movement history
fn handle_catalog_changed(targets: &RefreshTargets, event: &CatalogChanged) {
    match event.entity {
        CatalogEntity::Employee => {
            with_view(&targets.delivery, "delivery", |vm| vm.load_data());
        }
        CatalogEntity::Product => {
            with_view(&targets.stock, "stock", |vm| vm.load_data());
            with_view(&targets.delivery, "delivery", |vm| vm.load_data());
        }
        CatalogEntity::Size => {
            with_view(&targets.stock, "stock", |vm| vm.load_data());
        }
    }
    with_view(&targets.movement_history, "movement history", |vm| vm.refresh());
}

fn with_view<V>(target: &Weak<Mutex<V>>, name: &str, f: impl FnOnce(&mut V)) {
    let Some(view) = target.upgrade() else {
        return;
    };

    let mut guard = match view.try_lock() {
        Ok(guard) => guard,
        Err(TryLockError::Poisoned(poisoned)) => poisoned.into_inner(),
        Err(TryLockError::WouldBlock) => {
            log::warn!("Skipped refresh of {} view: it is busy", name);
            return;
        }
    };
    f(&mut guard);
}
