// src/events/handlers/mod.rs
//
// Event Handlers
//
// Handlers use closure-based subscription via EventBus::subscribe.
// The EventHandler type stays internal to the bus.

pub mod view_refresh_handler;

// Only the registration function and its target set are exported
pub use view_refresh_handler::{register_view_refresh_handlers, RefreshTargets};
