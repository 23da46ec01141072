// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between a UI shell and the view-models
// - Commands accept DTOs, return a DTO snapshot of the view they touched
// - A failed operation is NOT an Err: it is the view's status message.
//   Err is reserved for a poisoned lock or an unknown id
// - Commands NEVER contain business logic

pub mod database_commands;
pub mod delivery_commands;
pub mod employee_commands;
pub mod movement_history_commands;
pub mod product_commands;
pub mod size_commands;
pub mod stock_commands;

pub use database_commands::*;
pub use delivery_commands::*;
pub use employee_commands::*;
pub use movement_history_commands::*;
pub use product_commands::*;
pub use size_commands::*;
pub use stock_commands::*;


use std::sync::{Mutex, MutexGuard};

use crate::application::error_handling::ErrorResponse;

/// Lock one view for the duration of a command
pub(crate) fn lock_view<'a, T>(view: &'a Mutex<T>, name: &str) -> Result<MutexGuard<'a, T>, String> {
    view.lock().map_err(|_| {
        log::error!("The {} view lock is poisoned", name);
        ErrorResponse::internal(format!("The {} view is unavailable", name)).into_json()
    })
}
