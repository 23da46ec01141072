// src/view_models/mod.rs
//
// View-models: per-view state (loaded lists, selection, raw form inputs,
// status line) plus the commands a shell binds its buttons to.
//
// RULES:
// - Inputs are kept as typed-in strings and validated on command
// - Failures never escape a command; they become an error status
// - After a successful write: reload the list, set the message, emit the event
// - No view-model holds a reference to another; cross-view refresh goes
//   through the event bus

pub mod delivery_view_model;
pub mod employee_view_model;
pub mod inventory_stock_view_model;
pub mod movement_history_view_model;
pub mod product_view_model;
pub mod size_view_model;
pub mod status;

pub use delivery_view_model::{DeliveryForm, DeliveryViewModel};
pub use employee_view_model::{EmployeeForm, EmployeeViewModel};
pub use inventory_stock_view_model::{InventoryStockViewModel, StockForm};
pub use movement_history_view_model::MovementHistoryViewModel;
pub use product_view_model::{ProductForm, ProductViewModel};
pub use size_view_model::{SizeForm, SizeViewModel};
pub use status::{MessageKind, StatusMessage};

use serde::Serialize;

/// Which buttons of an editor view are enabled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CommandState {
    pub can_add: bool,
    pub can_update: bool,
    pub can_delete: bool,
    pub can_clear: bool,
}

/// Add / Update / Delete / ClearSelection, shared by the catalog and stock editors
pub trait EditorCommands {
    /// Required inputs are present and well-formed
    fn can_add(&self) -> bool;

    /// An entity is selected
    fn can_update_or_delete(&self) -> bool;

    fn add(&mut self);
    fn update(&mut self);

    /// Does nothing, and sets no message, when nothing is selected
    fn delete(&mut self);

    /// Drop the selection, reset inputs to defaults, clear the message
    fn clear_selection(&mut self);

    fn status(&self) -> &StatusMessage;

    fn command_state(&self) -> CommandState {
        CommandState {
            can_add: self.can_add(),
            can_update: self.can_update_or_delete(),
            can_delete: self.can_update_or_delete(),
            can_clear: true,
        }
    }
}
