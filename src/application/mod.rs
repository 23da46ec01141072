// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - The boundary between a UI shell and the view-models
// - AppState owns the pool, the event bus and one instance of each view-model
// - Commands lock a view-model, run one operation and return a DTO snapshot
// - It translates between DTOs and view-model forms

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod state;

pub use commands::*;
pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
pub use state::AppState;
