// src/application/commands/movement_history_commands.rs

use crate::application::{commands::lock_view, dto::*, state::AppState};
use crate::view_models::MovementHistoryViewModel;

fn snapshot(vm: &MovementHistoryViewModel) -> MovementHistoryViewDto {
    MovementHistoryViewDto {
        movements: vm.movements().iter().cloned().map(MovementDto::from).collect(),
        status: vm.status().clone(),
    }
}

pub fn get_movement_history(state: &AppState) -> Result<MovementHistoryViewDto, String> {
    let vm = lock_view(&state.movement_history, "movement history")?;
    Ok(snapshot(&vm))
}

pub fn refresh_movement_history(state: &AppState) -> Result<MovementHistoryViewDto, String> {
    let mut vm = lock_view(&state.movement_history, "movement history")?;
    vm.refresh();
    Ok(snapshot(&vm))
}
