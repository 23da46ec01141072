// src/application/commands/size_commands.rs

use crate::application::{
    commands::lock_view, dto::*, error_handling::ToErrorResponse, state::AppState,
};
use crate::view_models::{EditorCommands, SizeForm, SizeViewModel};

fn snapshot(vm: &SizeViewModel) -> SizeViewDto {
    SizeViewDto {
        sizes: vm.sizes().iter().cloned().map(SizeDto::from).collect(),
        selected_id: vm.selected().map(|s| s.size_id),
        form: SizeFormDto::from(vm.form()),
        status: vm.status().clone(),
        commands: vm.command_state(),
    }
}

pub fn get_size_view(state: &AppState) -> Result<SizeViewDto, String> {
    let vm = lock_view(&state.sizes, "size")?;
    Ok(snapshot(&vm))
}

pub fn select_size(state: &AppState, size_id: Option<i64>) -> Result<SizeViewDto, String> {
    let mut vm = lock_view(&state.sizes, "size")?;
    vm.select(size_id).to_error_response()?;
    Ok(snapshot(&vm))
}

pub fn add_size(state: &AppState, form: SizeFormDto) -> Result<SizeViewDto, String> {
    let mut vm = lock_view(&state.sizes, "size")?;
    *vm.form_mut() = SizeForm::from(form);
    vm.add();
    Ok(snapshot(&vm))
}

pub fn update_size(state: &AppState, form: SizeFormDto) -> Result<SizeViewDto, String> {
    let mut vm = lock_view(&state.sizes, "size")?;
    *vm.form_mut() = SizeForm::from(form);
    vm.update();
    Ok(snapshot(&vm))
}

pub fn delete_size(state: &AppState) -> Result<SizeViewDto, String> {
    let mut vm = lock_view(&state.sizes, "size")?;
    vm.delete();
    Ok(snapshot(&vm))
}

pub fn clear_size_selection(state: &AppState) -> Result<SizeViewDto, String> {
    let mut vm = lock_view(&state.sizes, "size")?;
    vm.clear_selection();
    Ok(snapshot(&vm))
}
