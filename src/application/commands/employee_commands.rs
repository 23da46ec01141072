// src/application/commands/employee_commands.rs

use crate::application::{
    commands::lock_view, dto::*, error_handling::ToErrorResponse, state::AppState,
};
use crate::view_models::{EditorCommands, EmployeeForm, EmployeeViewModel};

fn snapshot(vm: &EmployeeViewModel) -> EmployeeViewDto {
    EmployeeViewDto {
        employees: vm.employees().iter().cloned().map(EmployeeDto::from).collect(),
        groups: vm.groups().iter().cloned().map(GroupDto::from).collect(),
        selected_id: vm.selected().map(|e| e.employee_id),
        form: EmployeeFormDto::from(vm.form()),
        status: vm.status().clone(),
        commands: vm.command_state(),
    }
}

pub fn get_employee_view(state: &AppState) -> Result<EmployeeViewDto, String> {
    let vm = lock_view(&state.employees, "employee")?;
    Ok(snapshot(&vm))
}

pub fn reload_employees(state: &AppState) -> Result<EmployeeViewDto, String> {
    let mut vm = lock_view(&state.employees, "employee")?;
    vm.load_data();
    Ok(snapshot(&vm))
}

/// Select an employee (or clear with `None`); the form is filled from it
pub fn select_employee(
    state: &AppState,
    employee_id: Option<i64>,
) -> Result<EmployeeViewDto, String> {
    let mut vm = lock_view(&state.employees, "employee")?;
    vm.select(employee_id).to_error_response()?;
    Ok(snapshot(&vm))
}

pub fn add_employee(state: &AppState, form: EmployeeFormDto) -> Result<EmployeeViewDto, String> {
    let mut vm = lock_view(&state.employees, "employee")?;
    *vm.form_mut() = EmployeeForm::from(form);
    vm.add();
    Ok(snapshot(&vm))
}

pub fn update_employee(
    state: &AppState,
    form: EmployeeFormDto,
) -> Result<EmployeeViewDto, String> {
    let mut vm = lock_view(&state.employees, "employee")?;
    *vm.form_mut() = EmployeeForm::from(form);
    vm.update();
    Ok(snapshot(&vm))
}

pub fn delete_employee(state: &AppState) -> Result<EmployeeViewDto, String> {
    let mut vm = lock_view(&state.employees, "employee")?;
    vm.delete();
    Ok(snapshot(&vm))
}

pub fn clear_employee_selection(state: &AppState) -> Result<EmployeeViewDto, String> {
    let mut vm = lock_view(&state.employees, "employee")?;
    vm.clear_selection();
    Ok(snapshot(&vm))
}
