// src/view_models/employee_view_model.rs

use std::sync::Arc;

use crate::domain::{validate_employee_input, Employee, Group, ValidationError};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogChanged, CatalogEntity, ChangeKind, EventBus};
use crate::repositories::{EmployeeRepository, GroupRepository};
use crate::view_models::{EditorCommands, StatusMessage};

/// Raw inputs of the employee form. `group_id` 0 means "no group picked".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub name: String,
    pub group_id: i64,
}

pub struct EmployeeViewModel {
    employee_repository: Arc<dyn EmployeeRepository>,
    group_repository: Arc<dyn GroupRepository>,
    event_bus: Arc<EventBus>,

    employees: Vec<Employee>,
    groups: Vec<Group>,
    selected: Option<Employee>,
    form: EmployeeForm,
    status: StatusMessage,
}

impl EmployeeViewModel {
    pub fn new(
        employee_repository: Arc<dyn EmployeeRepository>,
        group_repository: Arc<dyn GroupRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let mut view_model = Self {
            employee_repository,
            group_repository,
            event_bus,
            employees: Vec::new(),
            groups: Vec::new(),
            selected: None,
            form: EmployeeForm::default(),
            status: StatusMessage::default(),
        };
        view_model.load_data();
        view_model
    }

    /// Reload employees and groups; a failure only sets the status line
    pub fn load_data(&mut self) {
        if let Err(e) = self.try_load() {
            log::error!("Failed to load employees: {}", e);
            self.status = StatusMessage::error(format!("Error loading data: {}", e));
        }
    }

    fn try_load(&mut self) -> AppResult<()> {
        self.employees = self.employee_repository.get_all_with_group_and_type()?;
        self.groups = self.group_repository.get_all_with_employee_type()?;
        Ok(())
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn selected(&self) -> Option<&Employee> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &EmployeeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmployeeForm {
        &mut self.form
    }

    /// Select an employee from the loaded list (or none) and copy its fields
    /// into the form, discarding unsaved edits.
    pub fn select(&mut self, employee_id: Option<i64>) -> AppResult<()> {
        let selected = match employee_id {
            Some(id) => Some(
                self.employees
                    .iter()
                    .find(|e| e.employee_id == id)
                    .cloned()
                    .ok_or(AppError::NotFound)?,
            ),
            None => None,
        };

        self.form = match &selected {
            Some(employee) => EmployeeForm {
                name: employee.name.clone(),
                group_id: employee.group_id,
            },
            None => EmployeeForm::default(),
        };
        self.selected = selected;
        Ok(())
    }

    fn fail(&mut self, action: &str, error: AppError) {
        log::error!("Failed {} employee: {}", action, error);
        self.status = StatusMessage::error(format!("Error {} employee: {}", action, error));
    }

    fn reject(&mut self, error: ValidationError) {
        self.status = StatusMessage::error(error.to_string());
    }
}

impl EditorCommands for EmployeeViewModel {
    fn can_add(&self) -> bool {
        validate_employee_input(&self.form.name, self.form.group_id).is_ok()
    }

    fn can_update_or_delete(&self) -> bool {
        self.selected.is_some()
    }

    fn add(&mut self) {
        let input = match validate_employee_input(&self.form.name, self.form.group_id) {
            Ok(input) => input,
            Err(e) => return self.reject(e),
        };

        match self.employee_repository.add(&input) {
            Ok(id) => {
                self.load_data();
                self.form = EmployeeForm::default();
                self.status = StatusMessage::success("Employee added successfully.");
                self.event_bus.emit(CatalogChanged::new(
                    CatalogEntity::Employee,
                    Some(id),
                    ChangeKind::Added,
                ));
            }
            Err(e) => self.fail("adding", e),
        }
    }

    fn update(&mut self) {
        let Some(selected) = self.selected.clone() else {
            return self.reject(ValidationError::NoEmployeeSelected);
        };

        let input = match validate_employee_input(&self.form.name, self.form.group_id) {
            Ok(input) => input,
            Err(e) => return self.reject(e),
        };

        let updated = selected.with_input(input);
        match self.employee_repository.update(&updated) {
            Ok(()) => {
                self.load_data();
                self.selected = self
                    .employees
                    .iter()
                    .find(|e| e.employee_id == updated.employee_id)
                    .cloned()
                    .or(Some(updated));
                self.status = StatusMessage::success("Employee updated successfully.");
                self.event_bus.emit(CatalogChanged::new(
                    CatalogEntity::Employee,
                    Some(selected.employee_id),
                    ChangeKind::Updated,
                ));
            }
            Err(e) => self.fail("updating", e),
        }
    }

    fn delete(&mut self) {
        let Some(id) = self.selected.as_ref().map(|e| e.employee_id) else {
            return;
        };

        match self.employee_repository.delete(id) {
            Ok(()) => {
                self.load_data();
                self.selected = None;
                self.form = EmployeeForm::default();
                self.status = StatusMessage::success("Employee deleted successfully.");
                self.event_bus.emit(CatalogChanged::new(
                    CatalogEntity::Employee,
                    Some(id),
                    ChangeKind::Deleted,
                ));
            }
            Err(e) => self.fail("deleting", e),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.form = EmployeeForm::default();
        self.status = StatusMessage::default();
    }

    fn status(&self) -> &StatusMessage {
        &self.status
    }
}
