pub mod entity;
pub mod invariants;

pub use entity::{Employee, EmployeeType, Group, NewEmployee};
pub use invariants::validate_employee_input;
