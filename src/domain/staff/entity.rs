use serde::{Deserialize, Serialize};

/// A person who can receive deliveries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub employee_id: i64,
    pub name: String,
    pub group_id: i64,

    /// Display only, filled by the joined listing
    pub group_name: Option<String>,

    /// Display only, filled by the joined listing
    pub employee_type_name: Option<String>,
}

/// Organisational group; its employee type decides which products members may receive
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub group_id: i64,
    pub name: String,
    pub employee_type_id: i64,

    /// Display only, filled by the joined listing
    pub employee_type_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeType {
    pub employee_type_id: i64,
    pub type_name: String,
}

/// Validated employee fields, ready to persist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
    pub name: String,
    pub group_id: i64,
}

impl Employee {
    /// Apply validated fields onto an existing employee, keeping its id
    pub fn with_input(&self, input: NewEmployee) -> Self {
        Self {
            employee_id: self.employee_id,
            name: input.name,
            group_id: input.group_id,
            group_name: None,
            employee_type_name: None,
        }
    }
}
