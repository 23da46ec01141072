use super::entity::NewEmployee;
use crate::domain::{is_filled, ValidationError, ValidationResult};

/// An employee needs a non-blank name and a selected group
pub fn validate_employee_input(name: &str, group_id: i64) -> ValidationResult<NewEmployee> {
    if !is_filled(name) || group_id <= 0 {
        return Err(ValidationError::InvalidEmployeeInput);
    }

    Ok(NewEmployee {
        name: name.trim().to_string(),
        group_id,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_employee() {
        let input = validate_employee_input("  Ana Torres ", 2).unwrap();
        assert_eq!(input.name, "Ana Torres");
        assert_eq!(input.group_id, 2);
    }

    #[test]
    fn test_blank_name_fails() {
        assert_eq!(
            validate_employee_input("   ", 1),
            Err(ValidationError::InvalidEmployeeInput)
        );
    }

    #[test]
    fn test_unselected_group_fails() {
        assert_eq!(
            validate_employee_input("Ana", 0),
            Err(ValidationError::InvalidEmployeeInput)
        );
    }
}
