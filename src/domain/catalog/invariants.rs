use super::entity::{NewProduct, NewSize};
use crate::domain::{is_filled, ValidationError, ValidationResult};

/// Product forms require name, description and applicability type.
/// The column itself is nullable; rows created elsewhere may lack a description.
pub fn validate_product_input(
    name: &str,
    description: &str,
    applicability_type: &str,
) -> ValidationResult<NewProduct> {
    if !is_filled(name) || !is_filled(description) || !is_filled(applicability_type) {
        return Err(ValidationError::InvalidProductInput);
    }

    Ok(NewProduct {
        name: name.trim().to_string(),
        description: Some(description.trim().to_string()),
        applicability_type: applicability_type.trim().to_string(),
    })
}

pub fn validate_size_input(size_value: &str, notation_type: &str) -> ValidationResult<NewSize> {
    if !is_filled(size_value) || !is_filled(notation_type) {
        return Err(ValidationError::InvalidSizeInput);
    }

    Ok(NewSize {
        size_value: size_value.trim().to_string(),
        notation_type: notation_type.trim().to_string(),
    })
}
