use serde::{Deserialize, Serialize};

/// A deliverable item (uniform, boots, gloves...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,

    /// Free-text tag naming the employee type allowed to receive this product
    pub applicability_type: String,
}

/// A size in some notation (e.g. "M" Americana, "27" Mexicana)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub size_id: i64,
    pub size_value: String,
    pub notation_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub description: Option<String>,
    pub applicability_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSize {
    pub size_value: String,
    pub notation_type: String,
}

impl Product {
    pub fn with_input(&self, input: NewProduct) -> Self {
        Self {
            product_id: self.product_id,
            name: input.name,
            description: input.description,
            applicability_type: input.applicability_type,
        }
    }
}

impl Size {
    pub fn with_input(&self, input: NewSize) -> Self {
        Self {
            size_id: self.size_id,
            size_value: input.size_value,
            notation_type: input.notation_type,
        }
    }
}
