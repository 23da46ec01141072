// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// PRINCIPLES:
// - DTOs are UI-friendly, serializable snapshots of a view
// - Form DTOs travel both ways: a shell reads them to fill its inputs and
//   sends them back with whatever the user typed
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::db::DatabaseStats;
use crate::domain::{AvailableSize, Employee, Group, InventoryStock, Movement, Product, Size};
use crate::view_models::{
    CommandState, DeliveryForm, EmployeeForm, ProductForm, SizeForm, StatusMessage, StockForm,
};

// ============================================================================
// CATALOG DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDto {
    pub employee_id: i64,
    pub name: String,
    pub group_id: i64,
    pub group_name: Option<String>,
    pub employee_type_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupDto {
    pub group_id: i64,
    pub name: String,
    pub employee_type_id: i64,
    pub employee_type_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductDto {
    pub product_id: i64,
    pub name: String,
    pub description: Option<String>,
    pub applicability_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizeDto {
    pub size_id: i64,
    pub size_value: String,
    pub notation_type: String,
}

// ============================================================================
// STOCK & MOVEMENT DTOs
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockItemDto {
    pub inventory_stock_id: i64,
    pub product_id: i64,
    pub product_name: Option<String>,
    pub size_id: i64,
    pub size_value: Option<String>,
    pub current_quantity: i64,
    pub min_stock_limit: i64,

    /// Current quantity has dropped under the limit
    pub below_minimum: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSizeDto {
    pub inventory_stock_id: i64,
    pub size_value: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovementDto {
    pub movement_id: i64,
    pub movement_date: String, // RFC 3339
    pub movement_type: String,
    pub quantity_moved: i64,
    pub inventory_stock_id: i64,
    pub product_name: String,
    pub product_description: Option<String>,
    pub product_size: String,
    pub size_notation: String,
    pub remaining_stock: i64,
    pub min_stock_limit: i64,
    pub employee_id: Option<i64>,
    pub employee_name: Option<String>,
    pub employee_group: Option<String>,
    pub employee_type: Option<String>,
    pub notes: Option<String>,
}

// ============================================================================
// FORM DTOs
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeFormDto {
    pub name: String,
    pub group_id: i64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductFormDto {
    pub name: String,
    pub description: String,
    pub applicability_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SizeFormDto {
    pub size_value: String,
    pub notation_type: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StockFormDto {
    pub product_id: i64,
    pub size_id: i64,
    pub quantity: String,
    pub min_stock_limit: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DeliveryFormDto {
    pub employee_id: i64,
    pub product_id: i64,
    pub inventory_stock_id: i64,
    pub quantity: String,
}

// ============================================================================
// VIEW SNAPSHOTS
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct EmployeeViewDto {
    pub employees: Vec<EmployeeDto>,
    pub groups: Vec<GroupDto>,
    pub selected_id: Option<i64>,
    pub form: EmployeeFormDto,
    pub status: StatusMessage,
    pub commands: CommandState,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductViewDto {
    pub products: Vec<ProductDto>,
    pub selected_id: Option<i64>,
    pub form: ProductFormDto,
    pub status: StatusMessage,
    pub commands: CommandState,
}

#[derive(Debug, Clone, Serialize)]
pub struct SizeViewDto {
    pub sizes: Vec<SizeDto>,
    pub selected_id: Option<i64>,
    pub form: SizeFormDto,
    pub status: StatusMessage,
    pub commands: CommandState,
}

#[derive(Debug, Clone, Serialize)]
pub struct StockViewDto {
    pub stock_items: Vec<StockItemDto>,
    pub products: Vec<ProductDto>,
    pub sizes: Vec<SizeDto>,
    pub selected_id: Option<i64>,
    pub form: StockFormDto,
    pub status: StatusMessage,
    pub commands: CommandState,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeliveryViewDto {
    pub employees: Vec<EmployeeDto>,
    pub products: Vec<ProductDto>,
    pub available_sizes: Vec<AvailableSizeDto>,
    pub form: DeliveryFormDto,
    pub status: StatusMessage,
    pub can_register: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct MovementHistoryViewDto {
    pub movements: Vec<MovementDto>,
    pub status: StatusMessage,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseStatsDto {
    pub size_bytes: i64,
    pub employee_count: i64,
    pub product_count: i64,
    pub stock_row_count: i64,
    pub movement_count: i64,
}

// ============================================================================
// CONVERSION IMPLEMENTATIONS (Domain → DTO)
// ============================================================================

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            employee_id: employee.employee_id,
            name: employee.name,
            group_id: employee.group_id,
            group_name: employee.group_name,
            employee_type_name: employee.employee_type_name,
        }
    }
}

impl From<Group> for GroupDto {
    fn from(group: Group) -> Self {
        Self {
            group_id: group.group_id,
            name: group.name,
            employee_type_id: group.employee_type_id,
            employee_type_name: group.employee_type_name,
        }
    }
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            product_id: product.product_id,
            name: product.name,
            description: product.description,
            applicability_type: product.applicability_type,
        }
    }
}

impl From<Size> for SizeDto {
    fn from(size: Size) -> Self {
        Self {
            size_id: size.size_id,
            size_value: size.size_value,
            notation_type: size.notation_type,
        }
    }
}

impl From<InventoryStock> for StockItemDto {
    fn from(stock: InventoryStock) -> Self {
        let below_minimum = stock.is_below_minimum();
        Self {
            inventory_stock_id: stock.inventory_stock_id,
            product_id: stock.product_id,
            product_name: stock.product_name,
            size_id: stock.size_id,
            size_value: stock.size_value,
            current_quantity: stock.current_quantity,
            min_stock_limit: stock.min_stock_limit,
            below_minimum,
        }
    }
}

impl From<AvailableSize> for AvailableSizeDto {
    fn from(size: AvailableSize) -> Self {
        Self {
            inventory_stock_id: size.inventory_stock_id,
            size_value: size.size_value,
        }
    }
}

impl From<Movement> for MovementDto {
    fn from(movement: Movement) -> Self {
        Self {
            movement_id: movement.movement_id,
            movement_date: movement.movement_date.to_rfc3339(),
            movement_type: movement.movement_type,
            quantity_moved: movement.quantity_moved,
            inventory_stock_id: movement.inventory_stock_id,
            product_name: movement.product_name,
            product_description: movement.product_description,
            product_size: movement.product_size,
            size_notation: movement.size_notation,
            remaining_stock: movement.remaining_stock,
            min_stock_limit: movement.min_stock_limit,
            employee_id: movement.employee_id,
            employee_name: movement.employee_name,
            employee_group: movement.employee_group,
            employee_type: movement.employee_type,
            notes: movement.notes,
        }
    }
}

impl From<DatabaseStats> for DatabaseStatsDto {
    fn from(stats: DatabaseStats) -> Self {
        Self {
            size_bytes: stats.size_bytes,
            employee_count: stats.employee_count,
            product_count: stats.product_count,
            stock_row_count: stats.stock_row_count,
            movement_count: stats.movement_count,
        }
    }
}

// Forms: view-model state <-> wire shape

impl From<&EmployeeForm> for EmployeeFormDto {
    fn from(form: &EmployeeForm) -> Self {
        Self {
            name: form.name.clone(),
            group_id: form.group_id,
        }
    }
}

impl From<EmployeeFormDto> for EmployeeForm {
    fn from(dto: EmployeeFormDto) -> Self {
        Self {
            name: dto.name,
            group_id: dto.group_id,
        }
    }
}

impl From<&ProductForm> for ProductFormDto {
    fn from(form: &ProductForm) -> Self {
        Self {
            name: form.name.clone(),
            description: form.description.clone(),
            applicability_type: form.applicability_type.clone(),
        }
    }
}

impl From<ProductFormDto> for ProductForm {
    fn from(dto: ProductFormDto) -> Self {
        Self {
            name: dto.name,
            description: dto.description,
            applicability_type: dto.applicability_type,
        }
    }
}

impl From<&SizeForm> for SizeFormDto {
    fn from(form: &SizeForm) -> Self {
        Self {
            size_value: form.size_value.clone(),
            notation_type: form.notation_type.clone(),
        }
    }
}

impl From<SizeFormDto> for SizeForm {
    fn from(dto: SizeFormDto) -> Self {
        Self {
            size_value: dto.size_value,
            notation_type: dto.notation_type,
        }
    }
}

impl From<&StockForm> for StockFormDto {
    fn from(form: &StockForm) -> Self {
        Self {
            product_id: form.product_id,
            size_id: form.size_id,
            quantity: form.quantity.clone(),
            min_stock_limit: form.min_stock_limit.clone(),
        }
    }
}

impl From<StockFormDto> for StockForm {
    fn from(dto: StockFormDto) -> Self {
        Self {
            product_id: dto.product_id,
            size_id: dto.size_id,
            quantity: dto.quantity,
            min_stock_limit: dto.min_stock_limit,
        }
    }
}

impl From<&DeliveryForm> for DeliveryFormDto {
    fn from(form: &DeliveryForm) -> Self {
        Self {
            employee_id: form.employee_id,
            product_id: form.product_id,
            inventory_stock_id: form.inventory_stock_id,
            quantity: form.quantity.clone(),
        }
    }
}
