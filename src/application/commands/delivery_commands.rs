// src/application/commands/delivery_commands.rs

use crate::application::{commands::lock_view, dto::*, state::AppState};
use crate::view_models::DeliveryViewModel;

fn snapshot(vm: &DeliveryViewModel) -> DeliveryViewDto {
    DeliveryViewDto {
        employees: vm.employees().iter().cloned().map(EmployeeDto::from).collect(),
        products: vm.products().iter().cloned().map(ProductDto::from).collect(),
        available_sizes: vm
            .available_sizes()
            .iter()
            .cloned()
            .map(AvailableSizeDto::from)
            .collect(),
        form: DeliveryFormDto::from(vm.form()),
        status: vm.status().clone(),
        can_register: vm.can_register(),
    }
}

pub fn get_delivery_view(state: &AppState) -> Result<DeliveryViewDto, String> {
    let vm = lock_view(&state.delivery, "delivery")?;
    Ok(snapshot(&vm))
}

/// Pick the product to deliver; its sizes with units on hand are loaded
pub fn choose_delivery_product(
    state: &AppState,
    product_id: i64,
) -> Result<DeliveryViewDto, String> {
    let mut vm = lock_view(&state.delivery, "delivery")?;
    vm.select_product(product_id);
    Ok(snapshot(&vm))
}

pub fn register_delivery(state: &AppState, form: DeliveryFormDto) -> Result<DeliveryViewDto, String> {
    let mut vm = lock_view(&state.delivery, "delivery")?;

    if vm.form().product_id != form.product_id {
        vm.select_product(form.product_id);
    }
    vm.set_employee_id(form.employee_id);
    vm.set_inventory_stock_id(form.inventory_stock_id);
    vm.set_quantity(form.quantity);
    vm.register_delivery();

    Ok(snapshot(&vm))
}

pub fn clear_delivery_fields(state: &AppState) -> Result<DeliveryViewDto, String> {
    let mut vm = lock_view(&state.delivery, "delivery")?;
    vm.clear_fields();
    Ok(snapshot(&vm))
}
