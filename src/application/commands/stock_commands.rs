// src/application/commands/stock_commands.rs

use crate::application::{
    commands::lock_view, dto::*, error_handling::ToErrorResponse, state::AppState,
};
use crate::view_models::{EditorCommands, InventoryStockViewModel, StockForm};

fn snapshot(vm: &InventoryStockViewModel) -> StockViewDto {
    StockViewDto {
        stock_items: vm.stock_items().iter().cloned().map(StockItemDto::from).collect(),
        products: vm.products().iter().cloned().map(ProductDto::from).collect(),
        sizes: vm.sizes().iter().cloned().map(SizeDto::from).collect(),
        selected_id: vm.selected().map(|s| s.inventory_stock_id),
        form: StockFormDto::from(vm.form()),
        status: vm.status().clone(),
        commands: vm.command_state(),
    }
}

pub fn get_stock_view(state: &AppState) -> Result<StockViewDto, String> {
    let vm = lock_view(&state.stock, "stock")?;
    Ok(snapshot(&vm))
}

pub fn select_stock_item(
    state: &AppState,
    inventory_stock_id: Option<i64>,
) -> Result<StockViewDto, String> {
    let mut vm = lock_view(&state.stock, "stock")?;
    vm.select(inventory_stock_id).to_error_response()?;
    Ok(snapshot(&vm))
}

/// Receive units: adds to an existing (product, size) row or creates one
pub fn receive_stock(state: &AppState, form: StockFormDto) -> Result<StockViewDto, String> {
    let mut vm = lock_view(&state.stock, "stock")?;
    *vm.form_mut() = StockForm::from(form);
    vm.add();
    Ok(snapshot(&vm))
}

/// Overwrite quantity and limit of the selected row
pub fn update_stock_item(state: &AppState, form: StockFormDto) -> Result<StockViewDto, String> {
    let mut vm = lock_view(&state.stock, "stock")?;
    *vm.form_mut() = StockForm::from(form);
    vm.update();
    Ok(snapshot(&vm))
}

pub fn delete_stock_item(state: &AppState) -> Result<StockViewDto, String> {
    let mut vm = lock_view(&state.stock, "stock")?;
    vm.delete();
    Ok(snapshot(&vm))
}

pub fn clear_stock_selection(state: &AppState) -> Result<StockViewDto, String> {
    let mut vm = lock_view(&state.stock, "stock")?;
    vm.clear_selection();
    Ok(snapshot(&vm))
}
