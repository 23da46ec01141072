// src/application/commands/product_commands.rs

use crate::application::{
    commands::lock_view, dto::*, error_handling::ToErrorResponse, state::AppState,
};
use crate::view_models::{EditorCommands, ProductForm, ProductViewModel};

fn snapshot(vm: &ProductViewModel) -> ProductViewDto {
    ProductViewDto {
        products: vm.products().iter().cloned().map(ProductDto::from).collect(),
        selected_id: vm.selected().map(|p| p.product_id),
        form: ProductFormDto::from(vm.form()),
        status: vm.status().clone(),
        commands: vm.command_state(),
    }
}

pub fn get_product_view(state: &AppState) -> Result<ProductViewDto, String> {
    let vm = lock_view(&state.products, "product")?;
    Ok(snapshot(&vm))
}

pub fn select_product(state: &AppState, product_id: Option<i64>) -> Result<ProductViewDto, String> {
    let mut vm = lock_view(&state.products, "product")?;
    vm.select(product_id).to_error_response()?;
    Ok(snapshot(&vm))
}

pub fn add_product(state: &AppState, form: ProductFormDto) -> Result<ProductViewDto, String> {
    let mut vm = lock_view(&state.products, "product")?;
    *vm.form_mut() = ProductForm::from(form);
    vm.add();
    Ok(snapshot(&vm))
}

pub fn update_product(state: &AppState, form: ProductFormDto) -> Result<ProductViewDto, String> {
    let mut vm = lock_view(&state.products, "product")?;
    *vm.form_mut() = ProductForm::from(form);
    vm.update();
    Ok(snapshot(&vm))
}

pub fn delete_product(state: &AppState) -> Result<ProductViewDto, String> {
    let mut vm = lock_view(&state.products, "product")?;
    vm.delete();
    Ok(snapshot(&vm))
}

pub fn clear_product_selection(state: &AppState) -> Result<ProductViewDto, String> {
    let mut vm = lock_view(&state.products, "product")?;
    vm.clear_selection();
    Ok(snapshot(&vm))
}
