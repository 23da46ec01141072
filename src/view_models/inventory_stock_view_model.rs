// src/view_models/inventory_stock_view_model.rs
//
// Stock editor.
//
// Add is a receipt: it goes through the repository upsert, so receiving
// units for an existing (product, size) pair tops that row up instead of
// creating a second one. Update overwrites the selected row's levels only.

use std::sync::Arc;

use crate::domain::{
    validate_stock_levels, validate_stock_receipt, InventoryStock, Product, Size,
    ValidationError,
};
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, StockItemDeleted, StockItemUpdated, StockReceived};
use crate::repositories::{InventoryStockRepository, ProductRepository, SizeRepository};
use crate::view_models::{EditorCommands, StatusMessage};

/// Raw stock inputs. Quantities stay strings until a command parses them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StockForm {
    pub product_id: i64,
    pub size_id: i64,
    pub quantity: String,
    pub min_stock_limit: String,
}

pub struct InventoryStockViewModel {
    stock_repository: Arc<dyn InventoryStockRepository>,
    product_repository: Arc<dyn ProductRepository>,
    size_repository: Arc<dyn SizeRepository>,
    event_bus: Arc<EventBus>,

    stock_items: Vec<InventoryStock>,
    products: Vec<Product>,
    sizes: Vec<Size>,
    selected: Option<InventoryStock>,
    form: StockForm,
    status: StatusMessage,
}

impl InventoryStockViewModel {
    pub fn new(
        stock_repository: Arc<dyn InventoryStockRepository>,
        product_repository: Arc<dyn ProductRepository>,
        size_repository: Arc<dyn SizeRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let mut view_model = Self {
            stock_repository,
            product_repository,
            size_repository,
            event_bus,
            stock_items: Vec::new(),
            products: Vec::new(),
            sizes: Vec::new(),
            selected: None,
            form: StockForm::default(),
            status: StatusMessage::default(),
        };
        view_model.load_data();
        view_model
    }

    pub fn load_data(&mut self) {
        if let Err(e) = self.try_load() {
            log::error!("Failed to load stock: {}", e);
            self.status = StatusMessage::error(format!("Error loading data: {}", e));
        }
    }

    fn try_load(&mut self) -> AppResult<()> {
        self.stock_items = self.stock_repository.get_stock_details()?;
        self.products = self.product_repository.get_all()?;
        self.sizes = self.size_repository.get_all()?;
        Ok(())
    }

    pub fn stock_items(&self) -> &[InventoryStock] {
        &self.stock_items
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn selected(&self) -> Option<&InventoryStock> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &StockForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut StockForm {
        &mut self.form
    }

    pub fn select(&mut self, inventory_stock_id: Option<i64>) -> AppResult<()> {
        let selected = match inventory_stock_id {
            Some(id) => Some(
                self.stock_items
                    .iter()
                    .find(|s| s.inventory_stock_id == id)
                    .cloned()
                    .ok_or(AppError::NotFound)?,
            ),
            None => None,
        };

        self.form = match &selected {
            Some(stock) => StockForm {
                product_id: stock.product_id,
                size_id: stock.size_id,
                quantity: stock.current_quantity.to_string(),
                min_stock_limit: stock.min_stock_limit.to_string(),
            },
            None => StockForm::default(),
        };
        self.selected = selected;
        Ok(())
    }

    fn reject(&mut self, error: ValidationError) {
        self.status = StatusMessage::error(error.to_string());
    }

    /// Reload, clear the form and selection, then report success
    fn succeed(&mut self, message: &str) {
        self.load_data();
        self.clear_selection();
        self.status = StatusMessage::success(message);
    }

    fn fail(&mut self, what: &str, error: AppError) {
        log::error!("Failed {}: {}", what, error);
        self.status = StatusMessage::error(format!("Error {}: {}", what, error));
    }
}

impl EditorCommands for InventoryStockViewModel {
    fn can_add(&self) -> bool {
        validate_stock_receipt(
            self.form.product_id,
            self.form.size_id,
            &self.form.quantity,
            &self.form.min_stock_limit,
        )
        .is_ok()
    }

    fn can_update_or_delete(&self) -> bool {
        self.selected.is_some()
    }

    fn add(&mut self) {
        let receipt = match validate_stock_receipt(
            self.form.product_id,
            self.form.size_id,
            &self.form.quantity,
            &self.form.min_stock_limit,
        ) {
            Ok(receipt) => receipt,
            Err(e) => return self.reject(e),
        };

        match self.stock_repository.add_or_update_stock(
            receipt.product_id,
            receipt.size_id,
            receipt.quantity,
            receipt.min_stock_limit,
        ) {
            Ok(()) => {
                self.succeed("Stock added/updated successfully.");
                self.event_bus.emit(StockReceived::new(
                    receipt.product_id,
                    receipt.size_id,
                    receipt.quantity,
                    receipt.min_stock_limit,
                ));
            }
            Err(e) => self.fail("adding/updating stock", e),
        }
    }

    fn update(&mut self) {
        let Some(selected) = self.selected.clone() else {
            return self.reject(ValidationError::NoStockItemSelected);
        };

        let levels = match validate_stock_levels(&self.form.quantity, &self.form.min_stock_limit) {
            Ok(levels) => levels,
            Err(e) => return self.reject(e),
        };

        match self.stock_repository.update(&selected.with_levels(levels)) {
            Ok(()) => {
                self.succeed("Stock item updated successfully.");
                self.event_bus
                    .emit(StockItemUpdated::new(selected.inventory_stock_id));
            }
            Err(e) => self.fail("updating stock item", e),
        }
    }

    fn delete(&mut self) {
        let Some(id) = self.selected.as_ref().map(|s| s.inventory_stock_id) else {
            return;
        };

        match self.stock_repository.delete(id) {
            Ok(()) => {
                self.succeed("Stock item deleted successfully.");
                self.event_bus.emit(StockItemDeleted::new(id));
            }
            Err(e) => self.fail("deleting stock item", e),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.form = StockForm::default();
        self.status = StatusMessage::default();
    }

    fn status(&self) -> &StatusMessage {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::{
        MockInventoryStockRepository, MockProductRepository, MockSizeRepository,
    };
    use mockall::predicate::eq;

    fn stock(id: i64, product_id: i64, size_id: i64, quantity: i64, limit: i64) -> InventoryStock {
        InventoryStock {
            inventory_stock_id: id,
            product_id,
            product_name: Some(format!("Product {}", product_id)),
            size_id,
            size_value: Some(format!("Size {}", size_id)),
            current_quantity: quantity,
            min_stock_limit: limit,
        }
    }

    fn view_model(
        mut stock_repo: MockInventoryStockRepository,
        rows: Vec<InventoryStock>,
    ) -> InventoryStockViewModel {
        stock_repo
            .expect_get_stock_details()
            .returning(move || Ok(rows.clone()));

        let mut products = MockProductRepository::new();
        products.expect_get_all().returning(|| {
            Ok(vec![
                Product {
                    product_id: 1,
                    name: "Boots".to_string(),
                    description: None,
                    applicability_type: "Sindicalizado".to_string(),
                },
                Product {
                    product_id: 2,
                    name: "Shirt".to_string(),
                    description: None,
                    applicability_type: "Administrativo".to_string(),
                },
            ])
        });

        let mut sizes = MockSizeRepository::new();
        sizes.expect_get_all().returning(|| {
            Ok(vec![
                Size {
                    size_id: 1,
                    size_value: "M".to_string(),
                    notation_type: "Americana".to_string(),
                },
                Size {
                    size_id: 2,
                    size_value: "27".to_string(),
                    notation_type: "Mexicana".to_string(),
                },
            ])
        });

        InventoryStockViewModel::new(
            Arc::new(stock_repo),
            Arc::new(products),
            Arc::new(sizes),
            Arc::new(EventBus::new()),
        )
    }

    #[test]
    fn test_load_populates_stock_products_and_sizes() {
        let vm = view_model(
            MockInventoryStockRepository::new(),
            vec![stock(1, 1, 1, 10, 2), stock(2, 2, 2, 0, 1)],
        );

        assert_eq!(vm.stock_items().len(), 2);
        assert_eq!(vm.products().len(), 2);
        assert_eq!(vm.sizes().len(), 2);
    }

    #[test]
    fn test_update_valid_data_keeps_product_and_size() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_update()
            .withf(|s: &InventoryStock| {
                s.inventory_stock_id == 1
                    && s.product_id == 1
                    && s.size_id == 2
                    && s.current_quantity == 20
                    && s.min_stock_limit == 5
            })
            .times(1)
            .returning(|_| Ok(()));

        let mut vm = view_model(repo, vec![stock(1, 1, 2, 10, 2)]);
        vm.select(Some(1)).unwrap();
        vm.form_mut().product_id = 2;
        vm.form_mut().quantity = "20".to_string();
        vm.form_mut().min_stock_limit = "5".to_string();

        vm.update();

        assert_eq!(vm.status().text, "Stock item updated successfully.");
        assert!(vm.selected().is_none());
        assert_eq!(vm.form(), &StockForm::default());
    }

    #[test]
    fn test_update_without_selection_does_nothing() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_update().never();

        let mut vm = view_model(repo, vec![]);
        vm.update();

        assert_ne!(vm.status().text, "Stock item updated successfully.");
        assert_eq!(vm.status().text, "No stock item selected for update.");
    }

    #[test]
    fn test_update_invalid_quantity_is_rejected() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_update().never();

        let mut vm = view_model(repo, vec![stock(1, 1, 1, 10, 2)]);
        vm.select(Some(1)).unwrap();
        vm.form_mut().quantity = "-5".to_string();

        vm.update();

        assert_eq!(
            vm.status().text,
            "Invalid current quantity. Must be a non-negative number."
        );
    }

    #[test]
    fn test_update_invalid_limit_is_rejected() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_update().never();

        let mut vm = view_model(repo, vec![stock(1, 1, 1, 10, 2)]);
        vm.select(Some(1)).unwrap();
        vm.form_mut().min_stock_limit = "invalid".to_string();

        vm.update();

        assert_eq!(
            vm.status().text,
            "Invalid min stock limit. Must be a non-negative number."
        );
    }

    #[test]
    fn test_add_valid_data_upserts_once() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_add_or_update_stock()
            .with(eq(1), eq(2), eq(15), eq(3))
            .times(1)
            .returning(|_, _, _, _| Ok(()));

        let mut vm = view_model(repo, vec![]);
        vm.form_mut().product_id = 1;
        vm.form_mut().size_id = 2;
        vm.form_mut().quantity = "15".to_string();
        vm.form_mut().min_stock_limit = "3".to_string();
        assert!(vm.can_add());

        vm.add();

        assert_eq!(vm.status().text, "Stock added/updated successfully.");
        assert_eq!(vm.form(), &StockForm::default());
    }

    #[test]
    fn test_add_invalid_quantity_is_rejected() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_add_or_update_stock().never();

        let mut vm = view_model(repo, vec![]);
        vm.form_mut().product_id = 1;
        vm.form_mut().size_id = 2;
        vm.form_mut().quantity = "0".to_string();
        vm.form_mut().min_stock_limit = "3".to_string();

        vm.add();

        assert_eq!(vm.status().text, "Invalid quantity. Must be a positive number.");
    }

    #[test]
    fn test_add_invalid_limit_is_rejected() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_add_or_update_stock().never();

        let mut vm = view_model(repo, vec![]);
        vm.form_mut().product_id = 1;
        vm.form_mut().size_id = 2;
        vm.form_mut().quantity = "4".to_string();
        vm.form_mut().min_stock_limit = "-1".to_string();

        vm.add();

        assert_eq!(
            vm.status().text,
            "Invalid min stock limit. Must be a non-negative number."
        );
    }

    #[test]
    fn test_add_without_product_or_size_is_rejected() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_add_or_update_stock().never();

        let mut vm = view_model(repo, vec![]);
        vm.form_mut().quantity = "4".to_string();
        vm.form_mut().min_stock_limit = "1".to_string();

        vm.add();

        assert_eq!(vm.status().text, "Please select a product and a size.");
    }

    #[test]
    fn test_add_failure_keeps_inputs() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_add_or_update_stock()
            .returning(|_, _, _, _| Err(AppError::Other("busy".to_string())));

        let mut vm = view_model(repo, vec![]);
        vm.form_mut().product_id = 1;
        vm.form_mut().size_id = 1;
        vm.form_mut().quantity = "4".to_string();
        vm.form_mut().min_stock_limit = "1".to_string();

        vm.add();

        assert_eq!(vm.status().text, "Error adding/updating stock: Other error: busy");
        assert_eq!(vm.form().quantity, "4");
    }

    #[test]
    fn test_delete_valid_selection() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_delete()
            .with(eq(7))
            .times(1)
            .returning(|_| Ok(()));

        let mut vm = view_model(repo, vec![stock(7, 1, 1, 3, 0)]);
        vm.select(Some(7)).unwrap();
        vm.delete();

        assert_eq!(vm.status().text, "Stock item deleted successfully.");
        assert!(vm.selected().is_none());
    }

    #[test]
    fn test_delete_without_selection_does_nothing() {
        let mut repo = MockInventoryStockRepository::new();
        repo.expect_delete().never();

        let mut vm = view_model(repo, vec![]);
        vm.delete();

        assert!(vm.status().is_empty());
    }

    #[test]
    fn test_selecting_copies_levels_into_form() {
        let mut vm = view_model(MockInventoryStockRepository::new(), vec![stock(4, 2, 1, 9, 3)]);

        vm.select(Some(4)).unwrap();

        assert_eq!(
            vm.form(),
            &StockForm {
                product_id: 2,
                size_id: 1,
                quantity: "9".to_string(),
                min_stock_limit: "3".to_string(),
            }
        );

        vm.clear_selection();
        assert!(vm.selected().is_none());
        assert_eq!(vm.form().quantity, "");
        assert_eq!(vm.form().min_stock_limit, "");
    }
}
