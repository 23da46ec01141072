// src/view_models/delivery_view_model.rs
//
// Delivery form: employee, product, then one of the product's sizes that
// still has units. Picking a product re-queries its available sizes.

use std::sync::Arc;

use crate::domain::{validate_delivery_input, AvailableSize, Employee, Product};
use crate::error::AppResult;
use crate::events::{DeliveryRegistered, EventBus};
use crate::repositories::{
    EmployeeRepository, InventoryStockRepository, MovementRepository, ProductRepository,
};
use crate::view_models::StatusMessage;

/// Raw delivery inputs. Ids of 0 mean "nothing picked".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeliveryForm {
    pub employee_id: i64,
    pub product_id: i64,

    /// Stock row of the picked size
    pub inventory_stock_id: i64,

    pub quantity: String,
}

pub struct DeliveryViewModel {
    movement_repository: Arc<dyn MovementRepository>,
    employee_repository: Arc<dyn EmployeeRepository>,
    product_repository: Arc<dyn ProductRepository>,
    stock_repository: Arc<dyn InventoryStockRepository>,
    event_bus: Arc<EventBus>,

    employees: Vec<Employee>,
    products: Vec<Product>,
    available_sizes: Vec<AvailableSize>,
    form: DeliveryForm,
    status: StatusMessage,
}

impl DeliveryViewModel {
    pub fn new(
        movement_repository: Arc<dyn MovementRepository>,
        employee_repository: Arc<dyn EmployeeRepository>,
        product_repository: Arc<dyn ProductRepository>,
        stock_repository: Arc<dyn InventoryStockRepository>,
        event_bus: Arc<EventBus>,
    ) -> Self {
        let mut view_model = Self {
            movement_repository,
            employee_repository,
            product_repository,
            stock_repository,
            event_bus,
            employees: Vec::new(),
            products: Vec::new(),
            available_sizes: Vec::new(),
            form: DeliveryForm::default(),
            status: StatusMessage::default(),
        };
        view_model.load_data();
        view_model
    }

    /// Reload employees and products. If a product is picked its sizes are
    /// re-queried too; the picked size survives only if it still has units.
    pub fn load_data(&mut self) {
        if let Err(e) = self.try_load() {
            log::error!("Failed to load delivery data: {}", e);
            self.status = StatusMessage::error(format!("Error loading initial data: {}", e));
            return;
        }

        if self.form.product_id > 0 {
            let kept = self.form.inventory_stock_id;
            self.load_available_sizes();
            if self
                .available_sizes
                .iter()
                .any(|s| s.inventory_stock_id == kept)
            {
                self.form.inventory_stock_id = kept;
            }
        }
    }

    fn try_load(&mut self) -> AppResult<()> {
        self.employees = self.employee_repository.get_all()?;
        self.products = self.product_repository.get_all()?;
        Ok(())
    }

    fn load_available_sizes(&mut self) {
        match self
            .stock_repository
            .get_available_sizes_for_product(self.form.product_id)
        {
            Ok(sizes) => {
                self.available_sizes = sizes;
                self.form.inventory_stock_id = 0;
            }
            Err(e) => {
                log::error!(
                    "Failed to load sizes for product {}: {}",
                    self.form.product_id,
                    e
                );
                self.status =
                    StatusMessage::error(format!("Error loading available sizes: {}", e));
            }
        }
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn available_sizes(&self) -> &[AvailableSize] {
        &self.available_sizes
    }

    pub fn form(&self) -> &DeliveryForm {
        &self.form
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }

    pub fn set_employee_id(&mut self, employee_id: i64) {
        self.form.employee_id = employee_id;
    }

    /// Pick a product; 0 clears the size list
    pub fn select_product(&mut self, product_id: i64) {
        self.form.product_id = product_id;
        if product_id > 0 {
            self.load_available_sizes();
        } else {
            self.available_sizes.clear();
        }
    }

    pub fn set_inventory_stock_id(&mut self, inventory_stock_id: i64) {
        self.form.inventory_stock_id = inventory_stock_id;
    }

    pub fn set_quantity(&mut self, quantity: impl Into<String>) {
        self.form.quantity = quantity.into();
    }

    pub fn can_register(&self) -> bool {
        validate_delivery_input(
            self.form.inventory_stock_id,
            self.form.employee_id,
            &self.form.quantity,
        )
        .is_ok()
    }

    /// Run the delivery transaction. The database may still refuse it
    /// (insufficient stock, product not applicable to the employee type);
    /// that refusal becomes the error status and nothing else changes.
    pub fn register_delivery(&mut self) {
        let request = match validate_delivery_input(
            self.form.inventory_stock_id,
            self.form.employee_id,
            &self.form.quantity,
        ) {
            Ok(request) => request,
            Err(e) => {
                self.status = StatusMessage::error(e.to_string());
                return;
            }
        };

        match self.movement_repository.register_delivery(
            request.inventory_stock_id,
            request.employee_id,
            request.quantity,
        ) {
            Ok(()) => {
                self.status = StatusMessage::success("Delivery registered successfully.");
                self.clear_fields();
                self.event_bus.emit(DeliveryRegistered::new(
                    request.inventory_stock_id,
                    request.employee_id,
                    request.quantity,
                ));
            }
            Err(e) => {
                log::error!("Failed registering delivery: {}", e);
                self.status = StatusMessage::error(format!("Error registering delivery: {}", e));
            }
        }
    }

    /// Reset every input and the size list; the status line is kept
    pub fn clear_fields(&mut self) {
        self.form = DeliveryForm::default();
        self.available_sizes.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::repositories::{
        MockEmployeeRepository, MockInventoryStockRepository, MockMovementRepository,
        MockProductRepository,
    };
    use crate::view_models::MessageKind;
    use mockall::predicate::eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn view_model_with(
        movements: MockMovementRepository,
        stock: MockInventoryStockRepository,
        bus: Arc<EventBus>,
    ) -> DeliveryViewModel {
        let mut employees = MockEmployeeRepository::new();
        employees.expect_get_all().returning(|| Ok(vec![]));
        let mut products = MockProductRepository::new();
        products.expect_get_all().returning(|| Ok(vec![]));

        DeliveryViewModel::new(
            Arc::new(movements),
            Arc::new(employees),
            Arc::new(products),
            Arc::new(stock),
            bus,
        )
    }

    fn view_model(movements: MockMovementRepository) -> DeliveryViewModel {
        view_model_with(
            movements,
            MockInventoryStockRepository::new(),
            Arc::new(EventBus::new()),
        )
    }

    fn sizes() -> Vec<AvailableSize> {
        vec![
            AvailableSize {
                inventory_stock_id: 11,
                size_value: "L".to_string(),
            },
            AvailableSize {
                inventory_stock_id: 12,
                size_value: "M".to_string(),
            },
        ]
    }

    #[test]
    fn test_register_valid_data_calls_repository_once() {
        let mut movements = MockMovementRepository::new();
        movements
            .expect_register_delivery()
            .with(eq(1), eq(1), eq(10))
            .times(1)
            .returning(|_, _, _| Ok(()));

        let mut vm = view_model(movements);
        vm.set_inventory_stock_id(1);
        vm.set_employee_id(1);
        vm.set_quantity("10");
        assert!(vm.can_register());

        vm.register_delivery();

        assert_eq!(vm.status().text, "Delivery registered successfully.");
        assert_eq!(vm.status().kind, MessageKind::Success);
        assert_eq!(vm.form(), &DeliveryForm::default());
    }

    #[test]
    fn test_register_invalid_quantity_never_reaches_repository() {
        let mut movements = MockMovementRepository::new();
        movements.expect_register_delivery().never();

        let mut vm = view_model(movements);
        vm.set_inventory_stock_id(1);
        vm.set_employee_id(1);
        vm.set_quantity("invalid");
        assert!(!vm.can_register());

        vm.register_delivery();

        assert_eq!(vm.status().text, "Invalid quantity. Must be a positive number.");
    }

    #[test]
    fn test_register_zero_quantity_is_rejected() {
        let mut movements = MockMovementRepository::new();
        movements.expect_register_delivery().never();

        let mut vm = view_model(movements);
        vm.set_inventory_stock_id(1);
        vm.set_employee_id(1);
        vm.set_quantity("0");

        vm.register_delivery();

        assert_eq!(vm.status().text, "Invalid quantity. Must be a positive number.");
    }

    #[test]
    fn test_register_without_selection_is_rejected() {
        let mut movements = MockMovementRepository::new();
        movements.expect_register_delivery().never();

        let mut vm = view_model(movements);
        vm.set_quantity("3");

        vm.register_delivery();

        assert_eq!(
            vm.status().text,
            "Please select an employee, a product and a size."
        );
    }

    #[test]
    fn test_database_refusal_keeps_inputs() {
        let mut movements = MockMovementRepository::new();
        movements.expect_register_delivery().returning(|_, _, _| {
            Err(AppError::Other("Insufficient stock for delivery".to_string()))
        });

        let mut vm = view_model(movements);
        vm.set_inventory_stock_id(1);
        vm.set_employee_id(2);
        vm.set_quantity("50");

        vm.register_delivery();

        assert_eq!(
            vm.status().text,
            "Error registering delivery: Other error: Insufficient stock for delivery"
        );
        assert_eq!(vm.form().quantity, "50");
        assert_eq!(vm.form().employee_id, 2);
    }

    #[test]
    fn test_successful_delivery_is_announced() {
        let mut movements = MockMovementRepository::new();
        movements
            .expect_register_delivery()
            .returning(|_, _, _| Ok(()));

        let bus = Arc::new(EventBus::new());
        let delivered = Arc::new(AtomicUsize::new(0));
        let delivered_clone = Arc::clone(&delivered);
        bus.subscribe::<DeliveryRegistered, _>(move |event| {
            delivered_clone.fetch_add(event.quantity as usize, Ordering::SeqCst);
        });

        let mut vm = view_model_with(movements, MockInventoryStockRepository::new(), bus);
        vm.set_inventory_stock_id(4);
        vm.set_employee_id(2);
        vm.set_quantity("6");
        vm.register_delivery();

        assert_eq!(delivered.load(Ordering::SeqCst), 6);
    }

    #[test]
    fn test_clear_fields_resets_inputs_but_keeps_message() {
        let mut movements = MockMovementRepository::new();
        movements.expect_register_delivery().never();

        let mut vm = view_model(movements);
        vm.set_inventory_stock_id(1);
        vm.set_employee_id(1);
        vm.set_quantity("x");
        vm.register_delivery();

        vm.clear_fields();

        assert_eq!(vm.form().inventory_stock_id, 0);
        assert_eq!(vm.form().employee_id, 0);
        assert_eq!(vm.form().quantity, "");
        assert_eq!(vm.status().text, "Invalid quantity. Must be a positive number.");
    }

    #[test]
    fn test_selecting_product_loads_sizes_and_resets_size() {
        let mut stock = MockInventoryStockRepository::new();
        stock
            .expect_get_available_sizes_for_product()
            .with(eq(3))
            .times(1)
            .returning(|_| Ok(sizes()));

        let mut vm = view_model_with(
            MockMovementRepository::new(),
            stock,
            Arc::new(EventBus::new()),
        );
        vm.set_inventory_stock_id(99);

        vm.select_product(3);

        assert_eq!(vm.available_sizes().len(), 2);
        assert_eq!(vm.form().inventory_stock_id, 0);

        vm.select_product(0);
        assert!(vm.available_sizes().is_empty());
    }

    #[test]
    fn test_size_query_failure_sets_error() {
        let mut stock = MockInventoryStockRepository::new();
        stock
            .expect_get_available_sizes_for_product()
            .returning(|_| Err(AppError::Other("gone".to_string())));

        let mut vm = view_model_with(
            MockMovementRepository::new(),
            stock,
            Arc::new(EventBus::new()),
        );
        vm.select_product(3);

        assert_eq!(vm.status().text, "Error loading available sizes: Other error: gone");
    }

    #[test]
    fn test_reload_keeps_size_that_still_has_units() {
        let mut stock = MockInventoryStockRepository::new();
        stock
            .expect_get_available_sizes_for_product()
            .returning(|_| Ok(sizes()));

        let mut vm = view_model_with(
            MockMovementRepository::new(),
            stock,
            Arc::new(EventBus::new()),
        );
        vm.select_product(3);
        vm.set_inventory_stock_id(12);

        vm.load_data();

        assert_eq!(vm.form().inventory_stock_id, 12);
    }
}
