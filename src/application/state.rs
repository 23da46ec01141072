// src/application/state.rs

use std::sync::{Arc, Mutex};

use anyhow::Context;

use crate::config::{AppConfig, FormDefaults};
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::events::{create_event_bus, register_view_refresh_handlers, EventBus, RefreshTargets};
use crate::repositories::*;
use crate::view_models::{
    DeliveryViewModel, EmployeeViewModel, InventoryStockViewModel, MovementHistoryViewModel,
    ProductViewModel, SizeViewModel,
};

/// Application state shared by every command.
/// Each view-model lives behind its own mutex so one command never blocks
/// a view it does not touch.
pub struct AppState {
    pub pool: Arc<ConnectionPool>,
    pub event_bus: Arc<EventBus>,
    pub employees: Arc<Mutex<EmployeeViewModel>>,
    pub products: Arc<Mutex<ProductViewModel>>,
    pub sizes: Arc<Mutex<SizeViewModel>>,
    pub stock: Arc<Mutex<InventoryStockViewModel>>,
    pub delivery: Arc<Mutex<DeliveryViewModel>>,
    pub movement_history: Arc<Mutex<MovementHistoryViewModel>>,
}

impl AppState {
    /// Open (and if needed create) the database, then build every view.
    pub fn bootstrap(config: &AppConfig) -> anyhow::Result<Self> {
        // 1. INFRASTRUCTURE
        let pool = Arc::new(
            create_connection_pool(&config.database).context("failed to open the database")?,
        );

        // Initialize schema (idempotent)
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn).context("failed to initialize the database schema")?;
            verify_database_integrity(&conn)?;
        }

        Ok(Self::from_pool(pool, config.defaults.clone()))
    }

    /// Wire repositories, view-models and refresh handlers over an
    /// already-initialized pool.
    pub fn from_pool(pool: Arc<ConnectionPool>, defaults: FormDefaults) -> Self {
        let event_bus = Arc::new(create_event_bus());

        // 2. REPOSITORIES
        let employee_repo: Arc<dyn EmployeeRepository> =
            Arc::new(SqliteEmployeeRepository::new(pool.clone()));
        let group_repo: Arc<dyn GroupRepository> =
            Arc::new(SqliteGroupRepository::new(pool.clone()));
        let product_repo: Arc<dyn ProductRepository> =
            Arc::new(SqliteProductRepository::new(pool.clone()));
        let size_repo: Arc<dyn SizeRepository> = Arc::new(SqliteSizeRepository::new(pool.clone()));
        let stock_repo: Arc<dyn InventoryStockRepository> =
            Arc::new(SqliteInventoryStockRepository::new(pool.clone()));
        let movement_repo: Arc<dyn MovementRepository> =
            Arc::new(SqliteMovementRepository::new(pool.clone()));

        // 3. VIEW-MODELS
        let employees = Arc::new(Mutex::new(EmployeeViewModel::new(
            employee_repo.clone(),
            group_repo,
            event_bus.clone(),
        )));
        let products = Arc::new(Mutex::new(ProductViewModel::new(
            product_repo.clone(),
            event_bus.clone(),
            defaults.clone(),
        )));
        let sizes = Arc::new(Mutex::new(SizeViewModel::new(
            size_repo.clone(),
            event_bus.clone(),
            defaults,
        )));
        let stock = Arc::new(Mutex::new(InventoryStockViewModel::new(
            stock_repo.clone(),
            product_repo.clone(),
            size_repo,
            event_bus.clone(),
        )));
        let delivery = Arc::new(Mutex::new(DeliveryViewModel::new(
            movement_repo.clone(),
            employee_repo,
            product_repo,
            stock_repo,
            event_bus.clone(),
        )));
        let movement_history = Arc::new(Mutex::new(MovementHistoryViewModel::new(movement_repo)));

        // 4. EVENT HANDLER REGISTRATION (WIRING)
        register_view_refresh_handlers(
            &event_bus,
            RefreshTargets {
                stock: Arc::downgrade(&stock),
                delivery: Arc::downgrade(&delivery),
                movement_history: Arc::downgrade(&movement_history),
            },
        );

        log::info!("Application state ready");

        Self {
            pool,
            event_bus,
            employees,
            products,
            sizes,
            stock,
            delivery,
            movement_history,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::view_models::{EditorCommands, MessageKind};

    fn bootstrap_in(dir: &tempfile::TempDir) -> AppState {
        let config = AppConfig {
            database: DatabaseConfig::at_path(dir.path().join("inventory.db")),
            defaults: FormDefaults::default(),
        };
        AppState::bootstrap(&config).unwrap()
    }

    #[test]
    fn test_bootstrap_fresh_database() {
        let dir = tempfile::tempdir().unwrap();
        let state = bootstrap_in(&dir);

        let employees = state.employees.lock().unwrap();
        assert!(employees.employees().is_empty());
        assert_eq!(employees.groups().len(), 2);
        assert!(state.movement_history.lock().unwrap().movements().is_empty());
    }

    #[test]
    fn test_bootstrap_twice_reuses_file() {
        let dir = tempfile::tempdir().unwrap();
        {
            let state = bootstrap_in(&dir);
            let mut products = state.products.lock().unwrap();
            products.form_mut().name = "Helmet".to_string();
            products.form_mut().description = "Hard hat".to_string();
            products.add();
        }

        let state = bootstrap_in(&dir);
        assert_eq!(state.products.lock().unwrap().products().len(), 1);
    }

    #[test]
    fn test_writes_refresh_dependent_views() {
        let dir = tempfile::tempdir().unwrap();
        let state = bootstrap_in(&dir);

        {
            let mut products = state.products.lock().unwrap();
            let form = products.form_mut();
            form.name = "Boots".to_string();
            form.description = "Steel toe".to_string();
            form.applicability_type = "Sindicalizado".to_string();
            products.add();
            assert_eq!(products.status().kind, MessageKind::Success);
        }
        {
            let mut sizes = state.sizes.lock().unwrap();
            sizes.form_mut().size_value = "27".to_string();
            sizes.form_mut().notation_type = "Mexicana".to_string();
            sizes.add();
        }
        {
            let mut employees = state.employees.lock().unwrap();
            employees.form_mut().name = "Ana".to_string();
            employees.form_mut().group_id = 2;
            employees.add();
        }

        // Catalog events reached the stock and delivery views
        assert_eq!(state.stock.lock().unwrap().products().len(), 1);
        assert_eq!(state.stock.lock().unwrap().sizes().len(), 1);
        assert_eq!(state.delivery.lock().unwrap().employees().len(), 1);

        {
            let mut stock = state.stock.lock().unwrap();
            let form = stock.form_mut();
            form.product_id = 1;
            form.size_id = 1;
            form.quantity = "10".to_string();
            form.min_stock_limit = "2".to_string();
            stock.add();
            assert_eq!(stock.stock_items()[0].current_quantity, 10);
        }

        {
            let mut delivery = state.delivery.lock().unwrap();
            delivery.set_employee_id(1);
            delivery.select_product(1);
            assert_eq!(delivery.available_sizes().len(), 1);
            let inventory_stock_id = delivery.available_sizes()[0].inventory_stock_id;
            delivery.set_inventory_stock_id(inventory_stock_id);
            delivery.set_quantity("3");
            delivery.register_delivery();
            assert_eq!(delivery.status().text, "Delivery registered successfully.");
        }

        let history = state.movement_history.lock().unwrap();
        assert_eq!(history.movements().len(), 1);
        assert_eq!(history.movements()[0].remaining_stock, 7);
        assert_eq!(history.movements()[0].employee_name.as_deref(), Some("Ana"));

        assert_eq!(state.stock.lock().unwrap().stock_items()[0].current_quantity, 7);
    }
}
