// src/view_models/product_view_model.rs

use std::sync::Arc;

use crate::config::FormDefaults;
use crate::domain::{
    validate_product_input, NewProduct, Product, ValidationError, ValidationResult,
};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogChanged, CatalogEntity, ChangeKind, EventBus};
use crate::repositories::ProductRepository;
use crate::view_models::{EditorCommands, StatusMessage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub applicability_type: String,
}

impl ProductForm {
    fn reset(defaults: &FormDefaults) -> Self {
        Self {
            applicability_type: defaults.applicability_type.clone(),
            ..Self::default()
        }
    }
}

pub struct ProductViewModel {
    product_repository: Arc<dyn ProductRepository>,
    event_bus: Arc<EventBus>,
    defaults: FormDefaults,

    products: Vec<Product>,
    selected: Option<Product>,
    form: ProductForm,
    status: StatusMessage,
}

impl ProductViewModel {
    pub fn new(
        product_repository: Arc<dyn ProductRepository>,
        event_bus: Arc<EventBus>,
        defaults: FormDefaults,
    ) -> Self {
        let form = ProductForm::reset(&defaults);
        let mut view_model = Self {
            product_repository,
            event_bus,
            defaults,
            products: Vec::new(),
            selected: None,
            form,
            status: StatusMessage::default(),
        };
        view_model.load_data();
        view_model
    }

    pub fn load_data(&mut self) {
        match self.product_repository.get_all() {
            Ok(products) => self.products = products,
            Err(e) => {
                log::error!("Failed to load products: {}", e);
                self.status = StatusMessage::error(format!("Error loading data: {}", e));
            }
        }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn selected(&self) -> Option<&Product> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut ProductForm {
        &mut self.form
    }

    pub fn select(&mut self, product_id: Option<i64>) -> AppResult<()> {
        let selected = match product_id {
            Some(id) => Some(
                self.products
                    .iter()
                    .find(|p| p.product_id == id)
                    .cloned()
                    .ok_or(AppError::NotFound)?,
            ),
            None => None,
        };

        self.form = match &selected {
            Some(product) => ProductForm {
                name: product.name.clone(),
                description: product.description.clone().unwrap_or_default(),
                applicability_type: product.applicability_type.clone(),
            },
            None => ProductForm::reset(&self.defaults),
        };
        self.selected = selected;
        Ok(())
    }

    fn validated(&self) -> ValidationResult<NewProduct> {
        validate_product_input(
            &self.form.name,
            &self.form.description,
            &self.form.applicability_type,
        )
    }

    fn fail(&mut self, action: &str, error: AppError) {
        log::error!("Failed {} product: {}", action, error);
        self.status = StatusMessage::error(format!("Error {} product: {}", action, error));
    }

    fn changed(&self, product_id: i64, change: ChangeKind) {
        self.event_bus
            .emit(CatalogChanged::new(CatalogEntity::Product, Some(product_id), change));
    }
}

impl EditorCommands for ProductViewModel {
    fn can_add(&self) -> bool {
        self.validated().is_ok()
    }

    fn can_update_or_delete(&self) -> bool {
        self.selected.is_some()
    }

    fn add(&mut self) {
        let input = match self.validated() {
            Ok(input) => input,
            Err(e) => {
                self.status = StatusMessage::error(e.to_string());
                return;
            }
        };

        match self.product_repository.add(&input) {
            Ok(id) => {
                self.load_data();
                self.form = ProductForm::reset(&self.defaults);
                self.status = StatusMessage::success("Product added successfully.");
                self.changed(id, ChangeKind::Added);
            }
            Err(e) => self.fail("adding", e),
        }
    }

    fn update(&mut self) {
        let Some(selected) = self.selected.clone() else {
            self.status = StatusMessage::error(ValidationError::NoProductSelected.to_string());
            return;
        };

        let input = match self.validated() {
            Ok(input) => input,
            Err(e) => {
                self.status = StatusMessage::error(e.to_string());
                return;
            }
        };

        let updated = selected.with_input(input);
        match self.product_repository.update(&updated) {
            Ok(()) => {
                self.load_data();
                self.selected = Some(updated);
                self.status = StatusMessage::success("Product updated successfully.");
                self.changed(selected.product_id, ChangeKind::Updated);
            }
            Err(e) => self.fail("updating", e),
        }
    }

    fn delete(&mut self) {
        let Some(id) = self.selected.as_ref().map(|p| p.product_id) else {
            return;
        };

        match self.product_repository.delete(id) {
            Ok(()) => {
                self.load_data();
                self.selected = None;
                self.form = ProductForm::reset(&self.defaults);
                self.status = StatusMessage::success("Product deleted successfully.");
                self.changed(id, ChangeKind::Deleted);
            }
            Err(e) => self.fail("deleting", e),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.form = ProductForm::reset(&self.defaults);
        self.status = StatusMessage::default();
    }

    fn status(&self) -> &StatusMessage {
        &self.status
    }
}
