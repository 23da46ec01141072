// src/view_models/size_view_model.rs

use std::sync::Arc;

use crate::config::FormDefaults;
use crate::domain::{validate_size_input, NewSize, Size, ValidationError, ValidationResult};
use crate::error::{AppError, AppResult};
use crate::events::{CatalogChanged, CatalogEntity, ChangeKind, EventBus};
use crate::repositories::SizeRepository;
use crate::view_models::{EditorCommands, StatusMessage};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SizeForm {
    pub size_value: String,
    pub notation_type: String,
}

impl SizeForm {
    fn reset(defaults: &FormDefaults) -> Self {
        Self {
            size_value: String::new(),
            notation_type: defaults.notation_type.clone(),
        }
    }
}

pub struct SizeViewModel {
    size_repository: Arc<dyn SizeRepository>,
    event_bus: Arc<EventBus>,
    defaults: FormDefaults,

    sizes: Vec<Size>,
    selected: Option<Size>,
    form: SizeForm,
    status: StatusMessage,
}

impl SizeViewModel {
    pub fn new(
        size_repository: Arc<dyn SizeRepository>,
        event_bus: Arc<EventBus>,
        defaults: FormDefaults,
    ) -> Self {
        let form = SizeForm::reset(&defaults);
        let mut view_model = Self {
            size_repository,
            event_bus,
            defaults,
            sizes: Vec::new(),
            selected: None,
            form,
            status: StatusMessage::default(),
        };
        view_model.load_data();
        view_model
    }

    pub fn load_data(&mut self) {
        match self.size_repository.get_all() {
            Ok(sizes) => self.sizes = sizes,
            Err(e) => {
                log::error!("Failed to load sizes: {}", e);
                self.status = StatusMessage::error(format!("Error loading data: {}", e));
            }
        }
    }

    pub fn sizes(&self) -> &[Size] {
        &self.sizes
    }

    pub fn selected(&self) -> Option<&Size> {
        self.selected.as_ref()
    }

    pub fn form(&self) -> &SizeForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut SizeForm {
        &mut self.form
    }

    pub fn select(&mut self, size_id: Option<i64>) -> AppResult<()> {
        let selected = match size_id {
            Some(id) => Some(
                self.sizes
                    .iter()
                    .find(|s| s.size_id == id)
                    .cloned()
                    .ok_or(AppError::NotFound)?,
            ),
            None => None,
        };

        self.form = match &selected {
            Some(size) => SizeForm {
                size_value: size.size_value.clone(),
                notation_type: size.notation_type.clone(),
            },
            None => SizeForm::reset(&self.defaults),
        };
        self.selected = selected;
        Ok(())
    }

    fn validated(&self) -> ValidationResult<NewSize> {
        validate_size_input(&self.form.size_value, &self.form.notation_type)
    }

    fn fail(&mut self, action: &str, error: AppError) {
        log::error!("Failed {} size: {}", action, error);
        self.status = StatusMessage::error(format!("Error {} size: {}", action, error));
    }
}

impl EditorCommands for SizeViewModel {
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

        match self.size_repository.add(&input) {
            Ok(id) => {
                self.load_data();
                self.form = SizeForm::reset(&self.defaults);
                self.status = StatusMessage::success("Size added successfully.");
                self.event_bus
                    .emit(CatalogChanged::new(CatalogEntity::Size, Some(id), ChangeKind::Added));
            }
            Err(e) => self.fail("adding", e),
        }
    }

    fn update(&mut self) {
        let Some(selected) = self.selected.clone() else {
            self.status = StatusMessage::error(ValidationError::NoSizeSelected.to_string());
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
        match self.size_repository.update(&updated) {
            Ok(()) => {
                self.load_data();
                self.selected = Some(updated);
                self.status = StatusMessage::success("Size updated successfully.");
                self.event_bus.emit(CatalogChanged::new(
                    CatalogEntity::Size,
                    Some(selected.size_id),
                    ChangeKind::Updated,
                ));
            }
            Err(e) => self.fail("updating", e),
        }
    }

    fn delete(&mut self) {
        let Some(id) = self.selected.as_ref().map(|s| s.size_id) else {
            return;
        };

        match self.size_repository.delete(id) {
            Ok(()) => {
                self.load_data();
                self.selected = None;
                self.form = SizeForm::reset(&self.defaults);
                self.status = StatusMessage::success("Size deleted successfully.");
                self.event_bus
                    .emit(CatalogChanged::new(CatalogEntity::Size, Some(id), ChangeKind::Deleted));
            }
            Err(e) => self.fail("deleting", e),
        }
    }

    fn clear_selection(&mut self) {
        self.selected = None;
        self.form = SizeForm::reset(&self.defaults);
        self.status = StatusMessage::default();
    }

    fn status(&self) -> &StatusMessage {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::MockSizeRepository;
    use crate::view_models::MessageKind;

    fn size(id: i64, value: &str) -> Size {
        Size {
            size_id: id,
            size_value: value.to_string(),
            notation_type: "Americana".to_string(),
        }
    }

    fn view_model(mut repo: MockSizeRepository, rows: Vec<Size>) -> SizeViewModel {
        repo.expect_get_all().returning(move || Ok(rows.clone()));
        SizeViewModel::new(Arc::new(repo), Arc::new(EventBus::new()), FormDefaults::default())
    }

    #[test]
    fn test_load_populates_sizes() {
        let vm = view_model(MockSizeRepository::new(), vec![size(1, "L"), size(2, "M")]);

        assert_eq!(vm.sizes().len(), 2);
        assert!(vm.sizes().iter().any(|s| s.size_value == "L"));
        assert!(vm.sizes().iter().any(|s| s.size_value == "M"));
    }

    #[test]
    fn test_update_valid_data_calls_repository() {
        let mut repo = MockSizeRepository::new();
        repo.expect_update()
            .withf(|s: &Size| s.size_id == 1 && s.size_value == "XL" && s.notation_type == "Mexicana")
            .times(1)
            .returning(|_| Ok(()));

        let mut vm = view_model(repo, vec![size(1, "L")]);
        vm.select(Some(1)).unwrap();
        vm.form_mut().size_value = "XL".to_string();
        vm.form_mut().notation_type = "Mexicana".to_string();

        vm.update();

        assert_eq!(vm.status().text, "Size updated successfully.");
        assert_eq!(vm.status().kind, MessageKind::Success);
    }

    #[test]
    fn test_update_without_selection_sets_message() {
        let mut repo = MockSizeRepository::new();
        repo.expect_update().never();

        let mut vm = view_model(repo, vec![]);
        vm.update();

        assert_eq!(vm.status().text, "Please select a size to update.");
    }

    #[test]
    fn test_update_invalid_data_is_rejected() {
        let mut repo = MockSizeRepository::new();
        repo.expect_update().never();

        let mut vm = view_model(repo, vec![size(1, "L")]);
        vm.select(Some(1)).unwrap();
        vm.form_mut().notation_type = " ".to_string();

        vm.update();

        assert_eq!(vm.status().text, "Please enter valid size value and notation type.");
    }

    #[test]
    fn test_add_valid_data() {
        let mut repo = MockSizeRepository::new();
        repo.expect_add()
            .withf(|s: &NewSize| s.size_value == "27" && s.notation_type == "Americana")
            .times(1)
            .returning(|_| Ok(4));

        let mut vm = view_model(repo, vec![]);
        vm.form_mut().size_value = "27".to_string();

        vm.add();

        assert_eq!(vm.status().text, "Size added successfully.");
        assert_eq!(vm.form().size_value, "");
        assert_eq!(vm.form().notation_type, "Americana");
    }

    #[test]
    fn test_add_invalid_data_is_rejected() {
        let mut repo = MockSizeRepository::new();
        repo.expect_add().never();

        let mut vm = view_model(repo, vec![]);
        vm.add();

        assert_eq!(vm.status().text, "Please enter valid size value and notation type.");
    }

    #[test]
    fn test_delete_valid_selection() {
        let mut repo = MockSizeRepository::new();
        repo.expect_delete()
            .with(mockall::predicate::eq(2))
            .times(1)
            .returning(|_| Ok(()));

        let mut vm = view_model(repo, vec![size(2, "M")]);
        vm.select(Some(2)).unwrap();
        vm.delete();

        assert_eq!(vm.status().text, "Size deleted successfully.");
    }

    #[test]
    fn test_delete_without_selection_does_nothing() {
        let mut repo = MockSizeRepository::new();
        repo.expect_delete().never();

        let mut vm = view_model(repo, vec![]);
        vm.delete();

        assert_ne!(vm.status().text, "Size deleted successfully.");
    }

    #[test]
    fn test_delete_failure_reports_cause() {
        let mut repo = MockSizeRepository::new();
        repo.expect_delete()
            .returning(|_| Err(AppError::Other("FOREIGN KEY constraint failed".to_string())));

        let mut vm = view_model(repo, vec![size(2, "M")]);
        vm.select(Some(2)).unwrap();
        vm.delete();

        assert_eq!(
            vm.status().text,
            "Error deleting size: Other error: FOREIGN KEY constraint failed"
        );
        assert!(vm.selected().is_some());
    }

    #[test]
    fn test_clear_selection_resets_inputs() {
        let mut vm = view_model(MockSizeRepository::new(), vec![size(1, "L")]);
        vm.select(Some(1)).unwrap();

        vm.clear_selection();

        assert!(vm.selected().is_none());
        assert_eq!(vm.form().size_value, "");
        assert_eq!(vm.form().notation_type, "Americana");
    }
}
