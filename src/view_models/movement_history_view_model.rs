// src/view_models/movement_history_view_model.rs

use std::sync::Arc;

use crate::domain::Movement;
use crate::repositories::MovementRepository;
use crate::view_models::StatusMessage;

/// Read-only list of every movement, newest first
pub struct MovementHistoryViewModel {
    movement_repository: Arc<dyn MovementRepository>,
    movements: Vec<Movement>,
    status: StatusMessage,
}

impl MovementHistoryViewModel {
    /// Loads the history immediately
    pub fn new(movement_repository: Arc<dyn MovementRepository>) -> Self {
        let mut view_model = Self {
            movement_repository,
            movements: Vec::new(),
            status: StatusMessage::default(),
        };
        view_model.refresh();
        view_model
    }

    pub fn refresh(&mut self) {
        match self.movement_repository.get_all_movements() {
            Ok(movements) => {
                self.movements = movements;
                self.status = StatusMessage::success("Movement history refreshed.");
            }
            Err(e) => {
                log::error!("Failed to load movement history: {}", e);
                self.status =
                    StatusMessage::error(format!("Error loading movement history: {}", e));
            }
        }
    }

    pub fn movements(&self) -> &[Movement] {
        &self.movements
    }

    pub fn status(&self) -> &StatusMessage {
        &self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DELIVERY_MOVEMENT_TYPE;
    use crate::error::AppError;
    use crate::repositories::MockMovementRepository;
    use crate::view_models::MessageKind;
    use chrono::{TimeZone, Utc};

    fn movement(id: i64) -> Movement {
        Movement {
            movement_id: id,
            movement_date: Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap(),
            movement_type: DELIVERY_MOVEMENT_TYPE.to_string(),
            quantity_moved: 2,
            inventory_stock_id: 1,
            product_name: "Boots".to_string(),
            product_description: None,
            product_size: "27".to_string(),
            size_notation: "Mexicana".to_string(),
            remaining_stock: 8,
            min_stock_limit: 2,
            employee_id: Some(1),
            employee_name: Some("Luis".to_string()),
            employee_group: Some("Planta".to_string()),
            employee_type: Some("Sindicalizado".to_string()),
            notes: None,
        }
    }

    #[test]
    fn test_loads_on_construction() {
        let mut repo = MockMovementRepository::new();
        repo.expect_get_all_movements()
            .times(1)
            .returning(|| Ok(vec![movement(2), movement(1)]));

        let vm = MovementHistoryViewModel::new(Arc::new(repo));

        assert_eq!(vm.movements().len(), 2);
        assert_eq!(vm.status().text, "Movement history refreshed.");
        assert_eq!(vm.status().kind, MessageKind::Success);
    }

    #[test]
    fn test_refresh_failure_keeps_previous_rows() {
        let mut repo = MockMovementRepository::new();
        let mut calls = 0;
        repo.expect_get_all_movements().returning(move || {
            calls += 1;
            if calls == 1 {
                Ok(vec![movement(1)])
            } else {
                Err(AppError::Other("database is locked".to_string()))
            }
        });

        let mut vm = MovementHistoryViewModel::new(Arc::new(repo));
        vm.refresh();

        assert_eq!(vm.movements().len(), 1);
        assert_eq!(
            vm.status().text,
            "Error loading movement history: Other error: database is locked"
        );
    }
}
