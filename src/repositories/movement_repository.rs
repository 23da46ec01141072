// src/repositories/movement_repository.rs
//
// Movement ledger.
//
// register_delivery is the only writer. Its rejection rules live in the
// schema (stock floor trigger, applicability trigger, CHECK constraints,
// foreign keys); this code only sequences the statements in one transaction.

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Row, TransactionBehavior};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Movement, DELIVERY_MOVEMENT_TYPE};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait MovementRepository: Send + Sync {
    /// Full history, newest first
    fn get_all_movements(&self) -> AppResult<Vec<Movement>>;

    /// Decrement the stock row and log the movement, atomically
    fn register_delivery(
        &self,
        inventory_stock_id: i64,
        employee_id: i64,
        quantity: i64,
    ) -> AppResult<()>;
}

pub struct SqliteMovementRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteMovementRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    // Dates are stored fixed-width (micros, `Z`) so text order is time order
    fn row_to_movement(row: &Row) -> Result<Movement, rusqlite::Error> {
        let movement_date_str: String = row.get("movement_date")?;
        let movement_date = DateTime::parse_from_rfc3339(&movement_date_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))?;

        Ok(Movement {
            movement_id: row.get("movement_id")?,
            movement_date,
            movement_type: row.get("movement_type")?,
            quantity_moved: row.get("quantity_moved")?,
            inventory_stock_id: row.get("inventory_stock_id")?,
            product_name: row.get("product_name")?,
            product_description: row.get("product_description")?,
            product_size: row.get("product_size")?,
            size_notation: row.get("size_notation")?,
            remaining_stock: row.get("remaining_stock")?,
            min_stock_limit: row.get("min_stock_limit")?,
            employee_id: row.get("employee_id")?,
            employee_name: row.get("employee_name")?,
            employee_group: row.get("employee_group")?,
            employee_type: row.get("employee_type")?,
            notes: row.get("notes")?,
        })
    }
}

impl MovementRepository for SqliteMovementRepository {
    fn get_all_movements(&self) -> AppResult<Vec<Movement>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT * FROM movement_history ORDER BY movement_date DESC, movement_id DESC",
        )?;

        let movements = stmt
            .query_map([], Self::row_to_movement)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(movements)
    }

    fn register_delivery(
        &self,
        inventory_stock_id: i64,
        employee_id: i64,
        quantity: i64,
    ) -> AppResult<()> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let updated = tx.execute(
            "UPDATE inventory_stock
             SET current_quantity = current_quantity - ?1
             WHERE inventory_stock_id = ?2",
            params![quantity, inventory_stock_id],
        )?;

        if updated == 0 {
            // Dropping the transaction rolls it back
            return Err(AppError::NotFound);
        }

        let remaining: i64 = tx.query_row(
            "SELECT current_quantity FROM inventory_stock WHERE inventory_stock_id = ?1",
            params![inventory_stock_id],
            |row| row.get(0),
        )?;

        tx.execute(
            "INSERT INTO movements (
                inventory_stock_id, employee_id, movement_type,
                quantity_moved, remaining_stock, movement_date, notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, NULL)",
            params![
                inventory_stock_id,
                employee_id,
                DELIVERY_MOVEMENT_TYPE,
                quantity,
                remaining,
                Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true),
            ],
        )?;

        tx.commit()?;

        log::info!(
            "Delivered {} unit(s) of stock row {} to employee {} ({} left)",
            quantity,
            inventory_stock_id,
            employee_id,
            remaining
        );
        Ok(())
    }
}
