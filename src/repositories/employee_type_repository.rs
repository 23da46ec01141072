// src/repositories/employee_type_repository.rs

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::EmployeeType;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait EmployeeTypeRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<EmployeeType>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<EmployeeType>>;
    fn add(&self, type_name: &str) -> AppResult<i64>;
    fn update(&self, employee_type: &EmployeeType) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteEmployeeTypeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteEmployeeTypeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_employee_type(row: &Row) -> Result<EmployeeType, rusqlite::Error> {
        Ok(EmployeeType {
            employee_type_id: row.get("employee_type_id")?,
            type_name: row.get("type_name")?,
        })
    }
}

impl EmployeeTypeRepository for SqliteEmployeeTypeRepository {
    fn get_all(&self) -> AppResult<Vec<EmployeeType>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT employee_type_id, type_name FROM employee_types ORDER BY employee_type_id",
        )?;

        let types = stmt
            .query_map([], Self::row_to_employee_type)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(types)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<EmployeeType>> {
        let conn = self.pool.get()?;

        let employee_type = conn
            .query_row(
                "SELECT employee_type_id, type_name FROM employee_types WHERE employee_type_id = ?1",
                params![id],
                Self::row_to_employee_type,
            )
            .optional()?;

        Ok(employee_type)
    }

    fn add(&self, type_name: &str) -> AppResult<i64> {
        let conn = self.pool.get()?;
        conn.execute(
            "INSERT INTO employee_types (type_name) VALUES (?1)",
            params![type_name],
        )?;
        Ok(conn.last_insert_rowid())
    }

    fn update(&self, employee_type: &EmployeeType) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "UPDATE employee_types SET type_name = ?1 WHERE employee_type_id = ?2",
            params![employee_type.type_name, employee_type.employee_type_id],
        )?;
        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "DELETE FROM employee_types WHERE employee_type_id = ?1",
            params![id],
        )?;
        Ok(())
    }
}
