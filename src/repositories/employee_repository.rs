// src/repositories/employee_repository.rs
//
// Employee persistence

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{Employee, NewEmployee};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait EmployeeRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<Employee>>;
    fn get_all_with_group_and_type(&self) -> AppResult<Vec<Employee>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Employee>>;
    fn add(&self, employee: &NewEmployee) -> AppResult<i64>;
    fn update(&self, employee: &Employee) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteEmployeeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteEmployeeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_employee(row: &Row) -> Result<Employee, rusqlite::Error> {
        Ok(Employee {
            employee_id: row.get("employee_id")?,
            name: row.get("name")?,
            group_id: row.get("group_id")?,
            group_name: None,
            employee_type_name: None,
        })
    }

    fn row_to_employee_with_labels(row: &Row) -> Result<Employee, rusqlite::Error> {
        Ok(Employee {
            group_name: row.get("group_name")?,
            employee_type_name: row.get("employee_type_name")?,
            ..Self::row_to_employee(row)?
        })
    }
}

impl EmployeeRepository for SqliteEmployeeRepository {
    fn get_all(&self) -> AppResult<Vec<Employee>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT employee_id, name, group_id FROM employees ORDER BY name",
        )?;

        let employees = stmt
            .query_map([], Self::row_to_employee)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    fn get_all_with_group_and_type(&self) -> AppResult<Vec<Employee>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT e.employee_id, e.name, e.group_id,
                    g.name AS group_name,
                    t.type_name AS employee_type_name
             FROM employees e
             JOIN employee_groups g ON e.group_id = g.group_id
             JOIN employee_types t ON g.employee_type_id = t.employee_type_id
             ORDER BY e.name",
        )?;

        let employees = stmt
            .query_map([], Self::row_to_employee_with_labels)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(employees)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Employee>> {
        let conn = self.pool.get()?;

        let employee = conn
            .query_row(
                "SELECT employee_id, name, group_id FROM employees WHERE employee_id = ?1",
                params![id],
                Self::row_to_employee,
            )
            .optional()?;

        Ok(employee)
    }

    fn add(&self, employee: &NewEmployee) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO employees (name, group_id) VALUES (?1, ?2)",
            params![employee.name, employee.group_id],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, employee: &Employee) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "UPDATE employees SET name = ?1, group_id = ?2 WHERE employee_id = ?3",
            params![employee.name, employee.group_id, employee.employee_id],
        )?;

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM employees WHERE employee_id = ?1", params![id])?;
        Ok(())
    }
}
