// src/repositories/group_repository.rs

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::Group;
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait GroupRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<Group>>;
    fn get_all_with_employee_type(&self) -> AppResult<Vec<Group>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Group>>;
    fn add(&self, name: &str, employee_type_id: i64) -> AppResult<i64>;
    fn update(&self, group: &Group) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteGroupRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteGroupRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_group(row: &Row) -> Result<Group, rusqlite::Error> {
        Ok(Group {
            group_id: row.get("group_id")?,
            name: row.get("name")?,
            employee_type_id: row.get("employee_type_id")?,
            employee_type_name: None,
        })
    }
}

impl GroupRepository for SqliteGroupRepository {
    fn get_all(&self) -> AppResult<Vec<Group>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT group_id, name, employee_type_id FROM employee_groups ORDER BY name",
        )?;

        let groups = stmt
            .query_map([], Self::row_to_group)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(groups)
    }

    fn get_all_with_employee_type(&self) -> AppResult<Vec<Group>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT g.group_id, g.name, g.employee_type_id, t.type_name AS employee_type_name
             FROM employee_groups g
             JOIN employee_types t ON g.employee_type_id = t.employee_type_id
             ORDER BY g.name",
        )?;

        let groups = stmt
            .query_map([], |row| {
                Ok(Group {
                    employee_type_name: row.get("employee_type_name")?,
                    ..Self::row_to_group(row)?
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(groups)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Group>> {
        let conn = self.pool.get()?;

        let group = conn
            .query_row(
                "SELECT group_id, name, employee_type_id FROM employee_groups WHERE group_id = ?1",
                params![id],
                Self::row_to_group,
            )
            .optional()?;

        Ok(group)
    }

    fn add(&self, name: &str, employee_type_id: i64) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO employee_groups (name, employee_type_id) VALUES (?1, ?2)",
            params![name, employee_type_id],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, group: &Group) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "UPDATE employee_groups SET name = ?1, employee_type_id = ?2 WHERE group_id = ?3",
            params![group.name, group.employee_type_id, group.group_id],
        )?;

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM employee_groups WHERE group_id = ?1", params![id])?;
        Ok(())
    }
}
