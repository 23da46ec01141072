// src/repositories/size_repository.rs

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{NewSize, Size};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait SizeRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<Size>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Size>>;
    fn add(&self, size: &NewSize) -> AppResult<i64>;
    fn update(&self, size: &Size) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteSizeRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteSizeRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_size(row: &Row) -> Result<Size, rusqlite::Error> {
        Ok(Size {
            size_id: row.get("size_id")?,
            size_value: row.get("size_value")?,
            notation_type: row.get("notation_type")?,
        })
    }
}

impl SizeRepository for SqliteSizeRepository {
    fn get_all(&self) -> AppResult<Vec<Size>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT size_id, size_value, notation_type FROM sizes ORDER BY notation_type, size_value",
        )?;

        let sizes = stmt
            .query_map([], Self::row_to_size)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sizes)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Size>> {
        let conn = self.pool.get()?;

        let size = conn
            .query_row(
                "SELECT size_id, size_value, notation_type FROM sizes WHERE size_id = ?1",
                params![id],
                Self::row_to_size,
            )
            .optional()?;

        Ok(size)
    }

    fn add(&self, size: &NewSize) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO sizes (size_value, notation_type) VALUES (?1, ?2)",
            params![size.size_value, size.notation_type],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, size: &Size) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "UPDATE sizes SET size_value = ?1, notation_type = ?2 WHERE size_id = ?3",
            params![size.size_value, size.notation_type, size.size_id],
        )?;

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM sizes WHERE size_id = ?1", params![id])?;
        Ok(())
    }
}
