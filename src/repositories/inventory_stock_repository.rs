// src/repositories/inventory_stock_repository.rs
//
// Stock rows per (product, size).
// New rows only come from add_or_update_stock; there is no plain insert.

use rusqlite::{params, OptionalExtension, Row, TransactionBehavior};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{AvailableSize, InventoryStock};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait InventoryStockRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<InventoryStock>>;
    fn get_stock_details(&self) -> AppResult<Vec<InventoryStock>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<InventoryStock>>;
    fn update(&self, stock: &InventoryStock) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;

    /// Insert the pair if missing, otherwise add `quantity` and replace the limit.
    fn add_or_update_stock(
        &self,
        product_id: i64,
        size_id: i64,
        quantity: i64,
        min_stock_limit: i64,
    ) -> AppResult<()>;

    /// Stock rows of a product with units left, ordered by size value
    fn get_available_sizes_for_product(&self, product_id: i64) -> AppResult<Vec<AvailableSize>>;
}

pub struct SqliteInventoryStockRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteInventoryStockRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_stock(row: &Row) -> Result<InventoryStock, rusqlite::Error> {
        Ok(InventoryStock {
            inventory_stock_id: row.get("inventory_stock_id")?,
            product_id: row.get("product_id")?,
            product_name: None,
            size_id: row.get("size_id")?,
            size_value: None,
            current_quantity: row.get("current_quantity")?,
            min_stock_limit: row.get("min_stock_limit")?,
        })
    }
}

impl InventoryStockRepository for SqliteInventoryStockRepository {
    fn get_all(&self) -> AppResult<Vec<InventoryStock>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT inventory_stock_id, product_id, size_id, current_quantity, min_stock_limit
             FROM inventory_stock
             ORDER BY inventory_stock_id",
        )?;

        let rows = stmt
            .query_map([], Self::row_to_stock)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn get_stock_details(&self) -> AppResult<Vec<InventoryStock>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT st.inventory_stock_id, st.product_id, p.name AS product_name,
                    st.size_id, s.size_value, st.current_quantity, st.min_stock_limit
             FROM inventory_stock st
             JOIN products p ON st.product_id = p.product_id
             JOIN sizes s ON st.size_id = s.size_id
             ORDER BY p.name, s.size_value",
        )?;

        let rows = stmt
            .query_map([], |row| {
                Ok(InventoryStock {
                    product_name: row.get("product_name")?,
                    size_value: row.get("size_value")?,
                    ..Self::row_to_stock(row)?
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(rows)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<InventoryStock>> {
        let conn = self.pool.get()?;

        let stock = conn
            .query_row(
                "SELECT inventory_stock_id, product_id, size_id, current_quantity, min_stock_limit
                 FROM inventory_stock WHERE inventory_stock_id = ?1",
                params![id],
                Self::row_to_stock,
            )
            .optional()?;

        Ok(stock)
    }

    fn update(&self, stock: &InventoryStock) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "UPDATE inventory_stock
             SET product_id = ?1, size_id = ?2, current_quantity = ?3, min_stock_limit = ?4
             WHERE inventory_stock_id = ?5",
            params![
                stock.product_id,
                stock.size_id,
                stock.current_quantity,
                stock.min_stock_limit,
                stock.inventory_stock_id,
            ],
        )?;

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute(
            "DELETE FROM inventory_stock WHERE inventory_stock_id = ?1",
            params![id],
        )?;
        Ok(())
    }

    fn add_or_update_stock(
        &self,
        product_id: i64,
        size_id: i64,
        quantity: i64,
        min_stock_limit: i64,
    ) -> AppResult<()> {
        let mut conn = self.pool.get()?;

        // IMMEDIATE takes the write lock up front so the existence check
        // and the write below cannot interleave with another writer
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let exists: bool = tx.query_row(
            "SELECT EXISTS(SELECT 1 FROM inventory_stock WHERE product_id = ?1 AND size_id = ?2)",
            params![product_id, size_id],
            |row| row.get(0),
        )?;

        if exists {
            tx.execute(
                "UPDATE inventory_stock
                 SET current_quantity = current_quantity + ?3,
                     min_stock_limit = ?4
                 WHERE product_id = ?1 AND size_id = ?2",
                params![product_id, size_id, quantity, min_stock_limit],
            )?;
        } else {
            tx.execute(
                "INSERT INTO inventory_stock (product_id, size_id, current_quantity, min_stock_limit)
                 VALUES (?1, ?2, ?3, ?4)",
                params![product_id, size_id, quantity, min_stock_limit],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    fn get_available_sizes_for_product(&self, product_id: i64) -> AppResult<Vec<AvailableSize>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT st.inventory_stock_id, s.size_value
             FROM inventory_stock st
             JOIN sizes s ON st.size_id = s.size_id
             WHERE st.product_id = ?1 AND st.current_quantity > 0
             ORDER BY s.size_value",
        )?;

        let sizes = stmt
            .query_map(params![product_id], |row| {
                Ok(AvailableSize {
                    inventory_stock_id: row.get("inventory_stock_id")?,
                    size_value: row.get("size_value")?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(sizes)
    }
}
