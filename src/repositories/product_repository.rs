// src/repositories/product_repository.rs

use rusqlite::{params, OptionalExtension, Row};
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::domain::{NewProduct, Product};
use crate::error::AppResult;

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    fn get_all(&self) -> AppResult<Vec<Product>>;
    fn get_by_id(&self, id: i64) -> AppResult<Option<Product>>;
    fn add(&self, product: &NewProduct) -> AppResult<i64>;
    fn update(&self, product: &Product) -> AppResult<()>;
    fn delete(&self, id: i64) -> AppResult<()>;
}

pub struct SqliteProductRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteProductRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn row_to_product(row: &Row) -> Result<Product, rusqlite::Error> {
        Ok(Product {
            product_id: row.get("product_id")?,
            name: row.get("name")?,
            description: row.get("description")?,
            applicability_type: row.get("applicability_type")?,
        })
    }
}

impl ProductRepository for SqliteProductRepository {
    fn get_all(&self) -> AppResult<Vec<Product>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(
            "SELECT product_id, name, description, applicability_type
             FROM products
             ORDER BY name",
        )?;

        let products = stmt
            .query_map([], Self::row_to_product)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(products)
    }

    fn get_by_id(&self, id: i64) -> AppResult<Option<Product>> {
        let conn = self.pool.get()?;

        let product = conn
            .query_row(
                "SELECT product_id, name, description, applicability_type
                 FROM products WHERE product_id = ?1",
                params![id],
                Self::row_to_product,
            )
            .optional()?;

        Ok(product)
    }

    fn add(&self, product: &NewProduct) -> AppResult<i64> {
        let conn = self.pool.get()?;

        conn.execute(
            "INSERT INTO products (name, description, applicability_type) VALUES (?1, ?2, ?3)",
            params![product.name, product.description, product.applicability_type],
        )?;

        Ok(conn.last_insert_rowid())
    }

    fn update(&self, product: &Product) -> AppResult<()> {
        let conn = self.pool.get()?;

        conn.execute(
            "UPDATE products SET name = ?1, description = ?2, applicability_type = ?3
             WHERE product_id = ?4",
            params![
                product.name,
                product.description,
                product.applicability_type,
                product.product_id,
            ],
        )?;

        Ok(())
    }

    fn delete(&self, id: i64) -> AppResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM products WHERE product_id = ?1", params![id])?;
        Ok(())
    }
}
