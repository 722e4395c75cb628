//! SQLite product repository.
//!
//! Persists products in a single `products` table through an `sqlx` pool.
//! Ids come from `AUTOINCREMENT`, so a deleted id is never handed out again.

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::instrument;

use crate::config::ProductStoreConfig;
use crate::domain::catalog::product::ensure_storable_price;
use crate::domain::catalog::{CatalogError, NewProduct, Product, ProductRepository};
use crate::domain::shared::ProductId;

const CREATE_PRODUCTS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS products (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT    NOT NULL DEFAULT '',
    price       REAL    NOT NULL DEFAULT 0,
    description TEXT    NOT NULL DEFAULT ''
)";

#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    price: f64,
    description: String,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self::new(row.id, row.name, row.price, row.description)
    }
}

fn map_db_error(e: impl std::fmt::Display) -> CatalogError {
    CatalogError::Storage(e.to_string())
}

/// SQLite implementation of `ProductRepository`.
#[derive(Debug, Clone)]
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Open (creating if needed) the database at `config.database_url` and
    /// make sure the schema exists.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the URL is invalid, the file cannot
    /// be created, or the schema cannot be applied.
    pub async fn connect(config: &ProductStoreConfig) -> Result<Self, CatalogError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)
            .map_err(map_db_error)?
            .create_if_missing(true);

        if let Some(parent) = options
            .get_filename()
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
        {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(map_db_error)?;
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_with(options)
            .await
            .map_err(map_db_error)?;

        tracing::info!(database_url = %config.database_url, "Connected to product database");

        let repo = Self::from_pool(pool);
        repo.ensure_schema().await?;
        Ok(repo)
    }

    /// Wrap an existing pool. The schema is not touched.
    #[must_use]
    pub const fn from_pool(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Create the `products` table if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the statement fails.
    pub async fn ensure_schema(&self) -> Result<(), CatalogError> {
        sqlx::query(CREATE_PRODUCTS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }

    /// Insert `products` only if the table is empty.
    ///
    /// Returns how many products were inserted.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Storage` if the count or any insert fails; a
    /// failed insert rolls back the whole seed.
    #[instrument(skip(self, products))]
    pub async fn seed_if_empty(&self, products: Vec<NewProduct>) -> Result<usize, CatalogError> {
        for product in &products {
            ensure_storable_price(product.price)?;
        }

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM products")
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;
        if count > 0 {
            tracing::debug!(existing = count, "Product table already populated, skipping seed");
            return Ok(0);
        }

        let inserted = products.len();
        for product in products {
            sqlx::query("INSERT INTO products (name, price, description) VALUES (?, ?, ?)")
                .bind(product.name)
                .bind(product.price)
                .bind(product.description)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }
        tx.commit().await.map_err(map_db_error)?;

        tracing::info!(inserted, "Seeded product table");
        Ok(inserted)
    }

    /// Close the pool, waiting for connections to be returned.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProductRepository for SqliteProductRepository {
    #[instrument(skip(self))]
    async fn get_products(&self) -> Result<Vec<Product>, CatalogError> {
        let rows: Vec<ProductRow> =
            sqlx::query_as("SELECT id, name, price, description FROM products ORDER BY id")
                .fetch_all(&self.pool)
                .await
                .map_err(map_db_error)?;
        Ok(rows.into_iter().map(Product::from).collect())
    }

    #[instrument(skip(self))]
    async fn get_product_by_id(&self, id: ProductId) -> Result<Option<Product>, CatalogError> {
        let row: Option<ProductRow> =
            sqlx::query_as("SELECT id, name, price, description FROM products WHERE id = ?")
                .bind(id.value())
                .fetch_optional(&self.pool)
                .await
                .map_err(map_db_error)?;
        Ok(row.map(Product::from))
    }

    #[instrument(skip(self, product), fields(name = %product.name))]
    async fn add_product(&self, product: NewProduct) -> Result<Product, CatalogError> {
        ensure_storable_price(product.price)?;

        let result = sqlx::query("INSERT INTO products (name, price, description) VALUES (?, ?, ?)")
            .bind(&product.name)
            .bind(product.price)
            .bind(&product.description)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        let id = ProductId::new(result.last_insert_rowid());
        tracing::debug!(product_id = %id, "Product added");
        Ok(product.with_id(id))
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn update_product(&self, product: &Product) -> Result<(), CatalogError> {
        ensure_storable_price(product.price)?;

        let result =
            sqlx::query("UPDATE products SET name = ?, price = ?, description = ? WHERE id = ?")
                .bind(&product.name)
                .bind(product.price)
                .bind(&product.description)
                .bind(product.id.value())
                .execute(&self.pool)
                .await
                .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(CatalogError::UpdateOnMissingProduct {
                product_id: product.id,
            });
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, id: ProductId) -> Result<(), CatalogError> {
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() > 0 {
            tracing::debug!(product_id = %id, "Product deleted");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::seed::database_seed;

    async fn temp_repo() -> (tempfile::TempDir, SqliteProductRepository) {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("products.db").display());
        let repo = SqliteProductRepository::connect(&ProductStoreConfig::sqlite(url))
            .await
            .unwrap();
        (dir, repo)
    }

    #[tokio::test]
    async fn connect_creates_missing_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.db");
        let url = format!("sqlite://{}", path.display());

        let repo = SqliteProductRepository::connect(&ProductStoreConfig::sqlite(url))
            .await
            .unwrap();

        assert!(path.exists());
        assert!(repo.get_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn seed_only_runs_on_empty_table() {
        let (_dir, repo) = temp_repo().await;

        assert_eq!(repo.seed_if_empty(database_seed()).await.unwrap(), 3);
        assert_eq!(repo.seed_if_empty(database_seed()).await.unwrap(), 0);

        let products = repo.get_products().await.unwrap();
        assert_eq!(products.len(), 3);
        assert_eq!(products[0].name, "Test product G");
        assert_eq!(products[0].description, " Test");
    }

    #[tokio::test]
    async fn seed_with_non_finite_price_inserts_nothing() {
        let (_dir, repo) = temp_repo().await;
        let mut seed = database_seed();
        seed[1].price = f64::NAN;

        let err = repo.seed_if_empty(seed).await.unwrap_err();

        assert!(matches!(err, CatalogError::Storage(_)));
        assert!(repo.get_products().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn data_survives_reconnect() {
        let dir = tempfile::tempdir().unwrap();
        let url = format!("sqlite://{}", dir.path().join("products.db").display());
        let config = ProductStoreConfig::sqlite(url);

        let repo = SqliteProductRepository::connect(&config).await.unwrap();
        let added = repo
            .add_product(NewProduct::new("Headphones", 56.99, "Award winning headphones"))
            .await
            .unwrap();
        repo.close().await;

        let reopened = SqliteProductRepository::connect(&config).await.unwrap();
        let found = reopened.get_product_by_id(added.id).await.unwrap();
        assert_eq!(found, Some(added));
    }

    #[tokio::test]
    async fn update_with_unchanged_values_still_succeeds() {
        let (_dir, repo) = temp_repo().await;
        let added = repo
            .add_product(NewProduct::new("Notebook", 2.5, ""))
            .await
            .unwrap();

        repo.update_product(&added).await.unwrap();
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let (_dir, repo) = temp_repo().await;
        let first = repo.add_product(NewProduct::default()).await.unwrap();
        repo.delete_product(first.id).await.unwrap();

        let second = repo.add_product(NewProduct::default()).await.unwrap();

        assert!(second.id > first.id);
    }
}
