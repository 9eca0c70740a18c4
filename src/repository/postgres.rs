use async_trait::async_trait;
use sqlx::PgPool;
use tracing::{debug, instrument};

use super::{ProductRepository, RepositoryError, RepositoryResult, SortDirection};
use crate::models::product::Product;

const PRODUCT_COLUMNS: &str = "id, name, description, price, quantity";

#[derive(Clone)]
pub struct PgProductRepository {
    pool: PgPool,
}

impl PgProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY id"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    #[instrument(skip(self))]
    async fn list_ordered_by_price(
        &self,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Product>> {
        // direction comes from a closed enum, never from request text
        let products = sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY price {}, id ASC",
            direction.as_sql()
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }

    #[instrument(skip(self, product), fields(id = ?product.id))]
    async fn persist(&self, product: Product) -> RepositoryResult<Product> {
        if let Some(id) = product.id {
            return self
                .update_existing(id, product)
                .await?
                .ok_or(RepositoryError::Database(sqlx::Error::RowNotFound));
        }

        let mut tx = self.pool.begin().await?;

        let saved = sqlx::query_as::<_, Product>(&format!(
            "INSERT INTO products (name, description, price, quantity)
             VALUES ($1, $2, $3, $4) RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.quantity)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        debug!(id = ?saved.id, "Persisted product");
        Ok(saved)
    }

    #[instrument(skip(self, data))]
    async fn update_existing(&self, id: i64, data: Product) -> RepositoryResult<Option<Product>> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query_as::<_, Product>(&format!(
            "UPDATE products SET
             name = $1,
             description = $2,
             price = $3,
             quantity = $4
             WHERE id = $5 RETURNING {PRODUCT_COLUMNS}"
        ))
        .bind(&data.name)
        .bind(&data.description)
        .bind(data.price)
        .bind(data.quantity)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(updated)
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(result.rows_affected() > 0)
    }
}
