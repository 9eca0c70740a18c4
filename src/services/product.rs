use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info, instrument};

use crate::models::product::Product;
use crate::repository::{ProductRepository, RepositoryError, SortDirection};

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product with ID {0} not found.")]
    NotFound(i64),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ProductResult<T> = Result<T, ProductError>;

/// Business rules for products. Owns no state besides the injected storage.
#[derive(Clone)]
pub struct ProductService {
    repository: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self { repository }
    }

    #[instrument(skip(self))]
    pub async fn get_all(&self) -> ProductResult<Vec<Product>> {
        let products = self.repository.list_all().await?;
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    #[instrument(skip(self))]
    pub async fn get_by_id(&self, id: i64) -> ProductResult<Product> {
        let product = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        debug!(id, "Fetched product");
        Ok(product)
    }

    /// Stores the product as given. No field validation is applied.
    #[instrument(skip(self, product))]
    pub async fn create(&self, product: Product) -> ProductResult<Product> {
        let created = self.repository.persist(product).await?;
        info!(id = ?created.id, "Created product");
        Ok(created)
    }

    /// Overwrites name, description, price and quantity; the stored id is kept.
    #[instrument(skip(self, data))]
    pub async fn update(&self, id: i64, data: Product) -> ProductResult<Product> {
        let updated = self
            .repository
            .update_existing(id, data)
            .await?
            .ok_or(ProductError::NotFound(id))?;
        info!(id, "Updated product");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i64) -> ProductResult<()> {
        if !self.repository.delete_by_id(id).await? {
            return Err(ProductError::NotFound(id));
        }

        info!(id, "Deleted product");
        Ok(())
    }

    /// `count` is taken as-is: zero or negative is always satisfied.
    #[instrument(skip(self))]
    pub async fn is_stock_available(&self, id: i64, count: i32) -> ProductResult<bool> {
        let product = self.get_by_id(id).await?;
        let available = product.has_stock_for(count);
        debug!(id, count, quantity = product.quantity, available, "Checked stock");
        Ok(available)
    }

    #[instrument(skip(self))]
    pub async fn get_all_sorted_by_price(
        &self,
        sort_order: Option<&str>,
    ) -> ProductResult<Vec<Product>> {
        let direction = SortDirection::from_param(sort_order);
        let products = self.repository.list_ordered_by_price(direction).await?;
        debug!(?direction, count = products.len(), "Listed products by price");
        Ok(products)
    }
}
