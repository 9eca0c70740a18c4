//! Storage seam for products.
//!
//! Lookups signal a missing row with `None` / `false`; only genuine storage
//! failures come back as `Err`. Turning absence into a failure is the
//! service layer's job.

mod memory;
mod postgres;

pub use memory::InMemoryProductRepository;
pub use postgres::PgProductRepository;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::product::Product;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    /// Only a case-insensitive `"asc"` sorts ascending; anything else,
    /// including no value at all, sorts descending.
    pub fn from_param(param: Option<&str>) -> Self {
        match param {
            Some(p) if p.eq_ignore_ascii_case("asc") => SortDirection::Ascending,
            _ => SortDirection::Descending,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortDirection::Ascending => "ASC",
            SortDirection::Descending => "DESC",
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>>;

    async fn list_all(&self) -> RepositoryResult<Vec<Product>>;

    /// All products ordered by price, ties broken by ascending id.
    async fn list_ordered_by_price(&self, direction: SortDirection)
        -> RepositoryResult<Vec<Product>>;

    /// Inserts when `id` is `None`, otherwise overwrites the stored row.
    /// Returns the record with its id populated.
    async fn persist(&self, product: Product) -> RepositoryResult<Product>;

    /// Overwrites every field but `id` of the stored row in one write.
    /// `None` when no row has that id; nothing is inserted in that case.
    async fn update_existing(&self, id: i64, data: Product)
        -> RepositoryResult<Option<Product>>;

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool>;
}

#[cfg(test)]
mod tests {
    use super::SortDirection;

    #[test]
    fn sort_direction_normalization() {
        assert_eq!(SortDirection::from_param(Some("asc")), SortDirection::Ascending);
        assert_eq!(SortDirection::from_param(Some("AsC")), SortDirection::Ascending);
        assert_eq!(SortDirection::from_param(Some("desc")), SortDirection::Descending);
        assert_eq!(SortDirection::from_param(Some("")), SortDirection::Descending);
        assert_eq!(SortDirection::from_param(Some("ascending")), SortDirection::Descending);
        assert_eq!(SortDirection::from_param(Some(" asc")), SortDirection::Descending);
        assert_eq!(SortDirection::from_param(None), SortDirection::Descending);
    }
}
