use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{ProductRepository, RepositoryResult, SortDirection};
use crate::models::product::Product;

#[derive(Debug, Default)]
struct Store {
    next_id: i64,
    products: BTreeMap<i64, Product>,
}

/// Process-local product storage, for running without Postgres and for tests.
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<Product>> {
        let store = self.store.read().await;
        Ok(store.products.get(&id).cloned())
    }

    async fn list_all(&self) -> RepositoryResult<Vec<Product>> {
        let store = self.store.read().await;
        Ok(store.products.values().cloned().collect())
    }

    async fn list_ordered_by_price(
        &self,
        direction: SortDirection,
    ) -> RepositoryResult<Vec<Product>> {
        let store = self.store.read().await;
        let mut products: Vec<Product> = store.products.values().cloned().collect();

        // stable sort keeps id order among equal prices
        products.sort_by(|a, b| {
            let ord = a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal);
            match direction {
                SortDirection::Ascending => ord,
                SortDirection::Descending => ord.reverse(),
            }
        });

        Ok(products)
    }

    async fn persist(&self, mut product: Product) -> RepositoryResult<Product> {
        let mut store = self.store.write().await;

        let id = match product.id {
            Some(id) => {
                store.next_id = store.next_id.max(id);
                id
            }
            None => {
                store.next_id += 1;
                store.next_id
            }
        };
        product.id = Some(id);
        store.products.insert(id, product.clone());

        tracing::debug!(id, "Persisted product");
        Ok(product)
    }

    async fn update_existing(&self, id: i64, data: Product) -> RepositoryResult<Option<Product>> {
        let mut store = self.store.write().await;
        Ok(store.products.get_mut(&id).map(|existing| {
            existing.overwrite_with(data);
            existing.clone()
        }))
    }

    async fn delete_by_id(&self, id: i64) -> RepositoryResult<bool> {
        let mut store = self.store.write().await;
        Ok(store.products.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: f64) -> Product {
        Product {
            id: None,
            name: name.to_string(),
            description: None,
            price,
            quantity: 1,
        }
    }

    #[tokio::test]
    async fn test_persist_assigns_sequential_ids() {
        let repo = InMemoryProductRepository::new();

        let first = repo.persist(product("a", 1.0)).await.unwrap();
        let second = repo.persist(product("b", 2.0)).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(repo.find_by_id(2).await.unwrap(), Some(second));
    }

    #[tokio::test]
    async fn test_persist_with_id_overwrites() {
        let repo = InMemoryProductRepository::new();
        let mut saved = repo.persist(product("a", 1.0)).await.unwrap();

        saved.name = "renamed".to_string();
        repo.persist(saved.clone()).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "renamed");
    }

    #[tokio::test]
    async fn test_delete_reports_removal() {
        let repo = InMemoryProductRepository::new();
        let saved = repo.persist(product("a", 1.0)).await.unwrap();
        let id = saved.id.unwrap();

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(!repo.delete_by_id(id).await.unwrap());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_update_existing_never_inserts() {
        let repo = InMemoryProductRepository::new();
        let id = repo.persist(product("a", 1.0)).await.unwrap().id.unwrap();

        let updated = repo.update_existing(id, product("b", 2.0)).await.unwrap();
        assert_eq!(updated.map(|p| (p.id, p.name)), Some((Some(id), "b".to_string())));

        assert!(repo.delete_by_id(id).await.unwrap());
        assert!(repo.update_existing(id, product("c", 3.0)).await.unwrap().is_none());
        assert!(repo.find_by_id(id).await.unwrap().is_none());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_price_ordering_breaks_ties_by_id() {
        let repo = InMemoryProductRepository::new();
        repo.persist(product("mid-1", 5.0)).await.unwrap();
        repo.persist(product("cheap", 1.0)).await.unwrap();
        repo.persist(product("mid-2", 5.0)).await.unwrap();
        repo.persist(product("pricey", 9.0)).await.unwrap();

        let names = |ps: Vec<Product>| ps.into_iter().map(|p| p.name).collect::<Vec<_>>();

        let asc = repo.list_ordered_by_price(SortDirection::Ascending).await.unwrap();
        assert_eq!(names(asc), ["cheap", "mid-1", "mid-2", "pricey"]);

        let desc = repo.list_ordered_by_price(SortDirection::Descending).await.unwrap();
        assert_eq!(names(desc), ["pricey", "mid-1", "mid-2", "cheap"]);
    }
}
