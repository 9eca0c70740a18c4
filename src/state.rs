use std::sync::Arc;

use crate::repository::ProductRepository;
use crate::services::product::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
}

impl AppState {
    pub fn new(repository: Arc<dyn ProductRepository>) -> Self {
        Self {
            products: ProductService::new(repository),
        }
    }
}
