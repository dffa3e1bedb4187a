use std::sync::Arc;

use crate::error::CatalogResult;
use crate::models::Product;
use crate::repository::ProductRepository;

/// Service layer for catalog queries
#[derive(Clone)]
pub struct CatalogService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> CatalogService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// The currently featured products, straight from the store.
    ///
    /// Pure read with no parameters. A store failure propagates unchanged;
    /// an empty result is a successful empty list, not an error.
    pub async fn featured_products(&self) -> CatalogResult<Vec<Product>> {
        self.repository.find_featured().await
    }
}
