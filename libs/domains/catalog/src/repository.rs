use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};
use crate::models::Product;

/// Repository trait for the Product store.
///
/// The query path only ever reads; `insert_many` exists for the seeding path
/// and tests and is not reachable from any HTTP route.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// All products currently flagged as featured, newest first.
    async fn find_featured(&self) -> CatalogResult<Vec<Product>>;

    /// Bulk-load products into the store.
    ///
    /// Every product is validated first; a single invalid product rejects
    /// the whole batch.
    async fn insert_many(&self, products: Vec<Product>) -> CatalogResult<()>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_featured(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.read().await;

        let mut result: Vec<Product> = products
            .values()
            .filter(|p| p.is_featured)
            .cloned()
            .collect();

        // Newest first, matching the Postgres implementation
        result.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(result)
    }

    async fn insert_many(&self, batch: Vec<Product>) -> CatalogResult<()> {
        for product in &batch {
            product
                .validate()
                .map_err(|e| CatalogError::Validation(e.to_string()))?;
        }

        let mut products = self.products.write().await;
        let count = batch.len();
        for product in batch {
            products.insert(product.id, product);
        }

        tracing::info!(count, "Loaded products into in-memory store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ProductGenerator;

    #[tokio::test]
    async fn find_featured_returns_exactly_the_featured_subset() {
        let repo = InMemoryProductRepository::new();
        let mut generator = ProductGenerator::from_seed(7);

        let mut products = generator.generate_many(12);
        // Make sure both classes are present regardless of the draw
        products[0].is_featured = true;
        products[1].is_featured = false;

        let mut expected: Vec<Uuid> = products
            .iter()
            .filter(|p| p.is_featured)
            .map(|p| p.id)
            .collect();
        assert!(!expected.is_empty());
        assert_ne!(expected.len(), products.len());

        repo.insert_many(products).await.unwrap();

        let result = repo.find_featured().await.unwrap();
        assert!(result.iter().all(|p| p.is_featured));

        let mut result_ids: Vec<Uuid> = result.iter().map(|p| p.id).collect();
        result_ids.sort();
        expected.sort();
        assert_eq!(result_ids, expected);
    }

    #[tokio::test]
    async fn empty_store_yields_an_empty_list_not_an_error() {
        let repo = InMemoryProductRepository::new();
        let result = repo.find_featured().await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn insert_many_rejects_invalid_pricing() {
        let repo = InMemoryProductRepository::new();
        let mut generator = ProductGenerator::from_seed(11);

        let mut product = generator.generate();
        product.sale_price = Some(product.price);

        let result = repo.insert_many(vec![product]).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));

        // The invalid batch left no rows behind
        assert!(repo.find_featured().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn featured_results_come_newest_first() {
        let repo = InMemoryProductRepository::new();
        let mut generator = ProductGenerator::from_seed(3);

        let mut older = generator.generate();
        older.is_featured = true;
        let mut newer = generator.generate();
        newer.is_featured = true;
        newer.created_at = older.created_at + chrono::Duration::seconds(60);

        let (older_id, newer_id) = (older.id, newer.id);
        repo.insert_many(vec![older, newer]).await.unwrap();

        let result = repo.find_featured().await.unwrap();
        let ids: Vec<Uuid> = result.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![newer_id, older_id]);
    }
}
