use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use validator::Validate;

use crate::{
    entity,
    error::{CatalogError, CatalogResult},
    models::Product,
    repository::ProductRepository,
};

/// PostgreSQL-backed Product store
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_featured(&self) -> CatalogResult<Vec<Product>> {
        let models = entity::Entity::find()
            .filter(entity::Column::IsFeatured.eq(true))
            .order_by_desc(entity::Column::CreatedAt)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert_many(&self, batch: Vec<Product>) -> CatalogResult<()> {
        for product in &batch {
            product
                .validate()
                .map_err(|e| CatalogError::Validation(e.to_string()))?;
        }

        if batch.is_empty() {
            return Ok(());
        }

        let count = batch.len();
        let rows: Vec<entity::ActiveModel> = batch.into_iter().map(Into::into).collect();
        entity::Entity::insert_many(rows).exec(&self.db).await?;

        tracing::info!(count, "Loaded products into the product store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::ProductGenerator;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    #[tokio::test]
    async fn find_featured_maps_rows_to_domain_products() {
        let mut generator = ProductGenerator::from_seed(21);
        let mut product = generator.generate();
        product.is_featured = true;

        let row: entity::Model = entity::Model {
            id: product.id,
            name: product.name.clone(),
            description: product.description.clone(),
            color: product.color.clone(),
            size: product.size.clone(),
            price: product.price,
            sale_price: product.sale_price,
            stock_quantity: product.stock_quantity,
            image: product.image.clone(),
            is_featured: true,
            created_at: product.created_at.into(),
            updated_at: product.updated_at.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![row]])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let result = repo.find_featured().await.unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0], product);
    }

    #[tokio::test]
    async fn query_failures_surface_as_store_errors() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Conn(RuntimeErr::Internal(
                "connection refused".to_string(),
            ))])
            .into_connection();

        let repo = PgProductRepository::new(db);
        let result = repo.find_featured().await;

        assert!(matches!(result, Err(CatalogError::Store(_))));
    }

    #[tokio::test]
    async fn insert_many_validates_before_touching_the_store() {
        let mut generator = ProductGenerator::from_seed(22);
        let mut product = generator.generate();
        product.sale_price = Some(product.price + rust_decimal::Decimal::ONE);

        // No query results registered: reaching the database would panic
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgProductRepository::new(db);

        let result = repo.insert_many(vec![product]).await;
        assert!(matches!(result, Err(CatalogError::Validation(_))));
    }
}
