use domain_catalog::{ProductActiveModel, ProductColumn, ProductEntity, ProductGenerator};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};
use sea_orm_migration::prelude::*;
use uuid::Uuid;

/// Fixed RNG seed so every environment gets the same demo catalog.
const DEMO_SEED: u64 = 20250722;

/// Number of demo products to generate.
const DEMO_PRODUCT_COUNT: usize = 24;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        let products = ProductGenerator::from_seed(DEMO_SEED).generate_many(DEMO_PRODUCT_COUNT);
        let rows: Vec<ProductActiveModel> = products.into_iter().map(Into::into).collect();

        ProductEntity::insert_many(rows).exec(db).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // The generator is deterministic, so the seeded ids can be recomputed
        let ids: Vec<Uuid> = ProductGenerator::from_seed(DEMO_SEED)
            .generate_many(DEMO_PRODUCT_COUNT)
            .into_iter()
            .map(|p| p.id)
            .collect();

        ProductEntity::delete_many()
            .filter(ProductColumn::Id.is_in(ids))
            .exec(db)
            .await?;

        Ok(())
    }
}
