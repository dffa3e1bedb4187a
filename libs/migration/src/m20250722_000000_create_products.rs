use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(pk_uuid(Products::Id))
                    .col(string(Products::Name))
                    .col(text(Products::Description).default(""))
                    .col(string(Products::Color))
                    .col(string(Products::Size))
                    .col(decimal_len(Products::Price, 10, 2))
                    .col(decimal_len_null(Products::SalePrice, 10, 2))
                    .col(integer(Products::StockQuantity).default(0))
                    .col(string(Products::Image))
                    .col(boolean(Products::IsFeatured).default(false))
                    .col(
                        timestamp_with_time_zone(Products::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Products::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Pricing and stock invariants live in the database too
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                ALTER TABLE products
                    ADD CONSTRAINT products_price_positive
                        CHECK (price > 0),
                    ADD CONSTRAINT products_sale_price_below_price
                        CHECK (sale_price IS NULL OR (sale_price > 0 AND sale_price < price)),
                    ADD CONSTRAINT products_stock_quantity_non_negative
                        CHECK (stock_quantity >= 0)
                "#,
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_is_featured")
                    .table(Products::Table)
                    .col(Products::IsFeatured)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_created_at")
                    .table(Products::Table)
                    .col(Products::CreatedAt)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Color,
    Size,
    Price,
    SalePrice,
    StockQuantity,
    Image,
    IsFeatured,
    CreatedAt,
    UpdatedAt,
}
