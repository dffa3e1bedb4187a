//! Integration tests for the catalog domain against a real PostgreSQL
//! container. Requires Docker.

use domain_catalog::*;
use rust_decimal::Decimal;
use test_utils::{TestDataBuilder, TestDatabase};
use uuid::Uuid;

#[tokio::test]
async fn postgres_repository_returns_exactly_the_featured_subset() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let builder = TestDataBuilder::from_test_name("pg_featured_subset");
    let mut generator = ProductGenerator::from_seed(builder.generator_seed());
    let mut products = generator.generate_many(8);
    products[0].is_featured = true;
    products[1].is_featured = false;

    let mut expected: Vec<Uuid> = products
        .iter()
        .filter(|p| p.is_featured)
        .map(|p| p.id)
        .collect();

    repo.insert_many(products).await.unwrap();

    let result = repo.find_featured().await.unwrap();
    assert!(result.iter().all(|p| p.is_featured));

    let mut result_ids: Vec<Uuid> = result.iter().map(|p| p.id).collect();
    result_ids.sort();
    expected.sort();
    assert_eq!(result_ids, expected);
}

#[tokio::test]
async fn postgres_round_trip_preserves_decimal_precision() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let builder = TestDataBuilder::from_test_name("pg_decimal_round_trip");
    let mut generator = ProductGenerator::from_seed(builder.generator_seed());
    let mut product = generator.generate();
    product.is_featured = true;
    product.price = Decimal::new(12000, 2); // 120.00
    product.sale_price = Some(Decimal::new(8450, 2)); // 84.50

    repo.insert_many(vec![product.clone()]).await.unwrap();

    let result = repo.find_featured().await.unwrap();
    let stored = result.iter().find(|p| p.id == product.id).unwrap();

    assert_eq!(stored.price, product.price);
    assert_eq!(stored.sale_price, product.sale_price);
    assert_eq!(stored.name, product.name);
    assert_eq!(stored.stock_quantity, product.stock_quantity);
}

#[tokio::test]
async fn postgres_empty_catalog_is_an_empty_list() {
    let db = TestDatabase::new().await;
    let repo = PgProductRepository::new(db.connection());

    let result = repo.find_featured().await.unwrap();
    assert!(result.is_empty());
}

#[tokio::test]
async fn seeded_database_contains_valid_demo_products() {
    let db = TestDatabase::new_seeded().await;
    let repo = PgProductRepository::new(db.connection());

    let featured = repo.find_featured().await.unwrap();
    // The demo seed uses a fixed RNG seed, so some products are featured
    assert!(!featured.is_empty());
    assert!(featured.iter().all(|p| p.is_featured));
    assert!(featured
        .iter()
        .all(|p| p.sale_price.map_or(true, |sale| sale < p.price)));
}
