//! Handler tests for the catalog domain.
//!
//! These exercise the HTTP boundary in isolation: response envelope shape,
//! status codes, and the store-failure path. No database container needed -
//! the in-memory repository (and a deliberately failing one) stand in for
//! the product store.

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use domain_catalog::*;
use http_body_util::BodyExt;
use rust_decimal::Decimal;
use tower::ServiceExt; // For oneshot()

async fn get_featured(app: axum::Router) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri("/featured")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// A product store that always fails, for the unreachable-store path.
struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn find_featured(&self) -> CatalogResult<Vec<Product>> {
        Err(CatalogError::Store("connection refused".to_string()))
    }

    async fn insert_many(&self, _products: Vec<Product>) -> CatalogResult<()> {
        Err(CatalogError::Store("connection refused".to_string()))
    }
}

#[tokio::test]
async fn featured_endpoint_returns_the_featured_subset() {
    let repo = InMemoryProductRepository::new();
    let mut generator = ProductGenerator::from_seed(1);

    let mut products = generator.generate_many(6);
    for (i, product) in products.iter_mut().enumerate() {
        // Three featured, three not
        product.is_featured = i % 2 == 0;
    }
    repo.insert_many(products.clone()).await.unwrap();

    let app = handlers::router(CatalogService::new(repo));
    let (status, body) = get_featured(app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn empty_catalog_yields_success_with_an_empty_array() {
    let repo = InMemoryProductRepository::new();
    let app = handlers::router(CatalogService::new(repo));

    let (status, body) = get_featured(app).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    // data is an empty array, never null
    assert_eq!(body["data"], serde_json::json!([]));
}

#[tokio::test]
async fn store_failure_is_distinguishable_from_an_empty_result() {
    let app = handlers::router(CatalogService::new(FailingRepository));

    let (status, body) = get_featured(app).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "SERVICE_UNAVAILABLE");
    assert!(body.get("data").is_none());
}

#[tokio::test]
async fn featured_scenario_classic_frame() {
    let repo = InMemoryProductRepository::new();
    let mut generator = ProductGenerator::from_seed(2);

    let mut products = generator.generate_many(3);
    for product in products.iter_mut() {
        product.is_featured = false;
    }
    products[0].name = "Classic Frame".to_string();
    products[0].price = Decimal::new(12000, 2);
    products[0].sale_price = None;
    products[0].is_featured = true;

    repo.insert_many(products).await.unwrap();

    let app = handlers::router(CatalogService::new(repo));
    let (status, body) = get_featured(app).await;

    assert_eq!(status, StatusCode::OK);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Classic Frame");
    assert_eq!(data[0]["price"], "120.00");
    assert_eq!(data[0]["sale_price"], serde_json::Value::Null);
}

#[tokio::test]
async fn serialized_products_expose_every_catalog_field() {
    let repo = InMemoryProductRepository::new();
    let mut generator = ProductGenerator::from_seed(8);

    let mut product = generator.generate();
    product.is_featured = true;
    repo.insert_many(vec![product.clone()]).await.unwrap();

    let app = handlers::router(CatalogService::new(repo));
    let (_, body) = get_featured(app).await;

    let row = &body["data"][0];
    for field in [
        "id",
        "name",
        "description",
        "color",
        "size",
        "price",
        "sale_price",
        "stock_quantity",
        "image",
        "is_featured",
    ] {
        assert!(row.get(field).is_some(), "missing field {field}");
    }

    // Round-trip through the boundary preserves the product exactly
    let decoded: Product = serde_json::from_value(row.clone()).unwrap();
    assert_eq!(decoded, product);
}
