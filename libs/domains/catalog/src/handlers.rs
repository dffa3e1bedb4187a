use axum::{Json, Router, extract::State, routing::get};
use axum_helpers::errors::responses::{InternalServerErrorResponse, ServiceUnavailableResponse};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{FeaturedProducts, Product};
use crate::repository::ProductRepository;
use crate::service::CatalogService;

pub const TAG: &str = "products";

/// OpenAPI documentation for the catalog API
#[derive(OpenApi)]
#[openapi(
    paths(featured_products),
    components(
        schemas(Product, FeaturedProducts),
        responses(ServiceUnavailableResponse, InternalServerErrorResponse)
    ),
    tags(
        (name = TAG, description = "Product catalog endpoints")
    )
)]
pub struct ApiDoc;

/// Create the catalog router
pub fn router<R: ProductRepository + 'static>(service: CatalogService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/featured", get(featured_products))
        .with_state(shared_service)
}

/// List the currently featured products
#[utoipa::path(
    get,
    path = "/featured",
    tag = TAG,
    responses(
        (status = 200, description = "Currently featured products", body = FeaturedProducts),
        (status = 503, response = ServiceUnavailableResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn featured_products<R: ProductRepository>(
    State(service): State<Arc<CatalogService<R>>>,
) -> CatalogResult<Json<FeaturedProducts>> {
    let products = service.featured_products().await?;
    Ok(Json(FeaturedProducts::new(products)))
}
