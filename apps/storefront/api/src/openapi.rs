use utoipa::OpenApi;

/// Aggregated OpenAPI documentation for the storefront API.
///
/// Domain crates document their own routers; this nests them under the
/// public `/api` prefix so the rendered docs show the real paths.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Framery Storefront API",
        description = "Product catalog backend for the Framery storefront"
    ),
    nest(
        (path = "/api/products", api = domain_catalog::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
