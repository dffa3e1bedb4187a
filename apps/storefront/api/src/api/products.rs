use axum::Router;
use domain_catalog::{CatalogService, PgProductRepository, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgProductRepository::new(state.db.clone());
    let service = CatalogService::new(repository);
    handlers::router(service)
}
