//! Catalog Domain
//!
//! Read-only product catalog: answers "what are the currently featured
//! products?" over a relational product store.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoint, response envelope
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Query orchestration (pure read)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Product store access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Product, response envelope
//! └─────────────┘
//! ```
//!
//! Products are seeded externally (see [`fixtures`] and the `migration`
//! crate); nothing in the query path mutates the store.
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     repository::InMemoryProductRepository,
//!     service::CatalogService,
//! };
//!
//! let repository = InMemoryProductRepository::new();
//! let service = CatalogService::new(repository);
//!
//! // Axum router exposing GET /featured
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod fixtures;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

mod entity;

// Re-export commonly used types
pub use error::{CatalogError, CatalogResult};
pub use fixtures::ProductGenerator;
pub use models::{FeaturedProducts, Product};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::CatalogService;

// The migration crate seeds through the entity directly
pub use entity::{
    ActiveModel as ProductActiveModel, Column as ProductColumn, Entity as ProductEntity,
};
