//! Application state management.
//!
//! Shared state passed to request handlers: configuration and the product
//! store connection pool.

/// Shared application state.
///
/// Cloned per handler; the database connection is an inexpensive Arc clone
/// over the underlying pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// PostgreSQL connection pool backing the product store
    pub db: database::postgres::DatabaseConnection,
}
