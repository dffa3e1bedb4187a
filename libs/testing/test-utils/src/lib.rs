//! Shared test utilities for domain testing
//!
//! - [`TestDatabase`]: PostgreSQL container with schema applied and automatic
//!   cleanup on drop
//! - [`TestDataBuilder`]: deterministic per-test seeds for the product
//!   fixture generator
//!
//! # Usage
//!
//! ```rust,no_run
//! use test_utils::{TestDataBuilder, TestDatabase};
//!
//! # async fn example() {
//! let db = TestDatabase::new().await;
//! let builder = TestDataBuilder::from_test_name("my_test");
//! let seed = builder.generator_seed();
//! # }
//! ```

mod postgres;

pub use postgres::TestDatabase;

/// Deterministic per-test seed source.
///
/// Hashing the test name keeps test data reproducible while distinct tests
/// draw distinct fixture sequences.
pub struct TestDataBuilder {
    seed: u64,
}

impl TestDataBuilder {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Create from the test name (seed = hash of the name).
    pub fn from_test_name(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Seed for `domain_catalog::ProductGenerator::from_seed`.
    pub fn generator_seed(&self) -> u64 {
        self.seed
    }

    /// A unique, reproducible name for auxiliary test resources.
    pub fn name(&self, prefix: &str, suffix: &str) -> String {
        format!("test-{}-{}-{}", prefix, self.seed, suffix)
    }
}
