//! Randomized product fixtures for seeding and tests.
//!
//! Generation is deterministic: the same seed always produces the same
//! sequence of products (timestamps excepted, which are taken at generation
//! time). Distributions follow the storefront's demo catalog:
//!
//! - name from a fixed set of four frame lines
//! - color from a fixed palette, paired with its hex code
//! - size from a fixed set of frame dimensions
//! - price uniform in [25, 200], two decimals
//! - 30% chance of a sale price at 60-90% of the price
//! - stock uniform in [0, 100]
//! - 20% chance of being featured

use chrono::Utc;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::Product;

const NAMES: [&str; 4] = [
    "Classic Frame",
    "Modern Edge",
    "Vintage Touch",
    "Coastal Breeze",
];

/// Display color names paired with the hex code used in the image URL.
const COLORS: [(&str, &str); 4] = [
    ("Black", "000000"),
    ("White", "ffffff"),
    ("Brown", "8B4513"),
    ("Gold", "FFD700"),
];

const SIZES: [&str; 4] = ["5x7", "8x10", "11x14", "16x20"];

/// Chance of a product carrying a sale price.
const SALE_PROBABILITY: f64 = 0.3;

/// Chance of a product being featured.
const FEATURED_PROBABILITY: f64 = 0.2;

/// Seeded product generator.
pub struct ProductGenerator {
    rng: ChaCha8Rng,
}

impl ProductGenerator {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a single product.
    pub fn generate(&mut self) -> Product {
        let name = NAMES[self.rng.random_range(0..NAMES.len())];
        let (color, hex) = COLORS[self.rng.random_range(0..COLORS.len())];
        let size = SIZES[self.rng.random_range(0..SIZES.len())];

        // Prices are drawn in cents so the decimal arithmetic stays exact
        let price = Decimal::new(self.rng.random_range(2500..=20000), 2);
        let sale_price = if self.rng.random_bool(SALE_PROBABILITY) {
            let factor = Decimal::new(self.rng.random_range(60..=90), 2);
            Some((price * factor).round_dp(2))
        } else {
            None
        };

        let now = Utc::now();
        Product {
            id: Uuid::from_u128(self.rng.random()),
            name: name.to_string(),
            description: format!(
                "{} photo frame in a {} finish, sized {} for prints and portraits.",
                name,
                color.to_lowercase(),
                size
            ),
            color: color.to_string(),
            size: size.to_string(),
            price,
            sale_price,
            stock_quantity: self.rng.random_range(0..=100),
            image: format!("https://via.placeholder.com/640x480.png/{hex}?text=products"),
            is_featured: self.rng.random_bool(FEATURED_PROBABILITY),
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate a batch of products.
    pub fn generate_many(&mut self, count: usize) -> Vec<Product> {
        (0..count).map(|_| self.generate()).collect()
    }
}
