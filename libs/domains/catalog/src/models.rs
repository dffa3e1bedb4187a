use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

/// Catalog product.
///
/// Prices are `Decimal` with two-decimal currency precision and serialize as
/// exact strings (`"120.00"`), so no precision is lost across the API
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_pricing"))]
pub struct Product {
    /// Unique identifier, immutable once created
    pub id: Uuid,
    /// Short display string
    pub name: String,
    /// Free-text description
    pub description: String,
    /// Display color name
    pub color: String,
    /// Frame dimensions, e.g. "8x10"
    pub size: String,
    /// Unit price, two-decimal currency precision
    pub price: Decimal,
    /// Discounted price; always strictly below `price` when present
    pub sale_price: Option<Decimal>,
    /// Units in stock
    #[validate(range(min = 0))]
    pub stock_quantity: i32,
    /// URL of the product image asset
    pub image: String,
    /// Whether the product is part of the highlighted catalog selection
    pub is_featured: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

/// Pricing invariants: positive price, sale price strictly below price.
fn validate_pricing(product: &Product) -> Result<(), ValidationError> {
    if product.price <= Decimal::ZERO {
        return Err(ValidationError::new("price_not_positive"));
    }
    if let Some(sale_price) = product.sale_price {
        if sale_price <= Decimal::ZERO {
            return Err(ValidationError::new("sale_price_not_positive"));
        }
        if sale_price >= product.price {
            return Err(ValidationError::new("sale_price_not_below_price"));
        }
    }
    Ok(())
}

/// Response envelope for the featured-products query.
///
/// The shape is fixed: `success` is always present and `data` is always an
/// array (empty when nothing is featured, never null).
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FeaturedProducts {
    pub success: bool,
    pub data: Vec<Product>,
}

impl FeaturedProducts {
    pub fn new(data: Vec<Product>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
