//! Catalog Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Catalog product identifier.
pub type ProductId = u64;

/// Product Model
///
/// Fetched from the remote catalog; never mutated locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub description: String,
    pub price: Decimal,
    pub category: String,
    pub image: String,
    pub rating: Rating,
}

/// Review score attached to a product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average score, 0–5.
    pub rate: f64,
    /// Number of reviews behind the average.
    pub count: u64,
}
