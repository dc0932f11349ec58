//! Cart Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::catalog::models::Product;

/// One cart line: a product and how many units of it.
///
/// A cart holds at most one line per product id, and quantities below 1 are
/// never stored — a line whose quantity would drop to zero is removed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product: Product,
    pub quantity: u32,
}

impl CartLine {
    /// Unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.product.price * Decimal::from(self.quantity)
    }
}
