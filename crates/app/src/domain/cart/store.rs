//! Cart store.

use std::sync::Arc;

use rust_decimal::Decimal;

use crate::{
    domain::{
        cart::models::CartLine,
        catalog::models::{Product, ProductId},
    },
    notify::Notifier,
    storage::Storage,
};

const CART_KEY: &str = "cart";

/// Sales tax rate applied to the subtotal (8%).
fn tax_rate() -> Decimal {
    Decimal::new(8, 2)
}

/// Owns the cart lines and their derived totals.
///
/// Restored from persistent storage at construction; every mutation writes
/// back through the same key. Mutations never fail: out-of-range input is
/// normalised instead of rejected, and the totals are recomputed from the
/// lines on every read so they cannot drift.
pub struct CartStore {
    lines: Vec<CartLine>,
    storage: Storage,
    notifier: Arc<dyn Notifier>,
}

impl CartStore {
    /// Restore the cart from storage, defaulting to empty.
    #[must_use]
    pub fn load(storage: Storage, notifier: Arc<dyn Notifier>) -> Self {
        let lines = storage.get(CART_KEY, Vec::new());

        Self {
            lines,
            storage,
            notifier,
        }
    }

    /// Current lines, in the order their products were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add `quantity` units of `product`, merging into an existing line.
    ///
    /// Quantities below 1 are treated as 1.
    pub fn add_item(&mut self, product: &Product, quantity: u32) {
        let quantity = quantity.max(1);

        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.product.id == product.id)
        {
            line.quantity += quantity;
        } else {
            self.lines.push(CartLine {
                product: product.clone(),
                quantity,
            });
        }

        self.persist();

        let title: String = product.title.chars().take(30).collect();
        self.notifier.success(&format!("{title} added to cart"));
    }

    /// Remove the line for `id`. Absent ids are a no-op.
    pub fn remove_item(&mut self, id: ProductId) {
        self.lines.retain(|line| line.product.id != id);
        self.persist();
        self.notifier.success("Item removed from cart");
    }

    /// Set the quantity for `id`; zero or less removes the line.
    ///
    /// Silent: quantity changes are a frequent interactive action.
    pub fn update_quantity(&mut self, id: ProductId, quantity: i32) {
        match u32::try_from(quantity) {
            Ok(quantity) if quantity > 0 => {
                if let Some(line) = self.lines.iter_mut().find(|line| line.product.id == id) {
                    line.quantity = quantity;
                }
            }
            _ => self.lines.retain(|line| line.product.id != id),
        }

        self.persist();
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.persist();
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sum of price × quantity over all lines.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Sales tax on the current subtotal, rounded to cents.
    #[must_use]
    pub fn tax(&self) -> Decimal {
        (self.subtotal() * tax_rate()).round_dp(2)
    }

    /// Subtotal plus tax.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.tax()
    }

    fn persist(&self) {
        self.storage.set(CART_KEY, &self.lines);
    }
}
