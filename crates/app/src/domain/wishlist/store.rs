//! Wishlist store.

use std::sync::Arc;

use crate::{
    domain::catalog::models::{Product, ProductId},
    notify::Notifier,
    storage::Storage,
};

const WISHLIST_KEY: &str = "wishlist";

/// Owns the set of saved products.
///
/// Unique by product id, insertion order preserved for display. Same
/// persistence discipline as the cart: restored at construction, written
/// through on every change.
pub struct WishlistStore {
    items: Vec<Product>,
    storage: Storage,
    notifier: Arc<dyn Notifier>,
}

impl WishlistStore {
    /// Restore the wishlist from storage, defaulting to empty.
    #[must_use]
    pub fn load(storage: Storage, notifier: Arc<dyn Notifier>) -> Self {
        let items = storage.get(WISHLIST_KEY, Vec::new());

        Self {
            items,
            storage,
            notifier,
        }
    }

    /// Saved products, in the order they were added.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Number of saved products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if nothing is saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Check whether the product with `id` is saved.
    #[must_use]
    pub fn contains(&self, id: ProductId) -> bool {
        self.items.iter().any(|item| item.id == id)
    }

    /// Save `product`. Already-saved products are left as-is.
    ///
    /// Notifies unconditionally, including on redundant adds.
    pub fn add(&mut self, product: &Product) {
        if !self.contains(product.id) {
            self.items.push(product.clone());
            self.persist();
        }

        self.notifier.success("Added to wishlist");
    }

    /// Remove the product with `id`, if saved.
    ///
    /// Notifies unconditionally, including on absent ids.
    pub fn remove(&mut self, id: ProductId) {
        self.items.retain(|item| item.id != id);
        self.persist();
        self.notifier.success("Removed from wishlist");
    }

    /// Add `product` if absent, remove it if present.
    pub fn toggle(&mut self, product: &Product) {
        if self.contains(product.id) {
            self.remove(product.id);
        } else {
            self.add(product);
        }
    }

    fn persist(&self) {
        self.storage.set(WISHLIST_KEY, &self.items);
    }
}
