//! Storefront commands.

use primecart_app::domain::{catalog::CatalogError, checkout::CheckoutError};
use thiserror::Error;

pub(crate) mod browse;
pub(crate) mod cart;
pub(crate) mod categories;
pub(crate) mod checkout;
pub(crate) mod product;
pub(crate) mod theme;
pub(crate) mod wishlist;

/// Errors surfaced by storefront commands.
#[derive(Debug, Error)]
pub(crate) enum CommandError {
    /// A catalog fetch failed. Never fatal to other commands.
    #[error("{0} — check your connection and retry")]
    Catalog(#[from] CatalogError),

    /// Checkout was rejected.
    #[error(transparent)]
    Checkout(#[from] CheckoutError),
}
