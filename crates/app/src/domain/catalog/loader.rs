//! Catalog loading with stale-result discard.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use crate::domain::catalog::{errors::CatalogError, models::Product, service::CatalogService};

/// Everything a storefront view needs to render the product grid.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedCatalog {
    pub products: Vec<Product>,
    pub categories: Vec<String>,
}

/// Loads the product list and category list in one round.
///
/// When the requesting view loses interest before a load resolves, it calls
/// [`Self::invalidate`]; a load that finishes under a stale generation is
/// discarded on arrival instead of handed to the caller. The underlying
/// requests are not aborted, only their effect is suppressed.
pub struct CatalogLoader {
    catalog: Arc<dyn CatalogService>,
    generation: AtomicU64,
}

impl CatalogLoader {
    /// Create a loader over the given catalog.
    #[must_use]
    pub fn new(catalog: Arc<dyn CatalogService>) -> Self {
        Self {
            catalog,
            generation: AtomicU64::new(0),
        }
    }

    /// Mark any in-flight load as stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::AcqRel);
    }

    /// Fetch products and categories concurrently.
    ///
    /// Returns `None` when the loader was invalidated while the fetches were
    /// in flight. A products error takes precedence over a categories error.
    pub async fn load(&self) -> Option<Result<LoadedCatalog, CatalogError>> {
        let started = self.generation.load(Ordering::Acquire);

        let (products, categories) = tokio::join!(
            self.catalog.list_products(),
            self.catalog.list_categories(),
        );

        if self.generation.load(Ordering::Acquire) != started {
            return None;
        }

        Some(products.and_then(|products| {
            categories.map(|categories| LoadedCatalog {
                products,
                categories,
            })
        }))
    }
}
