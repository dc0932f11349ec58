//! App Context

use std::{path::Path, sync::Arc};

use crate::{
    domain::{
        cart::store::CartStore,
        catalog::{
            loader::CatalogLoader,
            service::{CatalogConfig, CatalogService, HttpCatalogService},
        },
        wishlist::store::WishlistStore,
    },
    notify::Notifier,
    storage::Storage,
    theme::{Theme, ThemeStore},
};

/// The storefront's shared state, built once at startup.
///
/// Every consumer receives these stores by handle: there is exactly one
/// cart, one wishlist and one theme preference per process, all backed by
/// the same data directory.
pub struct AppContext {
    pub catalog: Arc<dyn CatalogService>,
    pub loader: CatalogLoader,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub theme: ThemeStore,
}

impl AppContext {
    /// Build the context from a data directory and catalog configuration.
    #[must_use]
    pub fn new(data_dir: &Path, config: CatalogConfig, notifier: Arc<dyn Notifier>) -> Self {
        let storage = Storage::new(data_dir);
        let catalog: Arc<dyn CatalogService> = Arc::new(HttpCatalogService::new(config));

        Self {
            loader: CatalogLoader::new(Arc::clone(&catalog)),
            cart: CartStore::load(storage.clone(), Arc::clone(&notifier)),
            wishlist: WishlistStore::load(storage.clone(), notifier),
            theme: ThemeStore::load(storage, Theme::Light),
            catalog,
        }
    }
}
