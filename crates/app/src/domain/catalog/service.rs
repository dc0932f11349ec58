//! Catalog service.

use async_trait::async_trait;
use mockall::automock;
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::domain::catalog::{
    errors::CatalogError,
    models::{Product, ProductId},
};

/// Read operations against the remote product catalog.
///
/// Every call issues a fresh request; there is no caching, no retrying, and
/// no timeout beyond the transport's own defaults.
#[automock]
#[async_trait]
pub trait CatalogService: Send + Sync {
    /// Retrieves all products.
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError>;

    /// Retrieve a single product.
    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError>;

    /// Retrieves the distinct category names.
    async fn list_categories(&self) -> Result<Vec<String>, CatalogError>;

    /// Retrieves the products of a single category.
    async fn list_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError>;
}

/// Configuration for the remote catalog API.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog base URL, e.g. `"https://fakestoreapi.com"`.
    pub base_url: String,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: "https://fakestoreapi.com".to_string(),
        }
    }
}

/// HTTP client for the remote catalog API.
#[derive(Debug, Clone)]
pub struct HttpCatalogService {
    config: CatalogConfig,
    http: Client,
}

impl HttpCatalogService {
    /// Create a new client from the given configuration.
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, CatalogError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(CatalogError::Status(status));
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl CatalogService for HttpCatalogService {
    async fn list_products(&self) -> Result<Vec<Product>, CatalogError> {
        self.get_json(format!("{}/products", self.config.base_url))
            .await
    }

    async fn get_product(&self, id: ProductId) -> Result<Product, CatalogError> {
        self.get_json(format!("{}/products/{id}", self.config.base_url))
            .await
    }

    async fn list_categories(&self) -> Result<Vec<String>, CatalogError> {
        self.get_json(format!("{}/products/categories", self.config.base_url))
            .await
    }

    async fn list_products_in_category(
        &self,
        category: &str,
    ) -> Result<Vec<Product>, CatalogError> {
        self.get_json(format!(
            "{}/products/category/{category}",
            self.config.base_url
        ))
        .await
    }
}
