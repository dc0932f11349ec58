//! Catalog client errors.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors raised by catalog requests.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The transport failed before a usable response arrived, or the body
    /// did not decode as the expected shape.
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog responded with a non-success status.
    #[error("catalog responded with status {0}")]
    Status(StatusCode),
}
