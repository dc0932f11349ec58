//! Catalog query pipeline

pub mod models;
pub mod pipeline;

pub use models::{CatalogQuery, SortKey};
pub use pipeline::{PAGE_SIZE, PageView, filter_and_sort, run, total_pages};
