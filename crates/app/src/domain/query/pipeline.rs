//! Filter, sort and paginate the product catalog.
//!
//! The whole pipeline re-runs from the first stage whenever an input
//! changes; at catalog scale (tens to low hundreds of products) that is
//! cheaper than keeping incremental state.

use crate::domain::{
    catalog::models::Product,
    query::models::{CatalogQuery, SortKey},
};

/// Products shown per page.
pub const PAGE_SIZE: usize = 8;

/// One page of query results, borrowing from the full product list.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a> {
    /// The visible slice of the filtered, sorted products.
    pub items: Vec<&'a Product>,
    /// Effective page, clamped to the last valid page.
    pub page: usize,
    /// Number of pages in the filtered set.
    pub total_pages: usize,
    /// Number of products in the filtered set.
    pub total_items: usize,
}

/// Apply the category filter, search filter and sort stages.
///
/// An empty result is a first-class output, not an error.
#[must_use]
pub fn filter_and_sort<'a>(products: &'a [Product], query: &CatalogQuery) -> Vec<&'a Product> {
    let needle = query.search.to_lowercase();

    let mut result: Vec<&Product> = products
        .iter()
        .filter(|product| {
            query
                .category
                .as_ref()
                .is_none_or(|category| product.category == *category)
        })
        .filter(|product| needle.is_empty() || matches_search(product, &needle))
        .collect();

    match query.sort {
        SortKey::Default => {}
        SortKey::PriceAsc => result.sort_by(|a, b| a.price.cmp(&b.price)),
        SortKey::PriceDesc => result.sort_by(|a, b| b.price.cmp(&a.price)),
        SortKey::Rating => result.sort_by(|a, b| b.rating.rate.total_cmp(&a.rating.rate)),
        SortKey::Name => result.sort_by(|a, b| a.title.cmp(&b.title)),
    }

    result
}

/// Substring match against the lowercased title, description or category.
fn matches_search(product: &Product, needle: &str) -> bool {
    product.title.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

/// Number of pages needed for `item_count` filtered products.
#[must_use]
pub fn total_pages(item_count: usize) -> usize {
    item_count.div_ceil(PAGE_SIZE)
}

/// Run the full pipeline and slice out the requested page.
///
/// The requested page is clamped to the last valid page when the filtered
/// set is smaller than the caller's cursor remembers; an empty set yields
/// page 1 with zero total pages.
#[must_use]
pub fn run<'a>(products: &'a [Product], query: &CatalogQuery) -> PageView<'a> {
    let filtered = filter_and_sort(products, query);
    let total_items = filtered.len();
    let total_pages = total_pages(total_items);
    let page = query.page.clamp(1, total_pages.max(1));

    let items = filtered
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .collect();

    PageView {
        items,
        page,
        total_pages,
        total_items,
    }
}
