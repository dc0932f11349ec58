//! Query Models

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Sort order for the product grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Original catalog order.
    #[default]
    Default,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Best-rated first.
    Rating,
    /// Alphabetical by title.
    Name,
}

/// Raised when parsing an unknown sort key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key: {0}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "price-asc" => Ok(Self::PriceAsc),
            "price-desc" => Ok(Self::PriceDesc),
            "rating" => Ok(Self::Rating),
            "name" => Ok(Self::Name),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Default => "default",
            Self::PriceAsc => "price-asc",
            Self::PriceDesc => "price-desc",
            Self::Rating => "rating",
            Self::Name => "name",
        })
    }
}

/// User-selected filters for the product grid.
///
/// `search` is expected to have settled upstream (trimmed and debounced);
/// the pipeline never sees a half-typed query.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    /// Search text matched against title, description and category.
    pub search: String,
    /// Restrict to one category; `None` shows everything.
    pub category: Option<String>,
    /// Sort order.
    pub sort: SortKey,
    /// 1-based page number.
    pub page: usize,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: None,
            sort: SortKey::default(),
            page: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn sort_keys_round_trip_through_their_wire_names() -> TestResult {
        for key in [
            SortKey::Default,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::Rating,
            SortKey::Name,
        ] {
            assert_eq!(key.to_string().parse::<SortKey>()?, key);
        }

        Ok(())
    }

    #[test]
    fn unknown_sort_key_fails_to_parse() {
        assert!("cheapest".parse::<SortKey>().is_err());
    }

    #[test]
    fn default_query_starts_on_page_one() {
        let query = CatalogQuery::default();

        assert_eq!(query.page, 1);
        assert!(query.search.is_empty());
        assert!(query.category.is_none());
    }
}
