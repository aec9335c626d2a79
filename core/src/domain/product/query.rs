//! Translation of raw list-request parameters into a [`ProductQuery`].
//!
//! Parsing is permissive: malformed numeric input degrades to "absent" (or to
//! the default for pagination) instead of failing the request. `page` is
//! clamped to at least 1 and `limit` to `1..=MAX_PAGE_SIZE`. The resulting
//! offset never exceeds `MAX_SKIP`, the largest value SQL engines accept.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::str::FromStr;

use crate::domain::product::entities::Product;

pub const DEFAULT_PAGE: u64 = 1;
pub const DEFAULT_PAGE_SIZE: u64 = 10;
pub const MAX_PAGE_SIZE: u64 = 100;
pub const MAX_SKIP: u64 = i64::MAX as u64;

/// Ordering requested for a product listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ProductSort {
    /// Storage-engine order, not guaranteed stable across calls.
    #[default]
    Natural,
    PriceAsc,
    PriceDesc,
}

impl FromStr for ProductSort {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "price_asc" => Ok(ProductSort::PriceAsc),
            "price_desc" => Ok(ProductSort::PriceDesc),
            _ => Err(()),
        }
    }
}

impl ProductSort {
    /// Total order used by adapters that sort in process. Equal prices fall
    /// back to ascending id.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            ProductSort::Natural => Ordering::Equal,
            ProductSort::PriceAsc => a.price.total_cmp(&b.price).then_with(|| a.id.cmp(&b.id)),
            ProductSort::PriceDesc => b.price.total_cmp(&a.price).then_with(|| a.id.cmp(&b.id)),
        }
    }
}

/// Normalized filter, sort and pagination window of a list request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub category_equals: Option<String>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
    pub sort: ProductSort,
    pub page: u64,
    pub page_size: u64,
}

impl Default for ProductQuery {
    fn default() -> Self {
        Self {
            category_equals: None,
            price_min: None,
            price_max: None,
            sort: ProductSort::Natural,
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ProductQuery {
    /// Parse from query string map
    /// Recognized keys:
    /// - category=value (exact match, empty means no filter)
    /// - minPrice=n, maxPrice=n (inclusive bounds)
    /// - sortBy=price_asc|price_desc
    /// - page=n, limit=n
    pub fn from_query_map(query_map: &HashMap<String, String>) -> Self {
        let category_equals = query_map
            .get("category")
            .filter(|category| !category.is_empty())
            .cloned();

        let price_min = query_map
            .get("minPrice")
            .and_then(|value| parse_price_bound(value));
        let price_max = query_map
            .get("maxPrice")
            .and_then(|value| parse_price_bound(value));

        let sort = query_map
            .get("sortBy")
            .and_then(|value| value.parse::<ProductSort>().ok())
            .unwrap_or_default();

        let page = query_map
            .get("page")
            .and_then(|value| value.trim().parse::<i64>().ok());
        let limit = query_map
            .get("limit")
            .and_then(|value| value.trim().parse::<i64>().ok());

        Self {
            category_equals,
            price_min,
            price_max,
            sort,
            page: page.map_or(DEFAULT_PAGE, |p| p.max(1) as u64),
            page_size: limit.map_or(DEFAULT_PAGE_SIZE, |l| {
                l.clamp(1, MAX_PAGE_SIZE as i64) as u64
            }),
        }
    }

    /// Number of matching records preceding the requested page, capped at
    /// [`MAX_SKIP`].
    pub fn skip(&self) -> u64 {
        self.page
            .saturating_sub(1)
            .saturating_mul(self.page_size)
            .min(MAX_SKIP)
    }

    /// Whether `product` satisfies the category and price filters.
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category_equals
            && &product.category != category
        {
            return false;
        }
        if let Some(min) = self.price_min
            && product.price < min
        {
            return false;
        }
        if let Some(max) = self.price_max
            && product.price > max
        {
            return false;
        }
        true
    }
}

fn parse_price_bound(value: &str) -> Option<f64> {
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|bound| bound.is_finite() && *bound >= 0.0)
}

/// Helper trait for building a [`ProductQuery`] straight from a parsed query string
pub trait ProductQueryExt {
    fn to_product_query(&self) -> ProductQuery;
}

impl ProductQueryExt for HashMap<String, String> {
    fn to_product_query(&self) -> ProductQuery {
        ProductQuery::from_query_map(self)
    }
}
