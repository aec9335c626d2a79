use axum::{extract::FromRequestParts, http::request::Parts, response::Response};
use catalog_core::domain::product::query::ProductQuery;
use std::collections::HashMap;

/// Extractor for the product list query string (category, price range, sort, page, limit)
///
/// Never rejects: unparseable input falls back to an unfiltered first page.
///
/// Usage:
/// ```rust,ignore
/// async fn handler(
///     ProductQueryExtractor(query): ProductQueryExtractor,
/// ) -> Result<Response<Vec<Product>>, ApiError> {
///     // Use query.category_equals, query.sort, query.skip()
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProductQueryExtractor(pub ProductQuery);

impl<S> FromRequestParts<S> for ProductQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query_string = parts.uri.query().unwrap_or("");
        let query_map: HashMap<String, String> =
            serde_urlencoded::from_str(query_string).unwrap_or_default();

        Ok(ProductQueryExtractor(ProductQuery::from_query_map(&query_map)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use catalog_core::domain::product::query::ProductSort;

    async fn extract(uri: &str) -> ProductQuery {
        let (mut parts, _) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        let ProductQueryExtractor(query) =
            ProductQueryExtractor::from_request_parts(&mut parts, &())
                .await
                .unwrap();
        query
    }

    #[tokio::test]
    async fn test_decodes_query_string() {
        let query =
            extract("/api/products?category=home%20office&minPrice=5&sortBy=price_desc&page=3&limit=20")
                .await;

        assert_eq!(query.category_equals.as_deref(), Some("home office"));
        assert_eq!(query.price_min, Some(5.0));
        assert_eq!(query.sort, ProductSort::PriceDesc);
        assert_eq!(query.skip(), 40);
    }

    #[tokio::test]
    async fn test_missing_query_string_uses_defaults() {
        assert_eq!(extract("/api/products").await, ProductQuery::default());
    }
}
