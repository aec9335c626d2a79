use crate::application::http::query_extractor::ProductQueryExtractor;
use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::product::entities::Product;
use catalog_core::domain::product::ports::ProductService;
use serde::Deserialize;
use utoipa::IntoParams;

/// OpenAPI description of the list parameters. Never constructed: requests are
/// parsed by [`ProductQueryExtractor`], which degrades malformed values
/// instead of rejecting them as a typed `Query<GetProductsQuery>` would.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
#[allow(dead_code)]
#[serde(rename_all = "camelCase")]
pub struct GetProductsQuery {
    /// Exact category match
    pub category: Option<String>,
    /// Inclusive lower price bound
    pub min_price: Option<f64>,
    /// Inclusive upper price bound
    pub max_price: Option<f64>,
    /// `price_asc` or `price_desc`
    pub sort_by: Option<String>,
    /// Page number, starting at 1
    pub page: Option<i64>,
    /// Page size, 1 to 100
    pub limit: Option<i64>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "product",
    summary = "List products",
    description = "Lists products filtered by category and price range, optionally sorted by price, one page at a time.",
    params(GetProductsQuery),
    responses(
        (status = 200, body = Vec<Product>),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn get_products(
    State(state): State<AppState>,
    ProductQueryExtractor(query): ProductQueryExtractor,
) -> Result<Response<Vec<Product>>, ApiError> {
    let products = state
        .service
        .get_products(query)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(products))
}
