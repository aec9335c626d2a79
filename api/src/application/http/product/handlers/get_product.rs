use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::product::entities::{Product, ProductId};
use catalog_core::domain::product::ports::ProductService;

#[utoipa::path(
    get,
    path = "/{product_id}",
    tag = "product",
    summary = "Get product",
    description = "Retrieves one product by its id.",
    params(
        ("product_id" = String, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = Product),
        (status = 400, body = ApiErrorResponse, description = "Malformed product id"),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn get_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<Product>, ApiError> {
    let product_id = ProductId::parse(&product_id)?;

    let product = state
        .service
        .get_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
