use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::product::entities::ProductId;
use catalog_core::domain::product::ports::ProductService;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct DeleteProductResponse {
    pub message: String,
}

#[utoipa::path(
    delete,
    path = "/{product_id}",
    tag = "product",
    summary = "Delete product",
    description = "Permanently removes a product.",
    params(
        ("product_id" = String, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = DeleteProductResponse),
        (status = 400, body = ApiErrorResponse, description = "Malformed product id"),
        (status = 404, body = ApiErrorResponse)
    ),
)]
pub async fn delete_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Response<DeleteProductResponse>, ApiError> {
    let product_id = ProductId::parse(&product_id)?;

    state
        .service
        .delete_product(product_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(DeleteProductResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
