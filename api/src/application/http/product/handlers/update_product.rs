use crate::application::http::product::validators::UpdateProductValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::{Path, State};
use catalog_core::domain::product::entities::{Product, ProductId};
use catalog_core::domain::product::ports::ProductService;

#[utoipa::path(
    put,
    path = "/{product_id}",
    tag = "product",
    summary = "Update product",
    description = "Applies a partial update. Fields missing from the body keep their stored value.",
    params(
        ("product_id" = String, Path, description = "Product ID"),
    ),
    responses(
        (status = 200, body = Product),
        (status = 400, body = ApiErrorResponse, description = "Malformed id or validation failed"),
        (status = 404, body = ApiErrorResponse)
    ),
    request_body = UpdateProductValidator
)]
pub async fn update_product(
    Path(product_id): Path<String>,
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<UpdateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    let product_id = ProductId::parse(&product_id)?;

    let product = state
        .service
        .update_product(product_id, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(product))
}
