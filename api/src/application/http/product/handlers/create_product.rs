use crate::application::http::product::validators::CreateProductValidator;
use crate::application::http::server::api_entities::api_error::{
    ApiError, ApiErrorResponse, ValidateJson,
};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::product::entities::Product;
use catalog_core::domain::product::ports::ProductService;

#[utoipa::path(
    post,
    path = "",
    tag = "product",
    summary = "Create product",
    description = "Creates a product. The id and creation time are assigned by the server.",
    responses(
        (status = 201, body = Product),
        (status = 400, body = ApiErrorResponse, description = "Validation failed")
    ),
    request_body = CreateProductValidator
)]
pub async fn create_product(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<CreateProductValidator>,
) -> Result<Response<Product>, ApiError> {
    let product = state
        .service
        .create_product(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(product))
}
