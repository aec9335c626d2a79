use crate::application::http::server::api_entities::api_error::{ApiError, ApiErrorResponse};
use crate::application::http::server::api_entities::response::Response;
use crate::application::http::server::app_state::AppState;
use axum::extract::State;
use catalog_core::domain::health::{entities::DatabaseHealthStatus, ports::HealthCheckService};

#[utoipa::path(
    get,
    path = "/ready",
    tag = "health",
    summary = "Readiness probe",
    description = "Checks that the product store answers.",
    responses(
        (status = 200, body = DatabaseHealthStatus),
        (status = 500, body = ApiErrorResponse)
    ),
)]
pub async fn health_ready(
    State(state): State<AppState>,
) -> Result<Response<DatabaseHealthStatus>, ApiError> {
    let status = state.service.readiness().await.map_err(ApiError::from)?;

    Ok(Response::OK(status))
}
