use crate::application::http::server::api_entities::response::Response;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct LivenessResponse {
    pub status: String,
}

#[utoipa::path(
    get,
    path = "/live",
    tag = "health",
    summary = "Liveness probe",
    responses(
        (status = 200, body = LivenessResponse)
    ),
)]
pub async fn health_live() -> Response<LivenessResponse> {
    Response::OK(LivenessResponse {
        status: "ok".to_string(),
    })
}
