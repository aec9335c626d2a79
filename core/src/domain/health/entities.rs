use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseHealthStatus {
    pub backend: String,
    pub status: String,
    pub response_time_ms: u64,
}
