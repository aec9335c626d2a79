use crate::application::http::{health::router::HealthApiDoc, product::router::ProductApiDoc};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Product Catalog API"
    ),
    nest(
        (path = "/api/products", api = ProductApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;
