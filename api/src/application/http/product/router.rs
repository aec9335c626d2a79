use super::handlers::create_product::{__path_create_product, create_product};
use super::handlers::delete_product::{__path_delete_product, delete_product};
use super::handlers::get_product::{__path_get_product, get_product};
use super::handlers::get_products::{__path_get_products, get_products};
use super::handlers::update_product::{__path_update_product, update_product};
use crate::application::http::server::app_state::AppState;

use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_products, get_product, create_product, update_product, delete_product))]
pub struct ProductApiDoc;

pub fn product_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/api/products", state.args.server.root_path),
            get(get_products).post(create_product),
        )
        .route(
            &format!("{}/api/products/{{product_id}}", state.args.server.root_path),
            get(get_product).put(update_product).delete(delete_product),
        )
}
