use std::sync::Arc;

use catalog_core::application::CatalogService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: CatalogService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: CatalogService) -> Self {
        Self { args, service }
    }
}
