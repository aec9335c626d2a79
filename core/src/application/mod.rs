use tracing::info;

use crate::{
    domain::common::{CatalogConfig, StorageBackend, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        product::repositories::{
            in_memory_product_repository::InMemoryProductRepository,
            postgres_product_repository::PostgresProductRepository, product_store::ProductStore,
        },
    },
};

pub type CatalogService = Service<ProductStore, ProductStore>;

/// Builds the storage adapter named by `config` and wires it into the service.
pub async fn create_service(config: CatalogConfig) -> Result<CatalogService, anyhow::Error> {
    let store = match config.storage {
        StorageBackend::Postgres => {
            let postgres = Postgres::new(PostgresConfig {
                database_url: config.database.url(),
            })
            .await?;
            ProductStore::Postgres(PostgresProductRepository::new(postgres.get_db()))
        }
        StorageBackend::Memory => ProductStore::InMemory(InMemoryProductRepository::new()),
    };

    info!(backend = store.backend_name(), "product store ready");

    Ok(Service::new(store.clone(), store))
}
