use std::time::Instant;

use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    health::{entities::DatabaseHealthStatus, ports::HealthCheckRepository},
};
use crate::infrastructure::product::repositories::product_store::ProductStore;

impl HealthCheckRepository for ProductStore {
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        let started = Instant::now();

        if let ProductStore::Postgres(repository) = self {
            repository.db.ping().await.map_err(|e| {
                error!("Database readiness check failed: {}", e);
                CoreError::InternalServerError
            })?;
        }

        Ok(DatabaseHealthStatus {
            backend: self.backend_name().to_string(),
            status: "ok".to_string(),
            response_time_ms: started.elapsed().as_millis() as u64,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::product::repositories::in_memory_product_repository::InMemoryProductRepository;

    #[tokio::test]
    async fn test_in_memory_store_is_always_ready() {
        let store = ProductStore::InMemory(InMemoryProductRepository::new());

        let status = store.readiness().await.unwrap();

        assert_eq!(status.backend, "memory");
        assert_eq!(status.status, "ok");
    }
}
