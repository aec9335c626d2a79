use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    product::ports::ProductRepository,
};

impl<P, HC> HealthCheckService for Service<P, HC>
where
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    async fn readiness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readiness().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        health::ports::MockHealthCheckRepository, product::ports::MockProductRepository,
    };

    #[tokio::test]
    async fn test_readiness_reports_storage_failure() {
        let mut health = MockHealthCheckRepository::new();
        health
            .expect_readiness()
            .returning(|| Box::pin(async { Err(CoreError::InternalServerError) }));

        let service = Service::new(MockProductRepository::new(), health);

        assert_eq!(
            service.readiness().await,
            Err(CoreError::InternalServerError)
        );
    }
}
