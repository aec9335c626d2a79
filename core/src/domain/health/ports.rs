use std::future::Future;

use crate::domain::{common::entities::app_errors::CoreError, health::entities::DatabaseHealthStatus};

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckService: Send + Sync {
    fn readiness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait HealthCheckRepository: Send + Sync {
    /// Round-trips to the storage engine.
    fn readiness(&self) -> impl Future<Output = Result<DatabaseHealthStatus, CoreError>> + Send;
}
