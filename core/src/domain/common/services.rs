use crate::domain::{health::ports::HealthCheckRepository, product::ports::ProductRepository};

/// Concrete implementation of every domain service trait, parameterised over
/// the storage ports it depends on.
#[derive(Clone, Debug)]
pub struct Service<P, HC>
where
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    pub product_repository: P,
    pub health_check_repository: HC,
}

impl<P, HC> Service<P, HC>
where
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    pub fn new(product_repository: P, health_check_repository: HC) -> Self {
        Self {
            product_repository,
            health_check_repository,
        }
    }
}
