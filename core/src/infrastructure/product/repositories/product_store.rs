use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ProductId},
        ports::ProductRepository,
        query::ProductQuery,
    },
};

use super::{
    in_memory_product_repository::InMemoryProductRepository,
    postgres_product_repository::PostgresProductRepository,
};

/// Product repository selected at startup from configuration.
#[derive(Debug, Clone)]
pub enum ProductStore {
    Postgres(PostgresProductRepository),
    InMemory(InMemoryProductRepository),
}

impl ProductStore {
    pub fn backend_name(&self) -> &'static str {
        match self {
            ProductStore::Postgres(_) => "postgres",
            ProductStore::InMemory(_) => "memory",
        }
    }
}

impl ProductRepository for ProductStore {
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CoreError> {
        match self {
            ProductStore::Postgres(repository) => repository.find_products(query).await,
            ProductStore::InMemory(repository) => repository.find_products(query).await,
        }
    }

    async fn get_product_by_id(&self, product_id: ProductId) -> Result<Option<Product>, CoreError> {
        match self {
            ProductStore::Postgres(repository) => repository.get_product_by_id(product_id).await,
            ProductStore::InMemory(repository) => repository.get_product_by_id(product_id).await,
        }
    }

    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        match self {
            ProductStore::Postgres(repository) => repository.create_product(product).await,
            ProductStore::InMemory(repository) => repository.create_product(product).await,
        }
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        match self {
            ProductStore::Postgres(repository) => repository.update_product(product).await,
            ProductStore::InMemory(repository) => repository.update_product(product).await,
        }
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), CoreError> {
        match self {
            ProductStore::Postgres(repository) => repository.delete_product(product_id).await,
            ProductStore::InMemory(repository) => repository.delete_product(product_id).await,
        }
    }
}
