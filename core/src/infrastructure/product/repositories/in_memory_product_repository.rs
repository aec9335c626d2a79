use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ProductId},
        ports::ProductRepository,
        query::{ProductQuery, ProductSort},
    },
};

/// Process-local product storage. Insertion order is the natural order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<Vec<Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProductRepository for InMemoryProductRepository {
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CoreError> {
        let products = self.products.read().await;

        let mut matching: Vec<Product> = products
            .iter()
            .filter(|product| query.matches(product))
            .cloned()
            .collect();

        if query.sort != ProductSort::Natural {
            matching.sort_by(|a, b| query.sort.compare(a, b));
        }

        let skip = usize::try_from(query.skip()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.page_size).unwrap_or(usize::MAX);

        Ok(matching.into_iter().skip(skip).take(take).collect())
    }

    async fn get_product_by_id(&self, product_id: ProductId) -> Result<Option<Product>, CoreError> {
        let products = self.products.read().await;

        Ok(products.iter().find(|p| p.id == product_id).cloned())
    }

    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        let mut products = self.products.write().await;

        if products.iter().any(|p| p.id == product.id) {
            error!("Failed to create product: duplicate id {}", product.id);
            return Err(CoreError::InternalServerError);
        }

        products.push(product.clone());
        Ok(product)
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let mut products = self.products.write().await;

        let stored = products
            .iter_mut()
            .find(|p| p.id == product.id)
            .ok_or(CoreError::NotFound)?;

        stored.name = product.name;
        stored.description = product.description;
        stored.price = product.price;
        stored.category = product.category;
        stored.in_stock = product.in_stock;
        stored.tags = product.tags;

        Ok(stored.clone())
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), CoreError> {
        let mut products = self.products.write().await;

        let before = products.len();
        products.retain(|p| p.id != product_id);

        if products.len() == before {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
