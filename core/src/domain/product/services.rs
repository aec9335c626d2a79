use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    health::ports::HealthCheckRepository,
    product::{
        entities::{Product, ProductId},
        ports::{ProductRepository, ProductService},
        query::ProductQuery,
        validation::validate_product,
        value_objects::{CreateProductInput, UpdateProductInput},
    },
};

impl<P, HC> ProductService for Service<P, HC>
where
    P: ProductRepository,
    HC: HealthCheckRepository,
{
    #[instrument(skip(self))]
    async fn get_products(&self, query: ProductQuery) -> Result<Vec<Product>, CoreError> {
        self.product_repository.find_products(&query).await
    }

    #[instrument(skip(self))]
    async fn get_product(&self, product_id: ProductId) -> Result<Product, CoreError> {
        self.product_repository
            .get_product_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)
    }

    #[instrument(skip(self, input), fields(category = %input.category))]
    async fn create_product(&self, input: CreateProductInput) -> Result<Product, CoreError> {
        let product = Product::new(input);
        validate_product(&product).map_err(CoreError::Validation)?;

        let created_product = self.product_repository.create_product(product).await?;

        info!(product_id = %created_product.id, "product created");
        Ok(created_product)
    }

    #[instrument(skip(self, input))]
    async fn update_product(
        &self,
        product_id: ProductId,
        input: UpdateProductInput,
    ) -> Result<Product, CoreError> {
        let mut product = self
            .product_repository
            .get_product_by_id(product_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        product.update(input);
        validate_product(&product).map_err(CoreError::Validation)?;

        let updated_product = self.product_repository.update_product(product).await?;

        Ok(updated_product)
    }

    #[instrument(skip(self))]
    async fn delete_product(&self, product_id: ProductId) -> Result<(), CoreError> {
        self.product_repository.delete_product(product_id).await?;

        info!("product deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            common::entities::app_errors::FieldError,
            health::ports::MockHealthCheckRepository,
            product::{ports::MockProductRepository, query::ProductSort},
        },
        infrastructure::product::repositories::in_memory_product_repository::InMemoryProductRepository,
        infrastructure::product::repositories::product_store::ProductStore,
    };

    fn service() -> Service<ProductStore, ProductStore> {
        let store = ProductStore::InMemory(InMemoryProductRepository::new());
        Service::new(store.clone(), store)
    }

    fn input(name: &str, price: f64, category: &str) -> CreateProductInput {
        CreateProductInput {
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            category: category.to_string(),
            in_stock: None,
            tags: None,
        }
    }

    #[tokio::test]
    async fn test_create_then_get_round_trip() {
        let service = service();

        let created = service
            .create_product(CreateProductInput {
                tags: Some(vec!["oak".to_string(), "handmade".to_string()]),
                ..input("Shelf", 89.0, "furniture")
            })
            .await
            .unwrap();
        let fetched = service.get_product(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(fetched.price, 89.0);
        assert_eq!(fetched.tags, vec!["oak", "handmade"]);
        assert!(fetched.in_stock);
    }

    #[tokio::test]
    async fn test_create_rejects_non_positive_price() {
        let service = service();

        let error = service
            .create_product(input("Shelf", 0.0, "furniture"))
            .await
            .unwrap_err();

        assert_eq!(
            error,
            CoreError::Validation(vec![FieldError::new(
                "price",
                "price must be greater than 0"
            )])
        );
        assert!(
            service
                .get_products(ProductQuery::default())
                .await
                .unwrap()
                .is_empty()
        );
    }

    #[tokio::test]
    async fn test_update_merges_and_revalidates() {
        let service = service();
        let created = service
            .create_product(input("Chair", 45.0, "furniture"))
            .await
            .unwrap();

        let updated = service
            .update_product(
                created.id,
                UpdateProductInput {
                    in_stock: Some(false),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert!(!updated.in_stock);
        assert_eq!(updated.name, created.name);
        assert_eq!(updated.price, created.price);
        assert_eq!(updated.created_at, created.created_at);

        let error = service
            .update_product(
                created.id,
                UpdateProductInput {
                    price: Some(-2.0),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert!(matches!(error, CoreError::Validation(_)));
        assert_eq!(service.get_product(created.id).await.unwrap().price, 45.0);
    }

    #[tokio::test]
    async fn test_missing_product_is_not_found() {
        let service = service();
        let missing = ProductId::new();

        assert_eq!(
            service.get_product(missing).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service
                .update_product(missing, UpdateProductInput::default())
                .await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service.delete_product(missing).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let service = service();
        let created = service
            .create_product(input("Stool", 20.0, "furniture"))
            .await
            .unwrap();

        assert_eq!(service.delete_product(created.id).await, Ok(()));
        assert_eq!(
            service.delete_product(created.id).await,
            Err(CoreError::NotFound)
        );
    }

    #[tokio::test]
    async fn test_get_products_forwards_query() {
        let service = service();
        for (name, price) in [("A", 30.0), ("B", 10.0), ("C", 20.0)] {
            service
                .create_product(input(name, price, "misc"))
                .await
                .unwrap();
        }

        let products = service
            .get_products(ProductQuery {
                sort: ProductSort::PriceAsc,
                page_size: 2,
                ..Default::default()
            })
            .await
            .unwrap();

        let names: Vec<&str> = products.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["B", "C"]);
    }

    #[tokio::test]
    async fn test_storage_fault_propagates() {
        let mut repository = MockProductRepository::new();
        repository
            .expect_get_product_by_id()
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        repository.expect_update_product().never();

        let service = Service::new(repository, MockHealthCheckRepository::new());

        let error = service
            .update_product(ProductId::new(), UpdateProductInput::default())
            .await
            .unwrap_err();
        assert_eq!(error, CoreError::InternalServerError);
    }

    #[tokio::test]
    async fn test_update_does_not_write_invalid_record() {
        let existing = Product::new(input("Lamp", 15.0, "lighting"));
        let existing_id = existing.id;

        let mut repository = MockProductRepository::new();
        repository
            .expect_get_product_by_id()
            .withf(move |id| *id == existing_id)
            .returning(move |_| {
                let product = existing.clone();
                Box::pin(async move { Ok(Some(product)) })
            });
        repository.expect_update_product().never();

        let service = Service::new(repository, MockHealthCheckRepository::new());

        let error = service
            .update_product(
                existing_id,
                UpdateProductInput {
                    name: Some(String::new()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();
        assert_eq!(
            error,
            CoreError::Validation(vec![FieldError::new("name", "name is required")])
        );
    }
}
