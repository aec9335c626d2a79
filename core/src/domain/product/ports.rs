use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ProductId},
        query::ProductQuery,
        value_objects::{CreateProductInput, UpdateProductInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait ProductService: Send + Sync {
    fn get_products(
        &self,
        query: ProductQuery,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn create_product(
        &self,
        input: CreateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn update_product(
        &self,
        product_id: ProductId,
        input: UpdateProductInput,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    fn delete_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

/// Storage port for products. Adapters own record lifetime; callers keep no
/// copies across requests.
#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Filter, order and slice per `query`.
    fn find_products(
        &self,
        query: &ProductQuery,
    ) -> impl Future<Output = Result<Vec<Product>, CoreError>> + Send;

    fn get_product_by_id(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, CoreError>> + Send;

    fn create_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    /// Writes the mutable fields of `product`. Fails with `NotFound` when no
    /// record has its id.
    fn update_product(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, CoreError>> + Send;

    /// Fails with `NotFound` when nothing was removed.
    fn delete_product(
        &self,
        product_id: ProductId,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}
