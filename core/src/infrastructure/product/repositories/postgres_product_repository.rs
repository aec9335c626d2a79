use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Select,
};
use tracing::error;

use crate::domain::{
    common::entities::app_errors::CoreError,
    product::{
        entities::{Product, ProductId},
        ports::ProductRepository,
        query::{ProductQuery, ProductSort},
    },
};
use crate::entity::products::{Column as ProductColumn, Entity as ProductEntity};
use crate::infrastructure::product::mappers::{to_insert_model, to_update_model};

#[derive(Debug, Clone)]
pub struct PostgresProductRepository {
    pub db: DatabaseConnection,
}

impl PostgresProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Builds the list query: filters combined with AND, then price order with an
/// id tie-break, then the pagination window.
fn select_for(query: &ProductQuery) -> Select<ProductEntity> {
    let mut condition = Condition::all();

    if let Some(ref category) = query.category_equals {
        condition = condition.add(ProductColumn::Category.eq(category.clone()));
    }

    if let Some(price_min) = query.price_min {
        condition = condition.add(ProductColumn::Price.gte(price_min));
    }

    if let Some(price_max) = query.price_max {
        condition = condition.add(ProductColumn::Price.lte(price_max));
    }

    let select = ProductEntity::find().filter(condition);

    let select = match query.sort {
        ProductSort::Natural => select,
        ProductSort::PriceAsc => select
            .order_by_asc(ProductColumn::Price)
            .order_by_asc(ProductColumn::Id),
        ProductSort::PriceDesc => select
            .order_by_desc(ProductColumn::Price)
            .order_by_asc(ProductColumn::Id),
    };

    select.offset(query.skip()).limit(query.page_size)
}

impl ProductRepository for PostgresProductRepository {
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>, CoreError> {
        let products = select_for(query)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch products: {}", e);
                CoreError::InternalServerError
            })?
            .into_iter()
            .map(Product::from)
            .collect::<Vec<Product>>();

        Ok(products)
    }

    async fn get_product_by_id(&self, product_id: ProductId) -> Result<Option<Product>, CoreError> {
        let product = ProductEntity::find_by_id(product_id.as_uuid())
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get product by id: {}", e);
                CoreError::InternalServerError
            })?
            .map(Product::from);

        Ok(product)
    }

    async fn create_product(&self, product: Product) -> Result<Product, CoreError> {
        let created_product = ProductEntity::insert(to_insert_model(&product))
            .exec_with_returning(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| {
                error!("Failed to create product: {}", e);
                CoreError::InternalServerError
            })?;

        Ok(created_product)
    }

    async fn update_product(&self, product: Product) -> Result<Product, CoreError> {
        let updated_product = ProductEntity::update(to_update_model(&product))
            .exec(&self.db)
            .await
            .map(Product::from)
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update product: {}", e);
                    CoreError::InternalServerError
                }
            })?;

        Ok(updated_product)
    }

    async fn delete_product(&self, product_id: ProductId) -> Result<(), CoreError> {
        let result = ProductEntity::delete_by_id(product_id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete product: {}", e);
                CoreError::InternalServerError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}
