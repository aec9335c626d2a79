use catalog_core::domain::product::value_objects::{CreateProductInput, UpdateProductInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductValidator {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    #[serde(default)]
    pub in_stock: Option<bool>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<CreateProductValidator> for CreateProductInput {
    fn from(payload: CreateProductValidator) -> Self {
        CreateProductInput {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            in_stock: payload.in_stock,
            tags: payload.tags,
        }
    }
}

/// Partial update; absent fields keep their stored value.
#[derive(Debug, Default, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductValidator {
    #[serde(default)]
    #[validate(length(min = 1, message = "name is required"))]
    pub name: Option<String>,

    #[serde(default)]
    #[validate(length(min = 1, message = "description is required"))]
    pub description: Option<String>,

    #[serde(default)]
    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: Option<f64>,

    #[serde(default)]
    #[validate(length(min = 1, message = "category is required"))]
    pub category: Option<String>,

    #[serde(default)]
    pub in_stock: Option<bool>,

    #[serde(default)]
    pub tags: Option<Vec<String>>,
}

impl From<UpdateProductValidator> for UpdateProductInput {
    fn from(payload: UpdateProductValidator) -> Self {
        UpdateProductInput {
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            in_stock: payload.in_stock,
            tags: payload.tags,
        }
    }
}
