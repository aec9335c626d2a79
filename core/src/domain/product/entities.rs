use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::domain::{
    common::{entities::app_errors::CoreError, generate_timestamp, generate_uuid_v7},
    product::value_objects::{CreateProductInput, UpdateProductInput},
};

/// Storage-assigned identifier of a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    pub fn new() -> Self {
        Self(generate_uuid_v7())
    }

    /// Parses an identifier received from a client.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        Uuid::parse_str(value)
            .map(Self)
            .map_err(|_| CoreError::InvalidIdentifier(value.to_string()))
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ProductId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl FromStr for ProductId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,

    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "description is required"))]
    pub description: String,

    #[validate(range(exclusive_min = 0.0, message = "price must be greater than 0"))]
    pub price: f64,

    #[validate(length(min = 1, message = "category is required"))]
    pub category: String,

    pub in_stock: bool,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Product {
    pub fn new(input: CreateProductInput) -> Self {
        Self {
            id: ProductId::new(),
            name: input.name,
            description: input.description,
            price: input.price,
            category: input.category,
            in_stock: input.in_stock.unwrap_or(true),
            tags: input.tags.unwrap_or_default(),
            created_at: generate_timestamp(),
        }
    }

    /// Applies a partial update. `id` and `created_at` are never touched.
    pub fn update(&mut self, input: UpdateProductInput) {
        if let Some(name) = input.name {
            self.name = name;
        }
        if let Some(description) = input.description {
            self.description = description;
        }
        if let Some(price) = input.price {
            self.price = price;
        }
        if let Some(category) = input.category {
            self.category = category;
        }
        if let Some(in_stock) = input.in_stock {
            self.in_stock = in_stock;
        }
        if let Some(tags) = input.tags {
            self.tags = tags;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProductInput {
        CreateProductInput {
            name: "Desk lamp".to_string(),
            description: "Adjustable LED lamp".to_string(),
            price: 39.9,
            category: "lighting".to_string(),
            in_stock: None,
            tags: None,
        }
    }

    #[test]
    fn test_new_product_applies_defaults() {
        let product = Product::new(create_input());

        assert!(product.in_stock);
        assert!(product.tags.is_empty());
        assert_eq!(product.price, 39.9);
        assert_eq!(product.category, "lighting");
    }

    #[test]
    fn test_update_keeps_identity_and_creation_time() {
        let mut product = Product::new(create_input());
        let id = product.id;
        let created_at = product.created_at;

        product.update(UpdateProductInput {
            in_stock: Some(false),
            ..Default::default()
        });

        assert_eq!(product.id, id);
        assert_eq!(product.created_at, created_at);
        assert!(!product.in_stock);
        assert_eq!(product.name, "Desk lamp");
        assert_eq!(product.price, 39.9);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let mut product = Product::new(create_input());
        let before = product.clone();

        product.update(UpdateProductInput::default());

        assert_eq!(product, before);
    }

    #[test]
    fn test_product_id_parse() {
        let id = ProductId::new();
        assert_eq!(ProductId::parse(&id.to_string()), Ok(id));
        assert_eq!(
            ProductId::parse("not-an-id"),
            Err(CoreError::InvalidIdentifier("not-an-id".to_string()))
        );
    }

    #[test]
    fn test_product_serializes_camel_case() {
        let product = Product::new(create_input());
        let value = serde_json::to_value(&product).unwrap();

        assert_eq!(value["id"], product.id.to_string());
        assert_eq!(value["inStock"], true);
        assert!(value.get("createdAt").is_some());
        assert!(value.get("in_stock").is_none());
    }
}
