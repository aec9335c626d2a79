use chrono::Utc;
use sea_orm::ActiveValue::{NotSet, Set, Unchanged};
use tracing::warn;

use crate::domain::product::entities::{Product, ProductId};
use crate::entity::products::{ActiveModel as ProductActiveModel, Model as ProductModel};

fn decode_tags(tags: serde_json::Value) -> Vec<String> {
    serde_json::from_value(tags).unwrap_or_else(|e| {
        warn!("Discarding malformed product tags: {}", e);
        Vec::new()
    })
}

fn encode_tags(tags: &[String]) -> serde_json::Value {
    serde_json::Value::from(tags.to_vec())
}

impl From<ProductModel> for Product {
    fn from(model: ProductModel) -> Self {
        Product {
            id: ProductId::from(model.id),
            name: model.name,
            description: model.description,
            price: model.price,
            category: model.category,
            in_stock: model.in_stock,
            tags: decode_tags(model.tags),
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

/// Every column set, for inserts.
pub fn to_insert_model(product: &Product) -> ProductActiveModel {
    ProductActiveModel {
        id: Set(product.id.as_uuid()),
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        price: Set(product.price),
        category: Set(product.category.clone()),
        in_stock: Set(product.in_stock),
        tags: Set(encode_tags(&product.tags)),
        created_at: Set(product.created_at.fixed_offset()),
    }
}

/// Mutable columns only; `id` is the update key and `created_at` is left out.
pub fn to_update_model(product: &Product) -> ProductActiveModel {
    ProductActiveModel {
        id: Unchanged(product.id.as_uuid()),
        name: Set(product.name.clone()),
        description: Set(product.description.clone()),
        price: Set(product.price),
        category: Set(product.category.clone()),
        in_stock: Set(product.in_stock),
        tags: Set(encode_tags(&product.tags)),
        created_at: NotSet,
    }
}
