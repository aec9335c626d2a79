#[derive(Debug, Clone, PartialEq)]
pub struct CreateProductInput {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: Option<bool>,
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateProductInput {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    pub tags: Option<Vec<String>>,
}
