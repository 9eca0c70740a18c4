// src/dtos/product.rs
use serde::{Deserialize, Serialize};

use crate::models::product::Product;

/// Body of POST and PUT. Any `id` sent by the client is ignored.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ProductResponse {
    pub id: Option<i64>,
    pub name: String,
    pub description: Option<String>,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Deserialize)]
pub struct StockQuery {
    #[serde(default)]
    pub count: i32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StockResponse {
    pub available: bool,
}

#[derive(Debug, Deserialize)]
pub struct SortQuery {
    #[serde(rename = "sortOrder")]
    pub sort_order: Option<String>,
}

impl From<ProductRequest> for Product {
    fn from(req: ProductRequest) -> Self {
        Self {
            id: None,
            name: req.name,
            description: req.description,
            price: req.price,
            quantity: req.quantity,
        }
    }
}

// Convert from Model to Response DTO
impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            quantity: product.quantity,
        }
    }
}
