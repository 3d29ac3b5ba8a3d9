use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{ProductSnapshot, WishlistProduct};

fn default_in_stock() -> bool {
    true
}

/// Product fields sent by the storefront when an item is saved.
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductInput {
    pub name: String,
    pub price: f64,
    pub original_price: Option<f64>,
    #[serde(default)]
    pub image: String,
    pub brand: Option<String>,
    pub seller_id: Option<String>,
    pub category: Option<String>,
    #[serde(default = "default_in_stock")]
    pub in_stock: bool,
    pub size: Option<String>,
    pub color: Option<String>,
}

impl ProductInput {
    pub fn into_snapshot(self, product_id: &str) -> ProductSnapshot {
        ProductSnapshot {
            id: product_id.to_string(),
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            brand: self.brand,
            seller_id: self.seller_id,
            category: self.category,
            in_stock: self.in_stock,
            size: self.size,
            color: self.color,
        }
    }

    pub fn into_wishlist_product(self, product_id: &str) -> WishlistProduct {
        WishlistProduct {
            id: product_id.to_string(),
            name: self.name,
            price: self.price,
            original_price: self.original_price,
            image: self.image,
            brand: self.brand,
            seller_id: self.seller_id,
            category: self.category,
            in_stock: self.in_stock,
        }
    }
}
