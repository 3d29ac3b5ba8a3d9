use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::product::ProductInput, models::CartItem};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: Option<String>,
    /// Defaults to 1.
    pub quantity: Option<i64>,
    pub product: Option<ProductInput>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum QuantityMode {
    /// Replace the quantity.
    #[default]
    Set,
    /// Add a signed increment, floored at 1.
    Delta,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
    #[serde(default)]
    pub mode: QuantityMode,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct CartList {
    #[schema(value_type = Vec<CartItem>)]
    pub items: Vec<CartItem>,
}

#[derive(Debug, Serialize, ToSchema, PartialEq)]
pub struct CartSummary {
    /// Distinct lines in the cart.
    pub lines: usize,
    /// Sum of all quantities.
    pub units: i64,
    pub subtotal: f64,
    /// Discount against `originalPrice`, where one is higher than `price`.
    pub savings: f64,
}
