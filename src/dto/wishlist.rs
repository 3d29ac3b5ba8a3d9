use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{dto::product::ProductInput, models::WishlistItem};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddToWishlistRequest {
    pub product_id: Option<String>,
    /// `size` and `color` are ignored for wishlist entries.
    pub product: Option<ProductInput>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct WishlistList {
    #[schema(value_type = Vec<WishlistItem>)]
    pub items: Vec<WishlistItem>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ExistsResponse {
    pub exists: bool,
}

#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct MoveToCartRequest {
    /// Defaults to 1.
    pub quantity: Option<i64>,
}
