use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::cart::{AddToCartRequest, CartList, CartSummary, QuantityMode, UpdateQuantityRequest},
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{CartItem, ProductSnapshot},
    response::{ApiResponse, Meta},
    services::{require_positive_quantity, require_product, require_product_id},
    state::AppState,
};

fn cart_response(message: &str, items: Vec<CartItem>) -> ApiResponse<CartList> {
    let meta = Meta::total(items.len());
    ApiResponse::success(message, CartList { items }, Some(meta))
}

/// Adds `quantity` of a product to `items`, merging into an existing line
/// for the same product. The first snapshot seen for a product is kept.
pub(crate) fn merge_into_cart(
    items: &mut Vec<CartItem>,
    product_id: &str,
    quantity: i64,
    snapshot: ProductSnapshot,
) {
    if let Some(existing) = items.iter_mut().find(|i| i.product_id == product_id) {
        existing.quantity = existing.quantity.saturating_add(quantity);
        return;
    }

    items.push(CartItem {
        id: Uuid::new_v4().to_string(),
        product_id: product_id.to_string(),
        quantity,
        product: snapshot,
        added_at: Utc::now(),
    });
}

pub async fn list_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartList>> {
    let items = state.carts.get(&user.user_id).await?;
    Ok(cart_response("OK", items))
}

pub async fn cart_summary(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<CartSummary>> {
    let items = state.carts.get(&user.user_id).await?;
    Ok(ApiResponse::success("OK", summarize(&items), None))
}

pub fn summarize(items: &[CartItem]) -> CartSummary {
    let mut summary = CartSummary {
        lines: items.len(),
        units: 0,
        subtotal: 0.0,
        savings: 0.0,
    };
    for item in items {
        let qty = item.quantity as f64;
        summary.units = summary.units.saturating_add(item.quantity);
        summary.subtotal += item.product.price * qty;
        if let Some(original) = item
            .product
            .original_price
            .filter(|original| *original > item.product.price)
        {
            summary.savings += (original - item.product.price) * qty;
        }
    }
    summary
}

pub async fn add_to_cart(
    state: &AppState,
    user: &AuthUser,
    payload: AddToCartRequest,
) -> AppResult<ApiResponse<CartList>> {
    let product_id = require_product_id(payload.product_id)?;
    let quantity = require_positive_quantity(payload.quantity.unwrap_or(1))?;
    let product = require_product(payload.product)?;

    let _guard = state.cart_locks.lock(&user.user_id).await;
    let mut items = state.carts.get(&user.user_id).await?;
    merge_into_cart(
        &mut items,
        &product_id,
        quantity,
        product.into_snapshot(&product_id),
    );
    state.carts.set(&user.user_id, items.clone()).await?;

    log_audit(
        &user.user_id,
        "cart_add",
        "cart",
        serde_json::json!({ "product_id": product_id, "quantity": quantity }),
    );
    Ok(cart_response("Added to cart", items))
}

pub async fn update_quantity(
    state: &AppState,
    user: &AuthUser,
    item_id: &str,
    payload: UpdateQuantityRequest,
) -> AppResult<ApiResponse<CartList>> {
    if payload.mode == QuantityMode::Set {
        require_positive_quantity(payload.quantity)?;
    }

    let _guard = state.cart_locks.lock(&user.user_id).await;
    let mut items = state.carts.get(&user.user_id).await?;
    let item = items
        .iter_mut()
        .find(|i| i.id == item_id)
        .ok_or_else(|| AppError::NotFound(format!("cart item {item_id}")))?;

    item.quantity = match payload.mode {
        QuantityMode::Set => payload.quantity,
        QuantityMode::Delta => item.quantity.saturating_add(payload.quantity).max(1),
    };
    let quantity = item.quantity;
    state.carts.set(&user.user_id, items.clone()).await?;

    log_audit(
        &user.user_id,
        "cart_update",
        "cart",
        serde_json::json!({ "item_id": item_id, "quantity": quantity }),
    );
    Ok(cart_response("Cart updated", items))
}

pub async fn remove_from_cart(
    state: &AppState,
    user: &AuthUser,
    item_id: &str,
) -> AppResult<ApiResponse<CartList>> {
    let _guard = state.cart_locks.lock(&user.user_id).await;
    let mut items = state.carts.get(&user.user_id).await?;
    let before = items.len();
    items.retain(|i| i.id != item_id);

    if items.len() != before {
        state.carts.set(&user.user_id, items.clone()).await?;
        log_audit(
            &user.user_id,
            "cart_remove",
            "cart",
            serde_json::json!({ "item_id": item_id }),
        );
    }
    Ok(cart_response("Removed from cart", items))
}

pub async fn clear_cart(state: &AppState, user: &AuthUser) -> AppResult<ApiResponse<CartList>> {
    let _guard = state.cart_locks.lock(&user.user_id).await;
    state.carts.set(&user.user_id, Vec::new()).await?;

    log_audit(&user.user_id, "cart_clear", "cart", serde_json::json!({}));
    Ok(cart_response("Cart cleared", Vec::new()))
}
