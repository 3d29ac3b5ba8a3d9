use chrono::Utc;
use uuid::Uuid;

use crate::{
    audit::log_audit,
    dto::{
        cart::CartList,
        wishlist::{AddToWishlistRequest, WishlistList},
    },
    error::{AppError, AppResult},
    middleware::auth::AuthUser,
    models::{ProductSnapshot, WishlistItem},
    response::{ApiResponse, Meta},
    services::{
        cart_service::merge_into_cart, require_positive_quantity, require_product,
        require_product_id,
    },
    state::AppState,
};

fn wishlist_response(message: &str, items: Vec<WishlistItem>) -> ApiResponse<WishlistList> {
    let meta = Meta::total(items.len());
    ApiResponse::success(message, WishlistList { items }, Some(meta))
}

pub async fn list_wishlist(
    state: &AppState,
    user: &AuthUser,
) -> AppResult<ApiResponse<WishlistList>> {
    let items = state.wishlists.get(&user.user_id).await?;
    Ok(wishlist_response("OK", items))
}

pub async fn add_to_wishlist(
    state: &AppState,
    user: &AuthUser,
    payload: AddToWishlistRequest,
) -> AppResult<ApiResponse<WishlistList>> {
    let product_id = require_product_id(payload.product_id)?;
    let product = require_product(payload.product)?;

    let _guard = state.wishlist_locks.lock(&user.user_id).await;
    let mut items = state.wishlists.get(&user.user_id).await?;
    if items.iter().any(|i| i.product_id == product_id) {
        return Err(AppError::Conflict(format!(
            "product {product_id} is already in the wishlist"
        )));
    }

    items.push(WishlistItem {
        id: Uuid::new_v4().to_string(),
        product: product.into_wishlist_product(&product_id),
        product_id: product_id.clone(),
        added_at: Utc::now(),
    });
    state.wishlists.set(&user.user_id, items.clone()).await?;

    log_audit(
        &user.user_id,
        "wishlist_add",
        "wishlist",
        serde_json::json!({ "product_id": product_id }),
    );
    Ok(wishlist_response("Added to wishlist", items))
}

pub async fn remove_from_wishlist(
    state: &AppState,
    user: &AuthUser,
    product_id: &str,
) -> AppResult<ApiResponse<WishlistList>> {
    let _guard = state.wishlist_locks.lock(&user.user_id).await;
    let mut items = state.wishlists.get(&user.user_id).await?;
    let before = items.len();
    items.retain(|i| i.product_id != product_id);

    if items.len() != before {
        state.wishlists.set(&user.user_id, items.clone()).await?;
        log_audit(
            &user.user_id,
            "wishlist_remove",
            "wishlist",
            serde_json::json!({ "product_id": product_id }),
        );
    }
    Ok(wishlist_response("Removed from wishlist", items))
}

/// Advisory check used by product cards. Never fails: an anonymous caller
/// or a store error reads as "not in the wishlist".
pub async fn exists_in_wishlist(
    state: &AppState,
    user: Option<&AuthUser>,
    product_id: &str,
) -> bool {
    let Some(user) = user else {
        return false;
    };

    match state.wishlists.get(&user.user_id).await {
        Ok(items) => items.iter().any(|i| i.product_id == product_id),
        Err(err) => {
            tracing::warn!(error = %err, user_id = %user.user_id, "wishlist lookup failed");
            false
        }
    }
}

/// Moves a wishlist entry into the cart with the cart's merge semantics.
pub async fn move_to_cart(
    state: &AppState,
    user: &AuthUser,
    product_id: &str,
    quantity: Option<i64>,
) -> AppResult<ApiResponse<CartList>> {
    let quantity = require_positive_quantity(quantity.unwrap_or(1))?;

    // Wishlist before cart, always.
    let _wishlist_guard = state.wishlist_locks.lock(&user.user_id).await;
    let _cart_guard = state.cart_locks.lock(&user.user_id).await;

    let mut wishlist = state.wishlists.get(&user.user_id).await?;
    let position = wishlist
        .iter()
        .position(|i| i.product_id == product_id)
        .ok_or_else(|| AppError::NotFound(format!("wishlist entry for product {product_id}")))?;
    let entry = wishlist.remove(position);

    let original_cart = state.carts.get(&user.user_id).await?;
    let mut cart = original_cart.clone();
    merge_into_cart(
        &mut cart,
        product_id,
        quantity,
        ProductSnapshot::from(entry.product),
    );
    state.carts.set(&user.user_id, cart.clone()).await?;

    if let Err(err) = state.wishlists.set(&user.user_id, wishlist).await {
        // The entry is still in the wishlist, so the cart must not keep it.
        if let Err(restore_err) = state.carts.set(&user.user_id, original_cart).await {
            tracing::error!(
                error = %restore_err,
                user_id = %user.user_id,
                product_id = %product_id,
                "cart restore after failed wishlist write failed"
            );
        }
        return Err(err.into());
    }

    log_audit(
        &user.user_id,
        "wishlist_move_to_cart",
        "cart",
        serde_json::json!({ "product_id": product_id, "quantity": quantity }),
    );
    let meta = Meta::total(cart.len());
    Ok(ApiResponse::success(
        "Moved to cart",
        CartList { items: cart },
        Some(meta),
    ))
}
