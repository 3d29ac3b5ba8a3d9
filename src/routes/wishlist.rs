use axum::{
    Json, Router,
    extract::{Path, State},
    routing::{delete, get, post},
};

use crate::{
    dto::{
        cart::CartList,
        wishlist::{AddToWishlistRequest, ExistsResponse, MoveToCartRequest, WishlistList},
    },
    error::{AppError, AppResult},
    extract::{OptionalJson, ValidJson},
    middleware::auth::AuthUser,
    response::ApiResponse,
    services::wishlist_service,
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_wishlist).post(add_to_wishlist))
        .route("/{product_id}", delete(remove_from_wishlist))
        .route("/{product_id}/exists", get(wishlist_exists))
        .route("/{product_id}/move-to-cart", post(move_to_cart))
}

#[utoipa::path(
    get,
    path = "/api/wishlist",
    responses(
        (status = 200, description = "Wishlist entries for the current user", body = ApiResponse<WishlistList>),
        (status = 401, description = "Unauthorized")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn list_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let resp = wishlist_service::list_wishlist(&state, &user).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    post,
    path = "/api/wishlist",
    request_body = AddToWishlistRequest,
    responses(
        (status = 200, description = "Added to wishlist", body = ApiResponse<WishlistList>),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Product already in wishlist")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn add_to_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
    ValidJson(payload): ValidJson<AddToWishlistRequest>,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let resp = wishlist_service::add_to_wishlist(&state, &user, payload).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    delete,
    path = "/api/wishlist/{product_id}",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Entry removed, or was already absent", body = ApiResponse<WishlistList>)
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn remove_from_wishlist(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<String>,
) -> AppResult<Json<ApiResponse<WishlistList>>> {
    let resp = wishlist_service::remove_from_wishlist(&state, &user, &product_id).await?;
    Ok(Json(resp))
}

#[utoipa::path(
    get,
    path = "/api/wishlist/{product_id}/exists",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Whether the product is saved; false for anonymous callers", body = ApiResponse<ExistsResponse>)
    ),
    tag = "Wishlist"
)]
pub async fn wishlist_exists(
    State(state): State<AppState>,
    user: Result<AuthUser, AppError>,
    Path(product_id): Path<String>,
) -> Json<ApiResponse<ExistsResponse>> {
    let user = user.ok();
    let exists = wishlist_service::exists_in_wishlist(&state, user.as_ref(), &product_id).await;
    Json(ApiResponse::success("OK", ExistsResponse { exists }, None))
}

#[utoipa::path(
    post,
    path = "/api/wishlist/{product_id}/move-to-cart",
    params(
        ("product_id" = String, Path, description = "Product ID")
    ),
    request_body(
        content = MoveToCartRequest,
        description = "Optional; quantity defaults to 1"
    ),
    responses(
        (status = 200, description = "Entry moved into the cart", body = ApiResponse<CartList>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Product not in wishlist")
    ),
    security(("bearer_auth" = [])),
    tag = "Wishlist"
)]
pub async fn move_to_cart(
    State(state): State<AppState>,
    user: AuthUser,
    Path(product_id): Path<String>,
    OptionalJson(payload): OptionalJson<MoveToCartRequest>,
) -> AppResult<Json<ApiResponse<CartList>>> {
    let resp =
        wishlist_service::move_to_cart(&state, &user, &product_id, payload.quantity).await?;
    Ok(Json(resp))
}
