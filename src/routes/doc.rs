use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        cart::{AddToCartRequest, CartList, CartSummary, QuantityMode, UpdateQuantityRequest},
        product::ProductInput,
        wishlist::{AddToWishlistRequest, ExistsResponse, MoveToCartRequest, WishlistList},
    },
    models::{CartItem, ProductSnapshot, WishlistItem, WishlistProduct},
    response::{ApiResponse, Meta},
    routes::{cart, health, wishlist},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        cart::cart_list,
        cart::cart_summary,
        cart::add_to_cart,
        cart::update_cart_item,
        cart::remove_from_cart,
        cart::clear_cart,
        wishlist::list_wishlist,
        wishlist::add_to_wishlist,
        wishlist::remove_from_wishlist,
        wishlist::wishlist_exists,
        wishlist::move_to_cart
    ),
    components(
        schemas(
            ProductSnapshot,
            WishlistProduct,
            CartItem,
            WishlistItem,
            ProductInput,
            AddToCartRequest,
            UpdateQuantityRequest,
            QuantityMode,
            AddToWishlistRequest,
            MoveToCartRequest,
            CartList,
            CartSummary,
            WishlistList,
            ExistsResponse,
            Meta,
            ApiResponse<CartList>,
            ApiResponse<CartSummary>,
            ApiResponse<WishlistList>,
            ApiResponse<ExistsResponse>
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Cart", description = "Cart endpoints"),
        (name = "Wishlist", description = "Wishlist endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
