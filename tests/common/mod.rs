#![allow(dead_code)]

use marketplace_cart_api::{
    config::AppConfig, dto::product::ProductInput, middleware::auth::AuthUser, state::AppState,
};

pub const SECRET: &str = "test-secret";

pub fn state() -> AppState {
    AppState::in_memory(AppConfig::with_secret(SECRET))
}

pub fn user(id: &str) -> AuthUser {
    AuthUser {
        user_id: id.to_string(),
    }
}

pub fn product(name: &str, price: f64) -> ProductInput {
    ProductInput {
        name: name.to_string(),
        price,
        original_price: None,
        image: format!("/img/{name}.png"),
        brand: Some("Acme".to_string()),
        seller_id: Some("seller-1".to_string()),
        category: Some("tools".to_string()),
        in_stock: true,
        size: Some("M".to_string()),
        color: Some("red".to_string()),
    }
}
