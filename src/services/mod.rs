use crate::{
    dto::product::ProductInput,
    error::{AppError, AppResult},
};

pub mod cart_service;
pub mod wishlist_service;

pub(crate) fn require_product_id(product_id: Option<String>) -> AppResult<String> {
    match product_id.as_deref().map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id.to_string()),
        _ => Err(AppError::Validation("productId is required".into())),
    }
}

pub(crate) fn require_product(product: Option<ProductInput>) -> AppResult<ProductInput> {
    let product = product.ok_or_else(|| AppError::Validation("product is required".into()))?;

    if product.name.trim().is_empty() {
        return Err(AppError::Validation("product.name must not be empty".into()));
    }
    if !is_valid_price(product.price) {
        return Err(AppError::Validation(
            "product.price must be a non-negative number".into(),
        ));
    }
    if product.original_price.is_some_and(|p| !is_valid_price(p)) {
        return Err(AppError::Validation(
            "product.originalPrice must be a non-negative number".into(),
        ));
    }
    Ok(product)
}

pub(crate) fn require_positive_quantity(quantity: i64) -> AppResult<i64> {
    if quantity < 1 {
        return Err(AppError::Validation(
            "quantity must be a positive integer".into(),
        ));
    }
    Ok(quantity)
}

fn is_valid_price(price: f64) -> bool {
    price.is_finite() && price >= 0.0
}
