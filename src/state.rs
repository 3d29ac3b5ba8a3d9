use std::sync::Arc;

use crate::{
    config::AppConfig,
    models::{CartItem, WishlistItem},
    store::{InMemoryListStore, ListStore, UserLocks},
};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub carts: Arc<dyn ListStore<CartItem>>,
    pub wishlists: Arc<dyn ListStore<WishlistItem>>,
    pub cart_locks: Arc<UserLocks>,
    pub wishlist_locks: Arc<UserLocks>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        carts: Arc<dyn ListStore<CartItem>>,
        wishlists: Arc<dyn ListStore<WishlistItem>>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            carts,
            wishlists,
            cart_locks: Arc::new(UserLocks::new()),
            wishlist_locks: Arc::new(UserLocks::new()),
        }
    }

    /// State backed by process-local stores.
    pub fn in_memory(config: AppConfig) -> Self {
        Self::new(
            config,
            Arc::new(InMemoryListStore::<CartItem>::new()),
            Arc::new(InMemoryListStore::<WishlistItem>::new()),
        )
    }
}
