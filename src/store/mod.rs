//! Per-user list storage.
//!
//! A store maps an opaque user id to that user's ordered list of entries.
//! It knows nothing about carts or wishlists; the services own the
//! mutation rules and hold a [`UserLocks`] guard across each
//! read-modify-write.

use async_trait::async_trait;

pub mod locks;
pub mod memory;

pub use locks::UserLocks;
pub use memory::InMemoryListStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

#[async_trait]
pub trait ListStore<T>: Send + Sync
where
    T: Clone + Send + Sync + 'static,
{
    /// Current list for `user_id`; empty if the user has never been written.
    async fn get(&self, user_id: &str) -> StoreResult<Vec<T>>;

    /// Replaces the whole list for `user_id`.
    async fn set(&self, user_id: &str, items: Vec<T>) -> StoreResult<()>;
}
