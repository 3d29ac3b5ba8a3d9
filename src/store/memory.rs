use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{ListStore, StoreResult};

/// Process-local store. Entries live until the process exits.
#[derive(Debug)]
pub struct InMemoryListStore<T> {
    lists: RwLock<HashMap<String, Vec<T>>>,
}

impl<T> InMemoryListStore<T> {
    pub fn new() -> Self {
        Self {
            lists: RwLock::new(HashMap::new()),
        }
    }
}

impl<T> Default for InMemoryListStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T> ListStore<T> for InMemoryListStore<T>
where
    T: Clone + Send + Sync + 'static,
{
    async fn get(&self, user_id: &str) -> StoreResult<Vec<T>> {
        Ok(self.lists.read().get(user_id).cloned().unwrap_or_default())
    }

    async fn set(&self, user_id: &str, items: Vec<T>) -> StoreResult<()> {
        self.lists.write().insert(user_id.to_string(), items);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_user_reads_empty() {
        let store = InMemoryListStore::<u32>::new();
        assert!(store.get("nobody").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn set_replaces_previous_list() {
        let store = InMemoryListStore::new();
        store.set("u1", vec![1, 2, 3]).await.unwrap();
        store.set("u1", vec![4]).await.unwrap();

        assert_eq!(store.get("u1").await.unwrap(), vec![4]);
        assert!(store.get("u2").await.unwrap().is_empty());
    }
}
