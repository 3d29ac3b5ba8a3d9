use std::{collections::HashMap, sync::Arc};

use parking_lot::Mutex;
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

/// One async mutex per user id.
///
/// Held by the services for the full get -> mutate -> set sequence so two
/// requests for the same user cannot interleave. Different users never
/// contend. Entries are never evicted.
#[derive(Debug, Default)]
pub struct UserLocks {
    locks: Mutex<HashMap<String, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn lock(&self, user_id: &str) -> OwnedMutexGuard<()> {
        // The table lock is released before awaiting the user's mutex.
        let lock = {
            let mut locks = self.locks.lock();
            locks
                .entry(user_id.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };
        lock.lock_owned().await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn same_user_is_serialized() {
        let locks = UserLocks::new();
        let guard = locks.lock("u1").await;

        let second = tokio::time::timeout(Duration::from_millis(20), locks.lock("u1")).await;
        assert!(second.is_err());

        drop(guard);
        let third = tokio::time::timeout(Duration::from_millis(20), locks.lock("u1")).await;
        assert!(third.is_ok());
    }

    #[tokio::test]
    async fn different_users_do_not_contend() {
        let locks = UserLocks::new();
        let _guard = locks.lock("u1").await;

        let other = tokio::time::timeout(Duration::from_millis(20), locks.lock("u2")).await;
        assert!(other.is_ok());
    }
}
