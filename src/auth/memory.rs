/**
 * In-Memory User Store
 *
 * A `UserStore` over a shared hash map. Exists so the gateway can be
 * exercised without a database: the unit and integration tests run against
 * it, and it is handy for demos. Not intended for production use - nothing
 * survives a restart.
 */

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::auth::users::{User, UserStore};
use crate::error::GateError;

/// Shared in-memory user store
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user, returning the removed record if it existed
    ///
    /// The gateway itself never deletes users; this exists so tests can
    /// model a user disappearing while a session token still references it.
    pub async fn remove_user(&self, id: Uuid) -> Option<User> {
        self.users.write().await.remove(&id)
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(
        &self,
        username: String,
        password_hash: String,
    ) -> Result<User, GateError> {
        let user = User {
            id: Uuid::new_v4(),
            username,
            password_hash,
            created_at: Utc::now(),
        };
        self.users.write().await.insert(user.id, user.clone());
        Ok(user)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, GateError> {
        // Oldest record wins, mirroring the SQL store's ordering.
        let users = self.users.read().await;
        let user = users
            .values()
            .filter(|u| u.username == username)
            .min_by_key(|u| u.created_at)
            .cloned();
        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, GateError> {
        Ok(self.users.read().await.get(&id).cloned())
    }
}
