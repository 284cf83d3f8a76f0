/**
 * Session Serializer
 *
 * Converts an authenticated identity into the compact token stored in the
 * server-side session - the user's id and nothing else - and reconstructs
 * the identity from that token on later requests.
 *
 * The session itself (cookie, server-side record, expiry) belongs to
 * `tower-sessions`; this module only owns the one key the gateway writes
 * into it.
 */

use tower_sessions::Session;
use uuid::Uuid;

use crate::auth::users::{User, UserStore};
use crate::error::GateError;

/// Session key under which the authenticated user's id is stored.
/// Absence of the key means the session is unauthenticated.
pub const USER_ID_KEY: &str = "user_id";

/// Serialize an identity to its session token
pub fn serialize_identity(user: &User) -> Uuid {
    user.id
}

/// Establish the session for an authenticated user
///
/// Writes the serialized token; the session layer persists the record and
/// delivers the session id to the client.
pub async fn establish(session: &Session, user: &User) -> Result<(), GateError> {
    session.insert(USER_ID_KEY, serialize_identity(user)).await?;
    Ok(())
}

/// Remove the identity binding from the session
///
/// Only the token is removed. The session record (and the client's cookie)
/// may well outlive it - the next request simply resolves to anonymous.
pub async fn clear(session: &Session) -> Result<(), GateError> {
    session.remove::<Uuid>(USER_ID_KEY).await?;
    Ok(())
}

/// Reconstruct the identity a session token refers to
///
/// Returns `None` - anonymous - when the token no longer resolves, e.g.
/// the user was deleted after the session was established. That failure is
/// reported on the error channel rather than propagated: a stale token
/// must never abort the request carrying it.
pub async fn deserialize_identity(store: &dyn UserStore, token: Uuid) -> Option<User> {
    match store.user_by_id(token).await {
        Ok(Some(user)) => Some(user),
        Ok(None) => {
            tracing::error!("Session token {} does not resolve to a user", token);
            None
        }
        Err(e) => {
            tracing::error!("User store failed while resolving session token: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tower_sessions::{MemoryStore, Session};

    use super::*;
    use crate::auth::memory::MemoryUserStore;

    fn detached_session() -> Session {
        let store: Arc<MemoryStore> = Arc::new(MemoryStore::default());
        Session::new(None, store, None)
    }

    async fn test_user(store: &MemoryUserStore) -> User {
        store
            .create_user("alice".to_string(), "hash".to_string())
            .await
            .unwrap()
    }

    #[tokio::test]
    async fn test_token_is_the_user_id() {
        let users = MemoryUserStore::new();
        let user = test_user(&users).await;
        assert_eq!(serialize_identity(&user), user.id);
    }

    #[tokio::test]
    async fn test_establish_then_clear() {
        let users = MemoryUserStore::new();
        let user = test_user(&users).await;
        let session = detached_session();

        establish(&session, &user).await.unwrap();
        let token: Option<Uuid> = session.get(USER_ID_KEY).await.unwrap();
        assert_eq!(token, Some(user.id));

        clear(&session).await.unwrap();
        let token: Option<Uuid> = session.get(USER_ID_KEY).await.unwrap();
        assert_eq!(token, None);
    }

    #[tokio::test]
    async fn test_deserialize_resolves_existing_user() {
        let users = MemoryUserStore::new();
        let user = test_user(&users).await;

        let resolved = deserialize_identity(&users, user.id).await.unwrap();
        assert_eq!(resolved.username, "alice");
    }

    #[tokio::test]
    async fn test_stale_token_resolves_to_anonymous() {
        let users = MemoryUserStore::new();
        let user = test_user(&users).await;
        users.remove_user(user.id).await;

        // Recoverable: no panic, no error, just anonymous.
        assert!(deserialize_identity(&users, user.id).await.is_none());
    }
}
