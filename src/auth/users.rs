/**
 * User Model and Store Contract
 *
 * This module defines the persisted user record and the store contract the
 * rest of the gateway programs against. The store exclusively owns
 * persistence; everything else only ever holds a read copy of a user or a
 * bare id.
 *
 * Uniqueness of usernames is deliberately NOT enforced here: the gateway
 * treats it as a store-level policy question (see DESIGN.md). Lookup by
 * username returns the oldest matching record.
 */

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::GateError;

/// A persisted user record
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique user ID, assigned by the store on creation; doubles as the
    /// session token
    pub id: Uuid,
    /// Username as entered at sign-up
    pub username: String,
    /// bcrypt hash of the password; never the plaintext
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Store contract for user records
///
/// The gateway creates users exactly once (at sign-up) and otherwise only
/// reads them, by username at log-in and by id when a session token is
/// resolved back into an identity.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user with an already-computed password hash
    async fn create_user(
        &self,
        username: String,
        password_hash: String,
    ) -> Result<User, GateError>;

    /// Look up a user by username
    async fn user_by_username(&self, username: &str) -> Result<Option<User>, GateError>;

    /// Look up a user by id
    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, GateError>;
}

/// PostgreSQL-backed user store
///
/// Thin wrapper over a connection pool; constructed once at startup and
/// passed through application state rather than living in a global.
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn create_user(
        &self,
        username: String,
        password_hash: String,
    ) -> Result<User, GateError> {
        let id = Uuid::new_v4();
        let now = Utc::now();

        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (id, username, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(id)
        .bind(&username)
        .bind(&password_hash)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_username(&self, username: &str) -> Result<Option<User>, GateError> {
        // Oldest record wins when duplicates exist.
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            ORDER BY created_at ASC
            LIMIT 1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn user_by_id(&self, id: Uuid) -> Result<Option<User>, GateError> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
