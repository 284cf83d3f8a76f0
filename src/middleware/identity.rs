/**
 * Request Identity Middleware
 *
 * On every request, regardless of route, this middleware determines
 * whether the active session carries an identity token; if so it resolves
 * the token into a full user record and attaches the result to the
 * request's extensions, where downstream handlers and the rendering layer
 * read it. "No identity" is attached explicitly as `Identity::Anonymous` -
 * the invariant is that the request always carries exactly one valid user
 * or exactly anonymous, never a partial or stale identity.
 *
 * Resolution runs once per request; nothing is cached beyond the request's
 * lifetime. A token that fails to resolve (user deleted, store fault)
 * degrades to anonymous with the failure logged - it never aborts the
 * request pipeline.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::Next,
    response::Response,
};
use tower_sessions::Session;
use uuid::Uuid;

use crate::auth::session::{deserialize_identity, USER_ID_KEY};
use crate::auth::users::{User, UserStore};

/// The identity attached to every request
#[derive(Debug, Clone)]
pub enum Identity {
    /// The session token resolved to this user
    User(User),
    /// No token, or the token no longer resolves
    Anonymous,
}

impl Identity {
    /// The resolved user, if any
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::User(user) => Some(user),
            Self::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::User(_))
    }
}

/// Identity resolution middleware
///
/// Must be layered inside the session layer and outside every handler that
/// reads the current user.
pub async fn identity_middleware(
    State(store): State<Arc<dyn UserStore>>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Response {
    let identity = resolve_identity(store.as_ref(), &session).await;
    request.extensions_mut().insert(identity);
    next.run(request).await
}

/// Resolve the session's token into an identity
///
/// Every failure mode lands on `Anonymous`: a session read fault and an
/// unresolvable token are logged, not propagated.
async fn resolve_identity(store: &dyn UserStore, session: &Session) -> Identity {
    let token: Option<Uuid> = match session.get(USER_ID_KEY).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to read session: {}", e);
            None
        }
    };

    match token {
        Some(token) => match deserialize_identity(store, token).await {
            Some(user) => Identity::User(user),
            None => Identity::Anonymous,
        },
        None => Identity::Anonymous,
    }
}

/// Axum extractor for the current identity
///
/// Reads the identity the middleware attached. Succeeds for anonymous
/// requests too - rejection only happens when the middleware never ran,
/// which is a wiring bug, not a client error.
#[derive(Debug, Clone)]
pub struct CurrentIdentity(pub Identity);

impl<S> FromRequestParts<S> for CurrentIdentity
where
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let identity = parts.extensions.get::<Identity>().cloned().ok_or_else(|| {
            tracing::error!("Identity missing from request extensions; is the middleware installed?");
            StatusCode::INTERNAL_SERVER_ERROR
        })?;

        Ok(CurrentIdentity(identity))
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use chrono::Utc;

    use super::*;

    fn test_user() -> User {
        User {
            id: Uuid::new_v4(),
            username: "alice".to_string(),
            password_hash: "hash".to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_identity_helpers() {
        let identity = Identity::User(test_user());
        assert!(identity.is_authenticated());
        assert_eq!(identity.user().unwrap().username, "alice");

        assert!(!Identity::Anonymous.is_authenticated());
        assert!(Identity::Anonymous.user().is_none());
    }

    #[tokio::test]
    async fn test_extractor_reads_attached_identity() {
        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(Identity::User(test_user()));
        let (mut parts, _) = request.into_parts();

        let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(identity.is_authenticated());
    }

    #[tokio::test]
    async fn test_extractor_accepts_anonymous() {
        let mut request = Request::builder().uri("/").body(Body::empty()).unwrap();
        request.extensions_mut().insert(Identity::Anonymous);
        let (mut parts, _) = request.into_parts();

        let CurrentIdentity(identity) = CurrentIdentity::from_request_parts(&mut parts, &())
            .await
            .unwrap();
        assert!(!identity.is_authenticated());
    }

    #[tokio::test]
    async fn test_extractor_rejects_when_middleware_missing() {
        let request = Request::builder().uri("/").body(Body::empty()).unwrap();
        let (mut parts, _) = request.into_parts();

        let result = CurrentIdentity::from_request_parts(&mut parts, &()).await;
        assert_eq!(result.unwrap_err(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
