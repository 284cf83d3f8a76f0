/**
 * Application State Management
 *
 * The central state container for the Axum application. It carries the
 * user store behind its contract trait - constructed once at startup and
 * passed through state, never held in a global - so production wires in
 * PostgreSQL while tests wire in the in-memory store through the same
 * seam.
 *
 * The `FromRef` implementation lets handlers extract the store directly
 * via `State<Arc<dyn UserStore>>` without seeing the whole `AppState`.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::auth::users::UserStore;

/// Application state
#[derive(Clone)]
pub struct AppState {
    /// User store handle, shared across requests
    pub user_store: Arc<dyn UserStore>,
}

impl AppState {
    pub fn new(user_store: Arc<dyn UserStore>) -> Self {
        Self { user_store }
    }
}

impl FromRef<AppState> for Arc<dyn UserStore> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.user_store.clone()
    }
}
