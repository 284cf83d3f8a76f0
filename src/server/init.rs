/**
 * Server Initialization
 *
 * Assembles the running application: database pool, session store,
 * application state, and router.
 *
 * # Initialization Steps
 *
 * 1. Connect to PostgreSQL and run the user-table migrations
 * 2. Create the session store over the same pool and run its migration
 * 3. Build the session layer
 * 4. Wrap the pool in the user store and build application state
 * 5. Assemble the router
 *
 * Any failure here aborts startup - the gateway cannot authenticate
 * anyone without its stores.
 */

use std::sync::Arc;

use axum::Router;
use tower_sessions::SessionManagerLayer;
use tower_sessions_sqlx_store::PostgresStore;

use crate::auth::users::PgUserStore;
use crate::routes::create_router;
use crate::server::config::{connect_database, ServerConfig};
use crate::server::state::AppState;

/// Create and configure the Axum application
///
/// # Errors
///
/// Database connection or session-store migration failure.
pub async fn create_app(config: &ServerConfig) -> Result<Router, Box<dyn std::error::Error>> {
    tracing::info!("Initializing authentication gateway");

    let pool = connect_database(&config.database_url).await?;

    let session_store = PostgresStore::new(pool.clone());
    session_store.migrate().await?;

    // Sessions ride a plain cookie; secure flag is left to the deployment's
    // TLS terminator.
    let session_layer = SessionManagerLayer::new(session_store).with_secure(false);

    let app_state = AppState::new(Arc::new(PgUserStore::new(pool)));

    tracing::info!("Stores initialized, assembling router");

    Ok(create_router(app_state, session_layer))
}
