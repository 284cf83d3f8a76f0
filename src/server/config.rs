/**
 * Server Configuration
 *
 * Loads the gateway's configuration from the environment and establishes
 * the PostgreSQL connection pool.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - connection string for the backing store; required.
 *   An authentication gateway has no useful degraded mode without its
 *   user store, so a missing or unreachable database is a startup error.
 * - `SERVER_PORT` - listening port; defaults to 3000.
 */

use sqlx::PgPool;

/// Default listening port
const DEFAULT_PORT: u16 = 3000;

/// Environment-derived server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Listening port
    pub port: u16,
}

impl ServerConfig {
    /// Load configuration from the environment
    ///
    /// # Errors
    ///
    /// `DATABASE_URL` missing. An unparsable `SERVER_PORT` falls back to
    /// the default with a warning rather than failing startup.
    pub fn from_env() -> Result<Self, std::env::VarError> {
        let database_url = std::env::var("DATABASE_URL")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw.parse::<u16>().unwrap_or_else(|_| {
                tracing::warn!("Unparsable SERVER_PORT {:?}, using {}", raw, DEFAULT_PORT);
                DEFAULT_PORT
            }),
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self { database_url, port })
    }
}

/// Connect to the database and bring the schema up to date
///
/// Runs the bundled migrations after connecting. A migration failure is
/// logged but does not prevent startup - the schema may already be
/// current from a previous run.
///
/// # Errors
///
/// Connection failure.
pub async fn connect_database(database_url: &str) -> Result<PgPool, sqlx::Error> {
    tracing::info!("Connecting to database...");

    let pool = PgPool::connect(database_url).await?;

    tracing::info!("Database connection pool created");

    tracing::info!("Running database migrations...");
    match sqlx::migrate!().run(&pool).await {
        Ok(()) => tracing::info!("Database migrations completed"),
        Err(e) => {
            tracing::error!("Failed to run database migrations: {}", e);
            tracing::warn!("Continuing without migrations - schema might not be up to date");
        }
    }

    Ok(pool)
}
