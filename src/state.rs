//! Application state for taskboard

use std::time::Duration;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::auth::TokenService;
use crate::config::Config;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const MAX_CONNECT_ATTEMPTS: u32 = 10;
const MAX_BACKOFF: Duration = Duration::from_secs(10);

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL connection pool
    pub pool: PgPool,
    /// JWT issue/verify service, built once from the startup secret
    pub tokens: TokenService,
}

impl AppState {
    /// Create a new AppState: connect, then run idempotent migrations
    pub async fn new(config: &Config) -> Result<Self, BoxError> {
        let pool = connect_with_backoff(&config.database_url).await?;

        sqlx::migrate!("./migrations").run(&pool).await?;
        tracing::info!("Database schema ready");

        Ok(Self {
            pool,
            tokens: TokenService::new(&config.jwt_secret, config.token_ttl_minutes),
        })
    }
}

/// Connect to PostgreSQL with bounded exponential backoff.
///
/// The database may come up after the service (container orchestration),
/// so transient startup failures are retried with a doubling delay. The
/// attempt count is bounded: if the store never becomes reachable the
/// process exits instead of spinning forever.
async fn connect_with_backoff(database_url: &str) -> Result<PgPool, sqlx::Error> {
    let mut delay = Duration::from_millis(500);
    let mut attempt = 1u32;

    loop {
        match PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await
        {
            Ok(pool) => return Ok(pool),
            Err(e) if attempt < MAX_CONNECT_ATTEMPTS => {
                tracing::warn!(
                    attempt,
                    error = %e,
                    "Database not ready, retrying in {delay:?}"
                );
                tokio::time::sleep(delay).await;
                delay = (delay * 2).min(MAX_BACKOFF);
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}
