//! Connection provider
//!
//! Handlers never hold a pool directly; they ask a [`ConnectionFactory`] for
//! a connection, use it for the statements of one request and let it drop.
//! Pooling stays an implementation detail of the sqlx client.

use std::time::Duration;

use async_trait::async_trait;
use sqlx::pool::PoolConnection;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Postgres};

use super::DbError;

/// Default maximum connections for the pool.
/// Kept low for a single small service.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Matches the sqlx default.
const DEFAULT_ACQUIRE_TIMEOUT: Duration = Duration::from_secs(30);

/// An open connection, returned to the client when dropped.
pub type DbConnection = PoolConnection<Postgres>;

/// Produces ready-to-use connections.
#[async_trait]
pub trait ConnectionFactory: Send + Sync {
    /// Acquire an open connection.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if the store is unreachable or the
    /// credentials are rejected.
    async fn connect(&self) -> Result<DbConnection, DbError>;
}

/// Client tunables for [`PgConnectionFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionOptions {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
}

impl Default for ConnectionOptions {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: DEFAULT_ACQUIRE_TIMEOUT,
        }
    }
}

impl ConnectionOptions {
    fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.max_connections)
            .acquire_timeout(self.acquire_timeout)
    }
}

/// PostgreSQL connection factory built from a connection string.
#[derive(Debug, Clone)]
pub struct PgConnectionFactory {
    pool: PgPool,
}

impl PgConnectionFactory {
    /// Connect to the store, failing fast if it cannot be reached.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if the connection fails.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let factory = PgConnectionFactory::open("postgres://localhost/todoapi", ConnectionOptions::default()).await?;
    /// ```
    pub async fn open(connection_string: &str, options: ConnectionOptions) -> Result<Self, DbError> {
        let pool = options
            .pool_options()
            .connect(connection_string)
            .await
            .map_err(DbError::Connection)?;
        Ok(Self { pool })
    }

    /// Build a factory without connecting; the first [`connect`] call does.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Connection`] if the connection string is malformed.
    ///
    /// [`connect`]: ConnectionFactory::connect
    pub fn lazy(connection_string: &str, options: ConnectionOptions) -> Result<Self, DbError> {
        let pool = options
            .pool_options()
            .connect_lazy(connection_string)
            .map_err(DbError::Connection)?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl ConnectionFactory for PgConnectionFactory {
    async fn connect(&self) -> Result<DbConnection, DbError> {
        self.pool.acquire().await.map_err(DbError::Connection)
    }
}
