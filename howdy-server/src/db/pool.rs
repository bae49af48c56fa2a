//! Database connection handling
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is the
//! connection handle: whoever opens it owns it and closes it at exit.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use super::error::DbError;

/// Default maximum connections for the pool.
/// Kept low for single-service use.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Open the user store, verifying the first connection.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns [`DbError::Connection`] when the URL is malformed or the store
/// cannot be reached.
///
/// # Example
///
/// ```ignore
/// let pool = connect("postgres://localhost/howdy").await?;
/// ```
pub async fn connect(database_url: &str) -> Result<PgPool, DbError> {
    connect_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Open the user store with a custom connection limit.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn connect_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, DbError> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
        .map_err(DbError::Connection)
}

/// Build a handle without dialing; the first use connects.
///
/// Liveness problems then surface at begin or query time rather than here.
pub fn connect_lazy(database_url: &str) -> Result<PgPool, DbError> {
    PgPoolOptions::new()
        .max_connections(DEFAULT_MAX_CONNECTIONS)
        .connect_lazy(database_url)
        .map_err(DbError::Connection)
}
