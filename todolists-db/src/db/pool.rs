//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::db::migrations;
use crate::error::Result;

/// Default maximum connections for the pool.
/// Kept low for a single web worker.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Create a PostgreSQL connection pool.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with custom options.
///
/// # Arguments
///
/// * `database_url` - PostgreSQL connection string
/// * `max_connections` - Maximum number of connections in the pool
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Connect using resolved configuration and prepare the schema.
///
/// Connection failure is fatal and propagates to the composition root.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = create_pool(&config.database_url).await?;
    migrations::run(&pool).await?;
    Ok(pool)
}

/// Release the underlying connections.
///
/// Call exactly once per [`connect`]; no repository operation is valid
/// on the pool afterwards.
pub async fn disconnect(pool: &PgPool) {
    pool.close().await;
}
