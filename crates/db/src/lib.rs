//! Postgres access for the Acrely notification service.
//!
//! This service reads the platform's existing `users` and `property`
//! tables to enrich webhook events; it owns no schema of its own, so there
//! are no migrations here. Exposes pool construction, a health check, the
//! row [`models`], and the [`repositories`] that query them.

pub mod models;
pub mod repositories;

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Alias so downstream crates do not name sqlx types directly.
pub type DbPool = PgPool;

/// Maximum connections in the pool.
const MAX_CONNECTIONS: u32 = 10;

/// How long to wait for a connection before failing.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a connection pool against the platform database.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial round-trip query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
