//! Persistence layer for the scribe wiki backend.
//!
//! Models mirror table rows, repositories are zero-sized structs providing
//! async CRUD over `&PgPool`, and the higher-level modules compose them:
//! [`lifecycle`] for transactional create/update/cascading-delete,
//! [`permissions`] for visibility resolution, and [`cache`] for the
//! read-through project metadata cache.

pub mod cache;
pub mod error;
pub mod lifecycle;
pub mod models;
pub mod permissions;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply any pending migrations from the workspace `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../migrations").run(pool).await
}
