//! SQLite connection setup. One pool is built at startup and shared by every request.

use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

const MAX_CONNECTIONS: u32 = 5;

fn connect_options(database_url: &str) -> Result<SqliteConnectOptions, AppError> {
    let opts = SqliteConnectOptions::from_str(database_url)?;
    Ok(opts.foreign_keys(true))
}

/// Ensure the database file in `database_url` exists; create it if not.
/// In-memory URLs are left alone. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    if is_memory_url(database_url) {
        return Ok(());
    }
    let opts = connect_options(database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new().max_connections(1).connect_with(opts).await?;
    pool.close().await;
    Ok(())
}

/// Open the shared pool. File databases use WAL so readers do not block the writer.
pub async fn connect(database_url: &str) -> Result<SqlitePool, AppError> {
    let mut opts = connect_options(database_url)?;
    let mut pool_opts = SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS);
    if is_memory_url(database_url) {
        // Every connection to :memory: is its own database; keep exactly one alive.
        pool_opts = pool_opts.max_connections(1).idle_timeout(None).max_lifetime(None);
    } else {
        opts = opts.journal_mode(SqliteJournalMode::Wal);
    }
    tracing::debug!(url = %database_url, "opening sqlite pool");
    Ok(pool_opts.connect_with(opts).await?)
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}
