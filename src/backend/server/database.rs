/**
 * Database Bootstrap
 *
 * Opens the SQLite pool and creates the `users` and `posts` tables.
 *
 * In-memory databases (`sqlite::memory:`) live only as long as their single
 * connection, so the pool is pinned to one connection that never expires.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Pool size for file-backed databases
const MAX_CONNECTIONS: u32 = 8;

/// Open the pool and make sure the schema exists
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let in_memory = database_url.contains(":memory:");

    let mut options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    if !in_memory {
        options = options.journal_mode(SqliteJournalMode::Wal);
    }

    let pool_options = if in_memory {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await?;
    init_schema(&pool).await?;

    tracing::info!(in_memory, "database ready");
    Ok(pool)
}

/// Create all tables and indexes
///
/// Statements are idempotent, so this runs on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("schema.sql"))
        .execute(pool)
        .await?;
    Ok(())
}
