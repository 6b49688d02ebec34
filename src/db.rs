use anyhow::Result;
use kondate_shared::State;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::{ConnectOptions, SqlitePool};
use std::{str::FromStr, time::Duration};
use tracing::log::LevelFilter;

use crate::config::DatabaseConfig;

/// How a pool opens the database file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    /// Creates the file when missing. Used by migrations.
    Create,
    ReadWrite,
    ReadOnly,
}

/// Opens a pool in WAL mode. Pragmas are set per connection so every
/// connection the pool opens later gets them too.
pub async fn connect(url: &str, access: Access, max_connections: u32) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(url)?
        .create_if_missing(access == Access::Create)
        .read_only(access == Access::ReadOnly)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(Duration::from_secs(5))
        .pragma("temp_store", "memory")
        .log_statements(LevelFilter::Debug);

    let pool = SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await?;

    tracing::debug!(?access, max_connections, "database pool opened");

    Ok(pool)
}

/// Every write goes through the single write connection, reads use their own pool.
/// The write pool opens first so the journal mode is switched before read-only
/// connections attach.
pub async fn create_state(config: &DatabaseConfig) -> Result<State> {
    let write_db = connect(&config.url, Access::ReadWrite, 1).await?;
    let read_db = connect(&config.url, Access::ReadOnly, config.max_connections).await?;

    Ok(State { read_db, write_db })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_connect_applies_pragmas() {
        let pool = connect(":memory:", Access::Create, 1).await.unwrap();

        let temp_store: (i32,) = sqlx::query_as("PRAGMA temp_store")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(temp_store.0, 2);

        let synchronous: (i32,) = sqlx::query_as("PRAGMA synchronous")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(synchronous.0, 1);
    }

    #[tokio::test]
    async fn test_create_state_uses_wal() {
        let dir = temp_dir::TempDir::new().unwrap();
        let url = format!("sqlite:{}", dir.child("db.sqlite3").display());
        connect(&url, Access::Create, 1).await.unwrap().close().await;

        let state = create_state(&DatabaseConfig {
            url,
            max_connections: 2,
        })
        .await
        .unwrap();

        let journal_mode: (String,) = sqlx::query_as("PRAGMA journal_mode")
            .fetch_one(&state.read_db)
            .await
            .unwrap();
        assert_eq!(journal_mode.0, "wal");

        let err = sqlx::query("CREATE TABLE t (id INTEGER)")
            .execute(&state.read_db)
            .await;
        assert!(err.is_err());
    }
}
