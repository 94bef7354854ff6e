use super::config::StoreConfig;
use crate::core::Result;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use std::str::FromStr;
use tracing::debug;

/// Open a SQLite connection pool
///
/// File databases run in WAL mode and are created when missing. Writers
/// wait up to `connect_timeout` for the database lock.
pub async fn connect(config: &StoreConfig) -> Result<SqlitePool> {
    config
        .validate()
        .map_err(|msg| sqlx::Error::Configuration(msg.into()))?;

    let mut options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .busy_timeout(config.connect_timeout);
    if !config.is_in_memory() {
        options = options
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal);
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .idle_timeout(config.idle_timeout)
        .max_lifetime(config.max_lifetime)
        .connect_with(options)
        .await?;

    debug!(
        url = %config.url,
        max_connections = config.max_connections,
        "sqlite pool opened"
    );

    Ok(pool)
}
