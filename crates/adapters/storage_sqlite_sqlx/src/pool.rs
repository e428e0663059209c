//! `SQLite` connection pool setup and schema bootstrap.

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::SqliteConnectOptions;

use crate::error::StorageError;

/// Table layout for [`Cafe`](cafehub_domain::cafe::Cafe).
///
/// Created on startup when absent. Length caps are declared for
/// documentation; `SQLite` does not enforce them.
const SCHEMA: &str = r"
    CREATE TABLE IF NOT EXISTS cafe (
        id INTEGER NOT NULL PRIMARY KEY,
        name VARCHAR(250) NOT NULL UNIQUE,
        map_url VARCHAR(500) NOT NULL,
        img_url VARCHAR(500) NOT NULL,
        location VARCHAR(250) NOT NULL,
        seats VARCHAR(250) NOT NULL,
        has_toilet BOOLEAN NOT NULL,
        has_wifi BOOLEAN NOT NULL,
        has_sockets BOOLEAN NOT NULL,
        can_take_calls BOOLEAN NOT NULL,
        coffee_price VARCHAR(250)
    )
";

/// Configuration for the `SQLite` storage adapter.
pub struct Config {
    /// `SQLite` connection URL (e.g. `sqlite:cafes.db` or `sqlite::memory:`).
    pub database_url: String,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Creates the connection pool, creates the database file if missing,
    /// and creates the `cafe` table if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection or schema setup fails.
    pub async fn build(self) -> Result<Database, StorageError> {
        Database::initialize(&self.database_url).await
    }
}

/// Holds the `SQLite` connection pool and provides access to it.
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    async fn initialize(database_url: &str) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

        let pool = SqlitePool::connect_with(options).await?;

        sqlx::query(SCHEMA).execute(&pool).await?;
        tracing::debug!(database_url, "cafe table ready");

        Ok(Self { pool })
    }

    /// Borrow the underlying connection pool.
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
