//! Database connection helpers.
//!
//! This module provides a small wrapper around the Diesel connection pool and
//! the lazily initialised [`Database`] handle shared by every request. The
//! pool is established on first use and reused for the lifetime of the
//! process; a failed attempt is not remembered, so the next call tries again.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use diesel::connection::SimpleConnection;
use diesel::define_sql_function;
use diesel::r2d2::{ConnectionManager, CustomizeConnection, Pool, PoolError, PooledConnection};
use diesel::sql_types::Text;
use diesel::sqlite::SqliteConnection;
use log::{error, info};

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;
pub type DbConnection = PooledConnection<ConnectionManager<SqliteConnection>>;

/// How long pool construction waits for a working connection.
pub const DEFAULT_CONNECTION_TIMEOUT: Duration = Duration::from_secs(5);

define_sql_function! {
    /// Unicode-aware lowercasing. SQLite's built-in `lower` folds ASCII only.
    fn unicode_lower(x: Text) -> Text;
}

#[derive(Debug)]
/// Options that are applied each time a connection is acquired from the pool.
pub struct ConnectionOptions {
    /// Enable Write Ahead Logging mode for SQLite.
    pub enable_wal: bool,
    /// Timeout to wait for a locked database.
    pub busy_timeout: Option<Duration>,
}

impl CustomizeConnection<SqliteConnection, diesel::r2d2::Error> for ConnectionOptions {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), diesel::r2d2::Error> {
        (|| {
            unicode_lower_utils::register_impl(conn, |value: String| value.to_lowercase())?;
            if let Some(d) = self.busy_timeout {
                conn.batch_execute(&format!("PRAGMA busy_timeout = {};", d.as_millis()))?;
            }
            if self.enable_wal {
                conn.batch_execute("PRAGMA journal_mode = WAL; PRAGMA synchronous = NORMAL;")?;
            }
            Ok(())
        })()
        .map_err(diesel::r2d2::Error::QueryError)
    }
}

/// Create a Diesel connection pool for the given database URL.
pub fn establish_connection_pool(
    database_url: &str,
    connection_timeout: Duration,
) -> Result<DbPool, PoolError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    Pool::builder()
        .connection_timeout(connection_timeout)
        .connection_customizer(Box::new(ConnectionOptions {
            enable_wal: true,
            busy_timeout: Some(Duration::from_secs(30)),
        }))
        .build(manager)
}

/// Retrieve a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, PoolError> {
    match pool.get() {
        Ok(conn) => Ok(conn),
        Err(e) => {
            error!("Failed to get connection from pool: {e}");
            Err(e)
        }
    }
}

/// Process-wide handle to the company store.
///
/// Holds the connection string and, once [`Database::connect`] succeeds, the
/// pool built from it.
pub struct Database {
    database_url: String,
    connection_timeout: Duration,
    pool: Mutex<Option<DbPool>>,
}

impl Database {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            pool: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn with_connection_timeout(mut self, timeout: Duration) -> Self {
        self.connection_timeout = timeout;
        self
    }

    /// Wraps an already established pool.
    pub fn from_pool(pool: DbPool) -> Self {
        Self {
            database_url: String::new(),
            connection_timeout: DEFAULT_CONNECTION_TIMEOUT,
            pool: Mutex::new(Some(pool)),
        }
    }

    /// Returns the shared pool, establishing it on the first successful call.
    ///
    /// Concurrent callers serialize on the slot so at most one pool is ever
    /// built. Errors are returned as-is and leave the slot empty.
    pub fn connect(&self) -> Result<DbPool, PoolError> {
        let mut slot = self.pool.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(pool) = slot.as_ref() {
            return Ok(pool.clone());
        }

        match establish_connection_pool(&self.database_url, self.connection_timeout) {
            Ok(pool) => {
                info!("Database connection pool established");
                *slot = Some(pool.clone());
                Ok(pool)
            }
            Err(e) => {
                error!("Failed to establish database connection: {e}");
                Err(e)
            }
        }
    }

    #[cfg(test)]
    fn is_connected(&self) -> bool {
        self.pool
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }
}
