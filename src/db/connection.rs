//! Database connection management
//!
//! Opens SQLite handles for file-backed stores and runs the in-memory
//! connectivity probe.

use std::path::Path;

use rusqlite::Connection;
use thiserror::Error;

/// Database error types
#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("empty filter: refusing to build an unbounded WHERE clause")]
    EmptyFilter,

    #[error("empty assignment set: nothing to update")]
    EmptyAssignments,

    #[error("unknown column `{column}` for table `{table}`")]
    UnknownColumn {
        table: &'static str,
        column: String,
    },

    #[error("table `{table}` takes {expected} insert values, got {got}")]
    ColumnCount {
        table: &'static str,
        expected: usize,
        got: usize,
    },
}

/// Result type for database operations
pub type DbResult<T> = Result<T, DbError>;

/// Open (creating it if absent) a file-backed database.
///
/// Foreign keys are enforced on every handle returned from here; the
/// parent/child references in the schema rely on it.
pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Connection> {
    let conn = Connection::open(path)?;
    conn.execute_batch(
        "PRAGMA foreign_keys = ON;
         PRAGMA journal_mode = WAL;",
    )?;
    Ok(conn)
}

/// Connectivity smoke-test against an ephemeral in-memory store.
///
/// The store is released before this returns, so nothing written to it
/// survives. Returns the SQLite library version for the caller to log.
pub fn probe_in_memory() -> DbResult<String> {
    let conn = Connection::open_in_memory()?;
    let version = rusqlite::version().to_string();
    tracing::info!("in-memory store opened, sqlite {version}");
    drop(conn);
    Ok(version)
}
