//! Database operations for the Washboard SQLite store.
//!
//! # Tables
//!
//! - `pickup_orders` - Customer pickup requests
//! - `order_items` - Line items belonging to a pickup order
//! - `users` - Registered dashboard users
//! - `ledger_entries` - Per-customer charges and credits
//!
//! # Migrations
//!
//! Migrations live in `crates/ops/migrations/` and are embedded at compile
//! time. [`migrate`] runs them with create-if-absent semantics; call it
//! right after [`create_pool`] on startup, or via:
//! ```bash
//! cargo run -p washboard-cli -- migrate
//! ```

pub mod ledger;
pub mod orders;
pub mod users;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use thiserror::Error;

pub use ledger::LedgerRepository;
pub use orders::OrderRepository;
pub use users::UserRepository;

/// Embedded migrations for the four-table schema.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., dangling foreign key).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a SQLite connection pool.
///
/// The database file is created if it does not exist, and foreign key
/// enforcement is switched on so the schema-level cascades apply. The
/// pool is capped at a single connection: the dashboard is a single
/// interactive session and the store keeps the original one-shared-
/// connection discipline, now with an explicit injected handle.
///
/// # Arguments
///
/// * `database_url` - SQLite connection string (`sqlite://path.db`) or a
///   plain filesystem path
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is malformed or the connection cannot
/// be established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(1)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Run the embedded migrations (create-if-absent schema).
///
/// # Errors
///
/// Returns `sqlx::migrate::MigrateError` if a migration fails to apply.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}
