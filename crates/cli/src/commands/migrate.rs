//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! washboard migrate
//! ```
//!
//! The schema is create-if-absent: running against an existing database
//! is a no-op for already-applied migrations.

/// Run migrations against the configured store.
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let (_config, pool) = super::open_store().await?;

    tracing::info!("Migrations complete");
    pool.close().await;
    Ok(())
}
