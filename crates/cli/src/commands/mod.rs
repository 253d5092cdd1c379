//! CLI command implementations.

pub mod migrate;
pub mod report;
pub mod users;

use washboard_ops::config::OpsConfig;
use washboard_ops::db;

/// Load configuration, open the store, and run migrations.
///
/// Every command goes through this: the schema is create-if-absent on
/// startup.
pub async fn open_store()
-> Result<(OpsConfig, sqlx::SqlitePool), Box<dyn std::error::Error>> {
    let config = OpsConfig::from_env()?;

    tracing::debug!(url = %config.database_url, "Connecting to store");
    let pool = db::create_pool(&config.database_url).await?;
    db::migrate(&pool).await?;

    Ok((config, pool))
}
