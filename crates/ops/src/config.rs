//! Configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `WASHBOARD_DATABASE_URL` - SQLite connection string
//!   (default: `sqlite://washboard.db`)
//! - `WASHBOARD_EXPORT_PATH` - Destination for CSV exports
//!   (default: `admin_data.csv`)

use std::path::PathBuf;

use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "sqlite://washboard.db";
const DEFAULT_EXPORT_PATH: &str = "admin_data.csv";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Washboard application configuration.
#[derive(Debug, Clone)]
pub struct OpsConfig {
    /// SQLite connection string. A plain file path works too - the store
    /// creates the file if it does not exist.
    pub database_url: String,
    /// Destination for the filtered-view CSV export.
    pub export_path: PathBuf,
}

impl OpsConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEnvVar`] if a variable is present but
    /// not valid Unicode.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = optional_var("WASHBOARD_DATABASE_URL")?
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());
        let export_path = optional_var("WASHBOARD_EXPORT_PATH")?
            .map_or_else(|| PathBuf::from(DEFAULT_EXPORT_PATH), PathBuf::from);

        Ok(Self {
            database_url,
            export_path,
        })
    }
}

impl Default for OpsConfig {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_owned(),
            export_path: PathBuf::from(DEFAULT_EXPORT_PATH),
        }
    }
}

fn optional_var(name: &str) -> Result<Option<String>, ConfigError> {
    match std::env::var(name) {
        Ok(value) => Ok(Some(value)),
        Err(std::env::VarError::NotPresent) => Ok(None),
        Err(std::env::VarError::NotUnicode(_)) => Err(ConfigError::InvalidEnvVar(
            name.to_owned(),
            "not valid unicode".to_owned(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = OpsConfig::default();
        assert_eq!(config.database_url, "sqlite://washboard.db");
        assert_eq!(config.export_path, PathBuf::from("admin_data.csv"));
    }
}
