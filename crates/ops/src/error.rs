//! Unified error handling for the operations library.
//!
//! Every failure falls into one of two classes:
//!
//! - **warning-class** - validation failures, id/email lookup misses, and
//!   uniqueness conflicts. These are surfaced to the user as a warning;
//!   the operation is aborted with no partial write.
//! - **internal-class** - store/IO faults. The user sees a generic
//!   message; the detail goes to the log.
//!
//! Nothing here terminates the process, and no operation is retried.

use thiserror::Error;

use crate::config::ConfigError;
use crate::db::RepositoryError;
use crate::export::ExportError;
use crate::services::{AuthError, LedgerError, OrderError};

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Registration/deregistration failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Order operation failed.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// Ledger operation failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Store failure outside any service flow.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Export write failed.
    #[error(transparent)]
    Export(#[from] ExportError),

    /// Configuration failure at startup.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl AppError {
    /// Whether this error is a user-facing warning (validation failure,
    /// lookup miss, uniqueness conflict) rather than an internal fault.
    #[must_use]
    pub const fn is_warning(&self) -> bool {
        match self {
            Self::Auth(err) => !matches!(err, AuthError::Repository(_)),
            Self::Order(err) => !matches!(err, OrderError::Repository(_)),
            Self::Ledger(err) => !matches!(err, LedgerError::Repository(_)),
            Self::Repository(_) | Self::Export(_) | Self::Config(_) => false,
        }
    }

    /// The message to show the user. Warning-class errors speak for
    /// themselves; internal faults are not exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        if self.is_warning() {
            self.to_string()
        } else {
            "Internal error".to_owned()
        }
    }
}

/// Result type alias for [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;
