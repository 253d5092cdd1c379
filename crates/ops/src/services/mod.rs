//! Service layer: validation and orchestration over the repositories.
//!
//! Services take already-typed form values, run the validation the
//! dashboard promises (field presence, confirmation match, email policy,
//! existence pre-checks), and only then touch the store. Every rejection
//! is a warning-class error; nothing here panics.

pub mod auth;
pub mod ledger;
pub mod orders;

pub use auth::{AuthError, AuthService, Registration};
pub use ledger::{LedgerError, LedgerService};
pub use orders::{OrderError, OrderService};
