//! Registration and deregistration service.
//!
//! Registration validates in the order the dashboard promises: field
//! presence, password confirmation, email structure, then email
//! uniqueness (a logic-level lookup - the schema carries no UNIQUE
//! constraint). Passwords are stored as a one-way SHA-256 hex digest,
//! never as plaintext.

use chrono::NaiveDate;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use tracing::{info, instrument};

use washboard_core::{Email, EmailError};

use crate::db::RepositoryError;
use crate::db::users::{NewUserRecord, UserRepository};
use crate::models::User;

/// Errors from registration/deregistration.
///
/// The messages are the user-visible warnings; all variants except
/// `Repository` are warning-class.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// A required field was empty.
    #[error("Please enter a username, password, and email.")]
    MissingFields,

    /// Password and confirmation differ.
    #[error("Passwords do not match. Please re-enter the password correctly.")]
    PasswordMismatch,

    /// Email failed structural validation.
    #[error("Invalid email address. Please enter a valid email.")]
    InvalidEmail(#[source] EmailError),

    /// Email is already registered.
    #[error("Email address is already registered. Please use a different email address.")]
    AlreadyRegistered,

    /// No user matches the given email.
    #[error("User not found.")]
    UserNotFound,

    /// Underlying store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// A registration form submission.
#[derive(Debug, Clone)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub email: String,
    pub registered_on: NaiveDate,
}

/// Registration/deregistration service.
pub struct AuthService<'a> {
    users: UserRepository<'a>,
}

impl<'a> AuthService<'a> {
    /// Create a new auth service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    /// Register a new user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::MissingFields` if any field is empty.
    /// Returns `AuthError::PasswordMismatch` if the confirmation differs.
    /// Returns `AuthError::InvalidEmail` if the email is malformed.
    /// Returns `AuthError::AlreadyRegistered` if the email is taken.
    #[instrument(skip(self, form), fields(email = %form.email))]
    pub async fn register(&self, form: &Registration) -> Result<User, AuthError> {
        if form.username.is_empty()
            || form.password.is_empty()
            || form.confirm_password.is_empty()
            || form.email.is_empty()
        {
            return Err(AuthError::MissingFields);
        }

        if form.password != form.confirm_password {
            return Err(AuthError::PasswordMismatch);
        }

        let email = Email::parse(&form.email).map_err(AuthError::InvalidEmail)?;

        if self.users.get_by_email(email.as_str()).await?.is_some() {
            return Err(AuthError::AlreadyRegistered);
        }

        let password_hash = hash_password(&form.password);

        let user = self
            .users
            .create(NewUserRecord {
                username: &form.username,
                password_hash: &password_hash,
                email: &email,
                registered_on: form.registered_on,
            })
            .await?;

        info!(id = %user.id, "Registered user");
        Ok(user)
    }

    /// Look up a user by exact email match.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on store failure.
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthError> {
        Ok(self.users.get_by_email(email).await?)
    }

    /// Deregister the user with this exact email.
    ///
    /// Returns the removed user's record. Historical pickup orders are
    /// untouched - no foreign key ties them to the user.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::UserNotFound` if no user matches.
    #[instrument(skip(self))]
    pub async fn deregister(&self, email: &str) -> Result<User, AuthError> {
        let user = self
            .users
            .get_by_email(email)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        self.users.delete(user.id).await?;

        info!(id = %user.id, "Deregistered user");
        Ok(user)
    }

    /// List all registered users (the admin "registered users" toggle).
    ///
    /// # Errors
    ///
    /// Returns `AuthError::Repository` on store failure.
    pub async fn registered_users(&self) -> Result<Vec<User>, AuthError> {
        Ok(self.users.list_all().await?)
    }
}

/// One-way password digest: a single fixed-function SHA-256, hex-encoded.
fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_never_equals_plaintext() {
        let hash = hash_password("hunter2");
        assert_ne!(hash, "hunter2");
    }

    #[test]
    fn test_hash_is_hex_sha256() {
        let hash = hash_password("hunter2");
        assert_eq!(hash.len(), 64);
        assert!(hash.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_hash_is_deterministic() {
        assert_eq!(hash_password("abc"), hash_password("abc"));
        assert_ne!(hash_password("abc"), hash_password("abd"));
    }
}
