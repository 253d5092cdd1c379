//! User repository for database operations.

use chrono::NaiveDate;
use sqlx::SqlitePool;
use tracing::debug;

use washboard_core::{Email, UserId};

use super::RepositoryError;
use crate::models::User;

/// Internal row type for user queries.
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    email: String,
    registered_on: NaiveDate,
}

impl TryFrom<UserRow> for User {
    type Error = RepositoryError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: UserId::new(row.id),
            username: row.username,
            password_hash: row.password_hash,
            email,
            registered_on: row.registered_on,
        })
    }
}

/// Parameters for inserting a user row.
///
/// The password digest is produced by the auth service; the repository
/// never sees a plaintext password.
#[derive(Debug)]
pub struct NewUserRecord<'r> {
    pub username: &'r str,
    pub password_hash: &'r str,
    pub email: &'r Email,
    pub registered_on: NaiveDate,
}

/// Repository for user database operations.
pub struct UserRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> UserRepository<'a> {
    /// Create a new user repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all users, oldest registration first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<User>, RepositoryError> {
        let rows = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, email, registered_on FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a user by their email address (exact match).
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT id, username, password_hash, email, registered_on FROM users WHERE email = ?1",
        )
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a new user.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, record: NewUserRecord<'_>) -> Result<User, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO users (username, password_hash, email, registered_on)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(record.username)
        .bind(record.password_hash)
        .bind(record.email.as_str())
        .bind(record.registered_on)
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, "Inserted user");

        Ok(User {
            id: UserId::new(id),
            username: record.username.to_owned(),
            password_hash: record.password_hash.to_owned(),
            email: record.email.clone(),
            registered_on: record.registered_on,
        })
    }

    /// Delete a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this id.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: UserId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?1")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(%id, "Deleted user");
        Ok(())
    }
}
