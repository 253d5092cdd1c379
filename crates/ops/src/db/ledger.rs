//! Ledger repository for database operations.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::debug;

use washboard_core::{LedgerEntryId, OrderId};

use super::RepositoryError;
use crate::models::{LedgerEntry, NewLedgerEntry};

/// Internal row type for ledger queries.
#[derive(Debug, sqlx::FromRow)]
struct LedgerEntryRow {
    id: i64,
    customer_id: i64,
    entry_date: NaiveDate,
    description: String,
    amount: String,
}

impl TryFrom<LedgerEntryRow> for LedgerEntry {
    type Error = RepositoryError;

    fn try_from(row: LedgerEntryRow) -> Result<Self, Self::Error> {
        let amount = Decimal::from_str(&row.amount).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid amount in database: {e}"))
        })?;

        Ok(Self {
            id: LedgerEntryId::new(row.id),
            customer_id: OrderId::new(row.customer_id),
            entry_date: row.entry_date,
            description: row.description,
            amount,
        })
    }
}

/// Repository for ledger database operations.
pub struct LedgerRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> LedgerRepository<'a> {
    /// Create a new ledger repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List the ledger entries recorded against a customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_for_customer(
        &self,
        customer_id: OrderId,
    ) -> Result<Vec<LedgerEntry>, RepositoryError> {
        let rows = sqlx::query_as::<_, LedgerEntryRow>(
            r"
            SELECT id, customer_id, entry_date, description, amount
            FROM ledger_entries
            WHERE customer_id = ?1
            ORDER BY id
            ",
        )
        .bind(customer_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a ledger entry by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(
        &self,
        id: LedgerEntryId,
    ) -> Result<Option<LedgerEntry>, RepositoryError> {
        let row = sqlx::query_as::<_, LedgerEntryRow>(
            r"
            SELECT id, customer_id, entry_date, description, amount
            FROM ledger_entries
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Insert a new ledger entry.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, entry: &NewLedgerEntry) -> Result<LedgerEntry, RepositoryError> {
        let result = sqlx::query(
            r"
            INSERT INTO ledger_entries (customer_id, entry_date, description, amount)
            VALUES (?1, ?2, ?3, ?4)
            ",
        )
        .bind(entry.customer_id.as_i64())
        .bind(entry.entry_date)
        .bind(&entry.description)
        .bind(entry.amount.to_string())
        .execute(self.pool)
        .await?;

        let id = result.last_insert_rowid();
        debug!(id, customer = %entry.customer_id, "Inserted ledger entry");

        Ok(LedgerEntry {
            id: LedgerEntryId::new(id),
            customer_id: entry.customer_id,
            entry_date: entry.entry_date,
            description: entry.description.clone(),
            amount: entry.amount,
        })
    }

    /// Delete a ledger entry by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this id.
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: LedgerEntryId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM ledger_entries WHERE id = ?1")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(%id, "Deleted ledger entry");
        Ok(())
    }
}
