//! Customer ledger service.
//!
//! Entries are manually recorded charges/credits against a customer
//! (identified by their pickup order id). No running balance is derived.

use sqlx::SqlitePool;
use tracing::{info, instrument};

use washboard_core::{LedgerEntryId, OrderId};

use crate::db::RepositoryError;
use crate::db::ledger::LedgerRepository;
use crate::db::orders::OrderRepository;
use crate::models::{LedgerEntry, NewLedgerEntry};

/// Errors from ledger operations.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    /// A required field was empty.
    #[error("Please fill in all the fields.")]
    MissingFields,

    /// No ledger entry has the given id.
    #[error("Invalid Ledger ID.")]
    InvalidId,

    /// The customer id doesn't reference an existing pickup order.
    #[error("Unknown customer.")]
    UnknownCustomer,

    /// Underlying store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Customer ledger service.
pub struct LedgerService<'a> {
    ledger: LedgerRepository<'a>,
    orders: OrderRepository<'a>,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            ledger: LedgerRepository::new(pool),
            orders: OrderRepository::new(pool),
        }
    }

    /// Record a new ledger entry.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::MissingFields` if the description is empty.
    /// Returns `LedgerError::UnknownCustomer` if the customer id doesn't
    /// reference an existing pickup order.
    #[instrument(skip(self, entry), fields(customer = %entry.customer_id))]
    pub async fn add(&self, entry: NewLedgerEntry) -> Result<LedgerEntry, LedgerError> {
        if entry.description.trim().is_empty() {
            return Err(LedgerError::MissingFields);
        }

        if self.orders.get_by_id(entry.customer_id).await?.is_none() {
            return Err(LedgerError::UnknownCustomer);
        }

        let created = self.ledger.create(&entry).await?;
        info!(id = %created.id, "Ledger entry added");
        Ok(created)
    }

    /// Remove a ledger entry by id.
    ///
    /// The id is pre-checked; a miss is rejected with "Invalid Ledger ID."
    /// and nothing is deleted.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::InvalidId` if no entry has this id.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: LedgerEntryId) -> Result<(), LedgerError> {
        if self.ledger.get_by_id(id).await?.is_none() {
            return Err(LedgerError::InvalidId);
        }

        match self.ledger.delete(id).await {
            Ok(()) => {
                info!(%id, "Ledger entry removed");
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(LedgerError::InvalidId),
            Err(e) => Err(e.into()),
        }
    }

    /// The ledger for one customer, oldest entry first.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError::Repository` on store failure.
    pub async fn entries_for_customer(
        &self,
        customer_id: OrderId,
    ) -> Result<Vec<LedgerEntry>, LedgerError> {
        Ok(self.ledger.list_for_customer(customer_id).await?)
    }
}
