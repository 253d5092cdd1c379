//! Customer ledger models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use washboard_core::{LedgerEntryId, OrderId};

/// A manually recorded charge or credit against a customer.
///
/// `customer_id` references a pickup order row, which stands in for the
/// customer. Amounts are signed: positive for charges, negative for
/// credits. No running balance is derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Unique entry ID.
    pub id: LedgerEntryId,
    /// Customer (pickup order) the entry is recorded against.
    pub customer_id: OrderId,
    /// Entry date.
    pub entry_date: NaiveDate,
    /// Free-form description.
    pub description: String,
    /// Signed amount.
    pub amount: Decimal,
}

/// Input for creating a ledger entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLedgerEntry {
    pub customer_id: OrderId,
    pub entry_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}
