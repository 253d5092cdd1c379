//! Domain models for the Washboard store.

pub mod ledger;
pub mod order;
pub mod user;

pub use ledger::{LedgerEntry, NewLedgerEntry};
pub use order::{NewOrderItem, NewPickupOrder, OrderItem, OrderLine, PickupOrder};
pub use user::User;
