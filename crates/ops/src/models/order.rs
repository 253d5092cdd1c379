//! Pickup order and order item models.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use washboard_core::{OrderId, OrderItemId, OrderStatus};

/// A customer's laundry pickup request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PickupOrder {
    /// Unique order ID.
    pub id: OrderId,
    /// Customer name.
    pub name: String,
    /// Customer phone number. Also the identity used for activity counts.
    pub phone: String,
    /// Customer contact email (free-form; distinct from dashboard users).
    pub email: String,
    /// Scheduled pickup date.
    pub pickup_date: NaiveDate,
    /// Scheduled pickup time of day.
    pub pickup_time: NaiveTime,
    /// Pending or Completed.
    pub status: OrderStatus,
    /// Street address.
    pub address: String,
    /// City.
    pub city: String,
    /// Postal code.
    pub postal_code: String,
}

/// Input for creating a pickup order.
///
/// The intake form may mark an order Completed on entry; the usual case
/// is Pending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPickupOrder {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub status: OrderStatus,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

/// A line item belonging to a pickup order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    /// Unique item ID.
    pub id: OrderItemId,
    /// Owning pickup order.
    pub pickup_order_id: OrderId,
    /// Item description (e.g., "Shirt").
    pub item_name: String,
    /// Item price.
    pub item_price: Decimal,
}

/// Input for creating an order item alongside its order.
///
/// Always produced in a validated list of (name, price) pairs - never
/// from independently-parsed name and price lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderItem {
    pub item_name: String,
    pub item_price: Decimal,
}

/// One row of the order × item LEFT JOIN used by the filtered admin view
/// and the CSV export.
///
/// An order with no items still yields a single row with empty item
/// columns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    pub id: OrderId,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub pickup_date: NaiveDate,
    pub pickup_time: NaiveTime,
    pub status: OrderStatus,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub item_name: Option<String>,
    pub item_price: Option<Decimal>,
}
