//! Pickup order service: intake, completion, deletion, filtered view.

use std::str::FromStr;

use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::{info, instrument};

use washboard_core::{OrderId, OrderStatus};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::models::{NewOrderItem, NewPickupOrder, OrderItem, OrderLine, PickupOrder};

/// Errors from order operations.
///
/// All variants except `Repository` are warning-class; their messages are
/// shown to the user as-is.
#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    /// No order has the given id.
    #[error("Invalid Order ID.")]
    NotFound,

    /// The order is already Completed; the transition is one-way.
    #[error("Order already marked as Completed.")]
    AlreadyCompleted,

    /// Item name and price lists have different lengths.
    #[error("Item names and prices do not pair up ({names} names, {prices} prices).")]
    ItemArityMismatch { names: usize, prices: usize },

    /// An item price failed numeric parsing.
    #[error("Invalid item price: {0}")]
    InvalidItemPrice(String),

    /// Underlying store failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Pickup order service.
pub struct OrderService<'a> {
    orders: OrderRepository<'a>,
}

impl<'a> OrderService<'a> {
    /// Create a new order service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
        }
    }

    /// Parse the intake form's comma-separated item name and price lists
    /// into a validated list of (name, price) pairs.
    ///
    /// The two lists must have equal arity and every price must parse as
    /// a decimal; anything else is rejected before a row is written.
    /// Two empty inputs mean an order with no items.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::ItemArityMismatch` on unequal list lengths.
    /// Returns `OrderError::InvalidItemPrice` on a non-numeric price.
    pub fn parse_items(names: &str, prices: &str) -> Result<Vec<NewOrderItem>, OrderError> {
        if names.trim().is_empty() && prices.trim().is_empty() {
            return Ok(Vec::new());
        }

        let name_list: Vec<&str> = names.split(',').map(str::trim).collect();
        let price_list: Vec<&str> = prices.split(',').map(str::trim).collect();

        if name_list.len() != price_list.len() {
            return Err(OrderError::ItemArityMismatch {
                names: name_list.len(),
                prices: price_list.len(),
            });
        }

        name_list
            .into_iter()
            .zip(price_list)
            .map(|(name, price)| {
                let item_price = Decimal::from_str(price)
                    .map_err(|_| OrderError::InvalidItemPrice(price.to_owned()))?;
                Ok(NewOrderItem {
                    item_name: name.to_owned(),
                    item_price,
                })
            })
            .collect()
    }

    /// Record a new pickup order with its items (one atomic write).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` on store failure.
    #[instrument(skip(self, order, items), fields(name = %order.name))]
    pub async fn intake(
        &self,
        order: NewPickupOrder,
        items: Vec<NewOrderItem>,
    ) -> Result<PickupOrder, OrderError> {
        let created = self.orders.create(&order, &items).await?;
        info!(id = %created.id, items = items.len(), "Pickup order recorded");
        Ok(created)
    }

    /// Mark an order Completed.
    ///
    /// The transition is one-way: completing an order that is already
    /// Completed is rejected and the status is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if the id doesn't exist.
    /// Returns `OrderError::AlreadyCompleted` on a repeated completion.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: OrderId) -> Result<(), OrderError> {
        let order = self.orders.get_by_id(id).await?.ok_or(OrderError::NotFound)?;

        if order.status == OrderStatus::Completed {
            return Err(OrderError::AlreadyCompleted);
        }

        match self.orders.set_status(id, OrderStatus::Completed).await {
            Ok(()) => {
                info!(%id, "Order marked Completed");
                Ok(())
            }
            Err(RepositoryError::NotFound) => Err(OrderError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// Delete an order and its items.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::NotFound` if the id doesn't exist.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: OrderId) -> Result<(), OrderError> {
        match self.orders.delete(id).await {
            Ok(()) => Ok(()),
            Err(RepositoryError::NotFound) => Err(OrderError::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    /// All pickup orders (the customer requests table).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` on store failure.
    pub async fn orders(&self) -> Result<Vec<PickupOrder>, OrderError> {
        Ok(self.orders.list_all().await?)
    }

    /// Get one order by id.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` on store failure.
    pub async fn get(&self, id: OrderId) -> Result<Option<PickupOrder>, OrderError> {
        Ok(self.orders.get_by_id(id).await?)
    }

    /// Items belonging to an order.
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` on store failure.
    pub async fn items(&self, id: OrderId) -> Result<Vec<OrderItem>, OrderError> {
        Ok(self.orders.items_for_order(id).await?)
    }

    /// The filtered admin view (`None` = All).
    ///
    /// # Errors
    ///
    /// Returns `OrderError::Repository` on store failure.
    pub async fn filtered_view(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderLine>, OrderError> {
        Ok(self.orders.list_lines(status).await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_pairs_by_index() {
        let items = OrderService::parse_items("Shirt,Pants", "5.00,8.00").unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].item_name, "Shirt");
        assert_eq!(items[0].item_price, Decimal::from_str("5.00").unwrap());
        assert_eq!(items[1].item_name, "Pants");
        assert_eq!(items[1].item_price, Decimal::from_str("8.00").unwrap());
    }

    #[test]
    fn test_parse_items_trims_whitespace() {
        let items = OrderService::parse_items(" Shirt , Pants ", " 5.00 , 8.00 ").unwrap();
        assert_eq!(items[0].item_name, "Shirt");
        assert_eq!(items[1].item_name, "Pants");
    }

    #[test]
    fn test_parse_items_rejects_arity_mismatch() {
        let err = OrderService::parse_items("Shirt,Pants,Towel", "5.00,8.00").unwrap_err();
        assert!(matches!(
            err,
            OrderError::ItemArityMismatch {
                names: 3,
                prices: 2
            }
        ));
    }

    #[test]
    fn test_parse_items_rejects_non_numeric_price() {
        let err = OrderService::parse_items("Shirt", "five").unwrap_err();
        assert!(matches!(err, OrderError::InvalidItemPrice(p) if p == "five"));
    }

    #[test]
    fn test_parse_items_empty_means_no_items() {
        assert!(OrderService::parse_items("", "").unwrap().is_empty());
        assert!(OrderService::parse_items("  ", "").unwrap().is_empty());
    }
}
