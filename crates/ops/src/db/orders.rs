//! Pickup order repository for database operations.
//!
//! Orders and their items are written together: intake inserts the order
//! row and every item row in one transaction, and delete removes the item
//! rows explicitly in the same transaction as the order row, so the store
//! stays consistent whether or not the schema-level cascade fires.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use sqlx::SqlitePool;
use tracing::{debug, instrument};

use washboard_core::{OrderId, OrderItemId, OrderStatus};

use super::RepositoryError;
use crate::models::{NewOrderItem, NewPickupOrder, OrderItem, OrderLine, PickupOrder};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for pickup order queries.
#[derive(Debug, sqlx::FromRow)]
struct PickupOrderRow {
    id: i64,
    name: String,
    phone: String,
    email: String,
    pickup_date: NaiveDate,
    pickup_time: NaiveTime,
    status: String,
    address: String,
    city: String,
    postal_code: String,
}

impl TryFrom<PickupOrderRow> for PickupOrder {
    type Error = RepositoryError;

    fn try_from(row: PickupOrderRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_str(&row.status)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid status in database: {e}")))?;

        Ok(Self {
            id: OrderId::new(row.id),
            name: row.name,
            phone: row.phone,
            email: row.email,
            pickup_date: row.pickup_date,
            pickup_time: row.pickup_time,
            status,
            address: row.address,
            city: row.city,
            postal_code: row.postal_code,
        })
    }
}

/// Internal row type for order item queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    id: i64,
    pickup_order_id: i64,
    item_name: String,
    item_price: String,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        let item_price = Decimal::from_str(&row.item_price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid item price in database: {e}"))
        })?;

        Ok(Self {
            id: OrderItemId::new(row.id),
            pickup_order_id: OrderId::new(row.pickup_order_id),
            item_name: row.item_name,
            item_price,
        })
    }
}

/// Internal row type for the order × item LEFT JOIN.
#[derive(Debug, sqlx::FromRow)]
struct OrderLineRow {
    id: i64,
    name: String,
    phone: String,
    email: String,
    pickup_date: NaiveDate,
    pickup_time: NaiveTime,
    status: String,
    address: String,
    city: String,
    postal_code: String,
    item_name: Option<String>,
    item_price: Option<String>,
}

impl TryFrom<OrderLineRow> for OrderLine {
    type Error = RepositoryError;

    fn try_from(row: OrderLineRow) -> Result<Self, Self::Error> {
        let status = OrderStatus::from_str(&row.status)
            .map_err(|e| RepositoryError::DataCorruption(format!("invalid status in database: {e}")))?;

        let item_price = row
            .item_price
            .map(|p| {
                Decimal::from_str(&p).map_err(|e| {
                    RepositoryError::DataCorruption(format!("invalid item price in database: {e}"))
                })
            })
            .transpose()?;

        Ok(Self {
            id: OrderId::new(row.id),
            name: row.name,
            phone: row.phone,
            email: row.email,
            pickup_date: row.pickup_date,
            pickup_time: row.pickup_time,
            status,
            address: row.address,
            city: row.city,
            postal_code: row.postal_code,
            item_name: row.item_name,
            item_price,
        })
    }
}

const ORDER_COLUMNS: &str =
    "id, name, phone, email, pickup_date, pickup_time, status, address, city, postal_code";

// =============================================================================
// Repository
// =============================================================================

/// Repository for pickup order database operations.
pub struct OrderRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a pickup order together with its items, atomically.
    ///
    /// Either the order row and every item row land, or nothing does - a
    /// crash mid-insert can no longer leave an order with partial items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if any insert fails.
    #[instrument(skip(self, order, items), fields(name = %order.name, items = items.len()))]
    pub async fn create(
        &self,
        order: &NewPickupOrder,
        items: &[NewOrderItem],
    ) -> Result<PickupOrder, RepositoryError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"
            INSERT INTO pickup_orders
                (name, phone, email, pickup_date, pickup_time, status, address, city, postal_code)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            ",
        )
        .bind(&order.name)
        .bind(&order.phone)
        .bind(&order.email)
        .bind(order.pickup_date)
        .bind(order.pickup_time)
        .bind(order.status.as_str())
        .bind(&order.address)
        .bind(&order.city)
        .bind(&order.postal_code)
        .execute(&mut *tx)
        .await?;

        let order_id = result.last_insert_rowid();

        for item in items {
            sqlx::query(
                r"
                INSERT INTO order_items (pickup_order_id, item_name, item_price)
                VALUES (?1, ?2, ?3)
                ",
            )
            .bind(order_id)
            .bind(&item.item_name)
            .bind(item.item_price.to_string())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;

        debug!(id = order_id, "Inserted pickup order");

        Ok(PickupOrder {
            id: OrderId::new(order_id),
            name: order.name.clone(),
            phone: order.phone.clone(),
            email: order.email.clone(),
            pickup_date: order.pickup_date,
            pickup_time: order.pickup_time,
            status: order.status,
            address: order.address.clone(),
            city: order.city.clone(),
            postal_code: order.postal_code.clone(),
        })
    }

    /// List all pickup orders, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_all(&self) -> Result<Vec<PickupOrder>, RepositoryError> {
        let rows = sqlx::query_as::<_, PickupOrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM pickup_orders ORDER BY id"
        ))
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Get a pickup order by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn get_by_id(&self, id: OrderId) -> Result<Option<PickupOrder>, RepositoryError> {
        let row = sqlx::query_as::<_, PickupOrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM pickup_orders WHERE id = ?1"
        ))
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// List the items belonging to an order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn items_for_order(&self, id: OrderId) -> Result<Vec<OrderItem>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderItemRow>(
            r"
            SELECT id, pickup_order_id, item_name, item_price
            FROM order_items
            WHERE pickup_order_id = ?1
            ORDER BY id
            ",
        )
        .bind(id.as_i64())
        .fetch_all(self.pool)
        .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// The order × item LEFT JOIN behind the filtered admin view.
    ///
    /// `status = None` means no filter ("All"). Orders without items
    /// still appear, with empty item columns.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the data is invalid.
    pub async fn list_lines(
        &self,
        status: Option<OrderStatus>,
    ) -> Result<Vec<OrderLine>, RepositoryError> {
        let rows = if let Some(status) = status {
            sqlx::query_as::<_, OrderLineRow>(
                r"
                SELECT p.id, p.name, p.phone, p.email, p.pickup_date, p.pickup_time,
                       p.status, p.address, p.city, p.postal_code,
                       o.item_name, o.item_price
                FROM pickup_orders p
                LEFT JOIN order_items o ON p.id = o.pickup_order_id
                WHERE p.status = ?1
                ORDER BY p.id, o.id
                ",
            )
            .bind(status.as_str())
            .fetch_all(self.pool)
            .await?
        } else {
            sqlx::query_as::<_, OrderLineRow>(
                r"
                SELECT p.id, p.name, p.phone, p.email, p.pickup_date, p.pickup_time,
                       p.status, p.address, p.city, p.postal_code,
                       o.item_name, o.item_price
                FROM pickup_orders p
                LEFT JOIN order_items o ON p.id = o.pickup_order_id
                ORDER BY p.id, o.id
                ",
            )
            .fetch_all(self.pool)
            .await?
        };

        rows.into_iter().map(TryInto::try_into).collect()
    }

    /// Set an order's status.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this id.
    /// Returns `RepositoryError::Database` if the update fails.
    pub async fn set_status(
        &self,
        id: OrderId,
        status: OrderStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query("UPDATE pickup_orders SET status = ?1 WHERE id = ?2")
            .bind(status.as_str())
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        debug!(%id, %status, "Updated order status");
        Ok(())
    }

    /// Delete an order and its items, atomically.
    ///
    /// Items are deleted explicitly alongside the order row; ledger rows
    /// referencing the order fall to the schema-level cascade.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no row has this id.
    /// Returns `RepositoryError::Database` if a delete fails.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: OrderId) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM order_items WHERE pickup_order_id = ?1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        let result = sqlx::query("DELETE FROM pickup_orders WHERE id = ?1")
            .bind(id.as_i64())
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        tx.commit().await?;

        debug!(%id, "Deleted pickup order");
        Ok(())
    }
}
