//! Sales/usage analytics.
//!
//! [`engine`] holds the pure aggregation functions; [`report`] the series
//! and dashboard types they produce. [`AnalyticsService`] is the thin
//! orchestration on top: fetch the full order and user history, derive
//! everything in memory. There is no caching or incremental computation -
//! each dashboard render is a fresh full-table scan, which is the
//! supported scale.

pub mod engine;
pub mod report;

use sqlx::SqlitePool;

pub use report::{CityCount, DailyCount, Month, MonthlyCount, SalesDashboard, StatusBreakdown};

use crate::db::RepositoryError;
use crate::db::orders::OrderRepository;
use crate::db::users::UserRepository;

/// Derives dashboard reports from the store.
pub struct AnalyticsService<'a> {
    orders: OrderRepository<'a>,
    users: UserRepository<'a>,
}

impl<'a> AnalyticsService<'a> {
    /// Create a new analytics service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            orders: OrderRepository::new(pool),
            users: UserRepository::new(pool),
        }
    }

    /// Build the full sales dashboard from current history.
    ///
    /// Empty tables produce empty series, never an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` if a table fetch fails.
    pub async fn sales_dashboard(&self) -> Result<SalesDashboard, RepositoryError> {
        let orders = self.orders.list_all().await?;
        let users = self.users.list_all().await?;
        Ok(engine::build_dashboard(&orders, &users))
    }
}
