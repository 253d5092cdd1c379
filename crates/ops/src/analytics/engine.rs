//! Pure aggregation functions over the full order/user history.
//!
//! Every function is a plain group-by over in-memory slices: the store
//! hands over the whole table and the dashboard recomputes from scratch
//! on each render. Phone numbers stand in for customer identity in the
//! activity counts.

use std::collections::{BTreeMap, HashSet};

use washboard_core::OrderStatus;

use super::report::{CityCount, DailyCount, Month, MonthlyCount, SalesDashboard, StatusBreakdown};
use crate::models::{PickupOrder, User};

/// Distinct active customers (phones) per day.
///
/// The series is reindexed to a continuous daily calendar: one entry per
/// day between the first and last order date inclusive, with days that
/// saw no orders carried as zero rather than omitted.
#[must_use]
pub fn daily_active_counts(orders: &[PickupOrder]) -> Vec<DailyCount> {
    let mut phones_by_date: BTreeMap<_, HashSet<&str>> = BTreeMap::new();
    for order in orders {
        phones_by_date
            .entry(order.pickup_date)
            .or_default()
            .insert(order.phone.as_str());
    }

    let (Some(&first), Some(&last)) = (
        phones_by_date.keys().next(),
        phones_by_date.keys().next_back(),
    ) else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut day = first;
    loop {
        let count = phones_by_date.get(&day).map_or(0, HashSet::len) as u64;
        series.push(DailyCount { date: day, count });

        if day >= last {
            break;
        }
        match day.succ_opt() {
            Some(next) => day = next,
            None => break,
        }
    }
    series
}

/// Distinct active customers (phones) per month.
///
/// Unlike the daily series, months without any orders are simply absent;
/// there is no gap-filling here.
#[must_use]
pub fn monthly_active_counts(orders: &[PickupOrder]) -> Vec<MonthlyCount> {
    let mut phones_by_month: BTreeMap<Month, HashSet<&str>> = BTreeMap::new();
    for order in orders {
        phones_by_month
            .entry(Month::of(order.pickup_date))
            .or_default()
            .insert(order.phone.as_str());
    }

    phones_by_month
        .into_iter()
        .map(|(month, phones)| MonthlyCount {
            month,
            count: phones.len() as u64,
        })
        .collect()
}

/// Order rows per month (every order counts, not distinct customers).
#[must_use]
pub fn monthly_sales_counts(orders: &[PickupOrder]) -> Vec<MonthlyCount> {
    let mut rows_by_month: BTreeMap<Month, u64> = BTreeMap::new();
    for order in orders {
        *rows_by_month.entry(Month::of(order.pickup_date)).or_default() += 1;
    }

    rows_by_month
        .into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

/// Order rows per city, alphabetical.
#[must_use]
pub fn sales_by_city(orders: &[PickupOrder]) -> Vec<CityCount> {
    let mut rows_by_city: BTreeMap<&str, u64> = BTreeMap::new();
    for order in orders {
        *rows_by_city.entry(order.city.as_str()).or_default() += 1;
    }

    rows_by_city
        .into_iter()
        .map(|(city, count)| CityCount {
            city: city.to_owned(),
            count,
        })
        .collect()
}

/// Newly registered users per registration month (per-month counts, not
/// a cumulative series).
#[must_use]
pub fn new_user_counts(users: &[User]) -> Vec<MonthlyCount> {
    let mut rows_by_month: BTreeMap<Month, u64> = BTreeMap::new();
    for user in users {
        *rows_by_month.entry(Month::of(user.registered_on)).or_default() += 1;
    }

    rows_by_month
        .into_iter()
        .map(|(month, count)| MonthlyCount { month, count })
        .collect()
}

/// Order count per status value.
#[must_use]
pub fn status_breakdown(orders: &[PickupOrder]) -> StatusBreakdown {
    let mut breakdown = StatusBreakdown::default();
    for order in orders {
        match order.status {
            OrderStatus::Pending => breakdown.pending += 1,
            OrderStatus::Completed => breakdown.completed += 1,
        }
    }
    breakdown
}

/// Derive the whole sales dashboard from the full history.
#[must_use]
pub fn build_dashboard(orders: &[PickupOrder], users: &[User]) -> SalesDashboard {
    SalesDashboard {
        sales_by_city: sales_by_city(orders),
        monthly_sales: monthly_sales_counts(orders),
        daily_active: daily_active_counts(orders),
        monthly_active: monthly_active_counts(orders),
        new_users: new_user_counts(users),
        status_breakdown: status_breakdown(orders),
        total_pickups: orders.len() as u64,
    }
}
