//! Report types produced by the aggregation engine.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// A calendar month key (`YYYY-MM`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// The month containing `date`.
    #[must_use]
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// One point of a daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    pub date: NaiveDate,
    pub count: u64,
}

/// One point of a monthly series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyCount {
    pub month: Month,
    pub count: u64,
}

/// Order count for one city.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CityCount {
    pub city: String,
    pub count: u64,
}

/// Orders per status value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusBreakdown {
    pub pending: u64,
    pub completed: u64,
}

impl StatusBreakdown {
    /// Total pickups across all statuses.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.pending + self.completed
    }
}

/// Everything the sales dashboard renders, derived in one pass from the
/// full order and user history.
///
/// Empty input tables yield empty series here; surfacing the
/// empty-chart warning is the caller's job.
#[derive(Debug, Clone, Serialize)]
pub struct SalesDashboard {
    /// Orders per city.
    pub sales_by_city: Vec<CityCount>,
    /// Orders per month.
    pub monthly_sales: Vec<MonthlyCount>,
    /// Distinct phones per day, zero-filled between first and last date.
    pub daily_active: Vec<DailyCount>,
    /// Distinct phones per month; months without orders are absent.
    pub monthly_active: Vec<MonthlyCount>,
    /// Newly registered users per month (per-month, not cumulative).
    pub new_users: Vec<MonthlyCount>,
    /// Orders per status value.
    pub status_breakdown: StatusBreakdown,
    /// Total pickups on record.
    pub total_pickups: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_display_zero_pads() {
        let month = Month { year: 2024, month: 3 };
        assert_eq!(month.to_string(), "2024-03");
    }

    #[test]
    fn test_month_ordering_is_chronological() {
        let dec = Month { year: 2023, month: 12 };
        let jan = Month { year: 2024, month: 1 };
        assert!(dec < jan);
    }

    #[test]
    fn test_breakdown_total() {
        let breakdown = StatusBreakdown {
            pending: 2,
            completed: 3,
        };
        assert_eq!(breakdown.total(), 5);
    }
}
