//! Shared helpers for Washboard integration tests.
//!
//! Each test opens its own file-backed SQLite store in a temp directory,
//! runs the embedded migrations, and drops the directory afterwards.

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::expect_used)]

use chrono::{NaiveDate, NaiveTime};
use sqlx::SqlitePool;
use washboard_core::OrderStatus;
use washboard_ops::db;
use washboard_ops::models::NewPickupOrder;

/// A migrated store backed by a temp directory.
///
/// Keep the struct alive for as long as the pool is in use; dropping it
/// removes the directory.
pub struct TestStore {
    pub pool: SqlitePool,
    _dir: tempfile::TempDir,
}

/// Open a fresh, migrated store.
///
/// # Panics
///
/// Panics if the temp directory or database cannot be set up.
pub async fn test_store() -> TestStore {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("washboard-test.db");
    let url = format!("sqlite://{}", path.display());

    let pool = db::create_pool(&url).await.expect("create pool");
    db::migrate(&pool).await.expect("run migrations");

    TestStore { pool, _dir: dir }
}

/// A pickup order input with sane defaults for tests.
///
/// # Panics
///
/// Panics if `pickup_date` is not `YYYY-MM-DD`.
#[must_use]
pub fn order_form(name: &str, phone: &str, pickup_date: &str) -> NewPickupOrder {
    NewPickupOrder {
        name: name.to_owned(),
        phone: phone.to_owned(),
        email: format!("{}@example.com", name.to_lowercase()),
        pickup_date: pickup_date.parse::<NaiveDate>().expect("valid date"),
        pickup_time: NaiveTime::from_hms_opt(10, 30, 0).expect("valid time"),
        status: OrderStatus::Pending,
        address: "1 Main St".to_owned(),
        city: "Springfield".to_owned(),
        postal_code: "00000".to_owned(),
    }
}
