//! Integration tests for the customer ledger.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use washboard_core::{LedgerEntryId, OrderId};
use washboard_integration_tests::{order_form, test_store};
use washboard_ops::models::NewLedgerEntry;
use washboard_ops::services::{LedgerError, LedgerService, OrderService};

fn entry(customer_id: OrderId, description: &str, amount: &str) -> NewLedgerEntry {
    NewLedgerEntry {
        customer_id,
        entry_date: NaiveDate::from_ymd_opt(2024, 1, 12).unwrap(),
        description: description.to_owned(),
        amount: Decimal::from_str(amount).unwrap(),
    }
}

#[tokio::test]
async fn add_and_list_entries_for_a_customer() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);
    let ledger = LedgerService::new(&store.pool);

    let customer = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();

    ledger
        .add(entry(customer.id, "Dry cleaning", "12.50"))
        .await
        .unwrap();
    ledger
        .add(entry(customer.id, "Refund", "-4.00"))
        .await
        .unwrap();

    let entries = ledger.entries_for_customer(customer.id).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].description, "Dry cleaning");
    assert_eq!(entries[1].amount, Decimal::from_str("-4.00").unwrap());
}

#[tokio::test]
async fn remove_by_unknown_id_deletes_nothing() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);
    let ledger = LedgerService::new(&store.pool);

    let customer = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();
    ledger
        .add(entry(customer.id, "Dry cleaning", "12.50"))
        .await
        .unwrap();

    let err = ledger
        .remove(LedgerEntryId::new(999))
        .await
        .expect_err("unknown id must be rejected");
    assert!(matches!(err, LedgerError::InvalidId));
    assert_eq!(err.to_string(), "Invalid Ledger ID.");

    // The existing entry is untouched.
    let entries = ledger.entries_for_customer(customer.id).await.unwrap();
    assert_eq!(entries.len(), 1);
}

#[tokio::test]
async fn remove_existing_entry() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);
    let ledger = LedgerService::new(&store.pool);

    let customer = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();
    let created = ledger
        .add(entry(customer.id, "Dry cleaning", "12.50"))
        .await
        .unwrap();

    ledger.remove(created.id).await.unwrap();
    assert!(
        ledger
            .entries_for_customer(customer.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn empty_description_writes_nothing() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);
    let ledger = LedgerService::new(&store.pool);

    let customer = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();

    let err = ledger
        .add(entry(customer.id, "   ", "12.50"))
        .await
        .expect_err("blank description must be rejected");
    assert!(matches!(err, LedgerError::MissingFields));

    assert!(
        ledger
            .entries_for_customer(customer.id)
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn unknown_customer_is_rejected() {
    let store = test_store().await;
    let ledger = LedgerService::new(&store.pool);

    let err = ledger
        .add(entry(OrderId::new(404), "Dry cleaning", "12.50"))
        .await
        .expect_err("unknown customer must be rejected");
    assert!(matches!(err, LedgerError::UnknownCustomer));
}

#[tokio::test]
async fn deleting_the_order_cascades_to_its_ledger() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);
    let ledger = LedgerService::new(&store.pool);

    let customer = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();
    ledger
        .add(entry(customer.id, "Dry cleaning", "12.50"))
        .await
        .unwrap();

    orders.delete(customer.id).await.unwrap();

    assert!(
        ledger
            .entries_for_customer(customer.id)
            .await
            .unwrap()
            .is_empty()
    );
}
