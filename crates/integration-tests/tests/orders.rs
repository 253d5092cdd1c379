//! Integration tests for pickup order intake, completion, and deletion.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use std::str::FromStr;

use rust_decimal::Decimal;
use washboard_core::{OrderId, OrderStatus};
use washboard_integration_tests::{order_form, test_store};
use washboard_ops::services::{OrderError, OrderService};

#[tokio::test]
async fn intake_creates_paired_items_referencing_the_order() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let items = OrderService::parse_items("Shirt,Pants", "5.00,8.00").unwrap();
    let created = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), items)
        .await
        .unwrap();

    let stored = orders.items(created.id).await.unwrap();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|i| i.pickup_order_id == created.id));
    assert_eq!(stored[0].item_name, "Shirt");
    assert_eq!(stored[0].item_price, Decimal::from_str("5.00").unwrap());
    assert_eq!(stored[1].item_name, "Pants");
    assert_eq!(stored[1].item_price, Decimal::from_str("8.00").unwrap());
}

#[tokio::test]
async fn arity_mismatch_writes_no_order() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let err = OrderService::parse_items("Shirt,Pants", "5.00").unwrap_err();
    assert!(matches!(err, OrderError::ItemArityMismatch { .. }));

    assert!(orders.orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_leaves_no_items_behind() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let items = OrderService::parse_items("Shirt,Pants", "5.00,8.00").unwrap();
    let created = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), items)
        .await
        .unwrap();

    orders.delete(created.id).await.unwrap();

    assert!(orders.get(created.id).await.unwrap().is_none());
    assert!(orders.items(created.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unknown_order_is_a_warning() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let err = orders
        .delete(OrderId::new(999))
        .await
        .expect_err("unknown id must be rejected");
    assert!(matches!(err, OrderError::NotFound));
    assert_eq!(err.to_string(), "Invalid Order ID.");
}

#[tokio::test]
async fn completion_is_one_way() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let created = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();

    orders.complete(created.id).await.unwrap();
    let completed = orders.get(created.id).await.unwrap().unwrap();
    assert_eq!(completed.status, OrderStatus::Completed);

    // Completing again is rejected and the status is unchanged.
    let err = orders
        .complete(created.id)
        .await
        .expect_err("second completion must be rejected");
    assert!(matches!(err, OrderError::AlreadyCompleted));

    let unchanged = orders.get(created.id).await.unwrap().unwrap();
    assert_eq!(unchanged.status, OrderStatus::Completed);
}

#[tokio::test]
async fn complete_unknown_order_is_a_warning() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let err = orders
        .complete(OrderId::new(42))
        .await
        .expect_err("unknown id must be rejected");
    assert!(matches!(err, OrderError::NotFound));
}

#[tokio::test]
async fn filtered_view_respects_status_and_keeps_itemless_orders() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let items = OrderService::parse_items("Shirt", "5.00").unwrap();
    let pending = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), items)
        .await
        .unwrap();

    let done = orders
        .intake(order_form("Bob", "555-2222", "2024-01-06"), Vec::new())
        .await
        .unwrap();
    orders.complete(done.id).await.unwrap();

    let all = orders.filtered_view(None).await.unwrap();
    assert_eq!(all.len(), 2);

    let pending_lines = orders
        .filtered_view(Some(OrderStatus::Pending))
        .await
        .unwrap();
    assert_eq!(pending_lines.len(), 1);
    assert_eq!(pending_lines[0].id, pending.id);
    assert_eq!(pending_lines[0].item_name.as_deref(), Some("Shirt"));

    let completed_lines = orders
        .filtered_view(Some(OrderStatus::Completed))
        .await
        .unwrap();
    assert_eq!(completed_lines.len(), 1);
    assert_eq!(completed_lines[0].id, done.id);
    // Item-less orders still appear, with empty item columns.
    assert!(completed_lines[0].item_name.is_none());
    assert!(completed_lines[0].item_price.is_none());
}

#[tokio::test]
async fn intake_with_no_items_is_atomic_and_item_free() {
    let store = test_store().await;
    let orders = OrderService::new(&store.pool);

    let created = orders
        .intake(order_form("Alice", "555-1111", "2024-01-05"), Vec::new())
        .await
        .unwrap();

    assert!(orders.items(created.id).await.unwrap().is_empty());
    assert_eq!(orders.orders().await.unwrap().len(), 1);
}
