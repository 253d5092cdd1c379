//! Sales dashboard report command.
//!
//! Prints the aggregated metrics the dashboard charts are built from,
//! and optionally exports the filtered order view to a CSV file.

use std::path::PathBuf;
use std::str::FromStr;

use washboard_core::OrderStatus;
use washboard_ops::analytics::AnalyticsService;
use washboard_ops::error::AppError;
use washboard_ops::export;
use washboard_ops::services::OrderService;

/// Print the dashboard; export the filtered view if requested.
pub async fn run(
    status: Option<String>,
    export_path: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let (config, pool) = super::open_store().await?;

    let status_filter = match status.as_deref() {
        None => None,
        Some(raw) => match OrderStatus::from_str(raw) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                tracing::warn!("{e}; showing all orders");
                None
            }
        },
    };

    let analytics = AnalyticsService::new(&pool);
    let dashboard = analytics
        .sales_dashboard()
        .await
        .map_err(AppError::from)?;

    println!("Total Pickups: {}", dashboard.total_pickups);
    println!(
        "Status: {} Pending / {} Completed",
        dashboard.status_breakdown.pending, dashboard.status_breakdown.completed
    );

    if dashboard.sales_by_city.is_empty() {
        tracing::warn!("No pickup data available.");
    } else {
        println!("\nSales by City");
        for point in &dashboard.sales_by_city {
            println!("  {:<20} {}", point.city, point.count);
        }

        println!("\nMonthly Sales");
        for point in &dashboard.monthly_sales {
            println!("  {} {}", point.month, point.count);
        }

        println!("\nDAU (distinct phones per day, gaps zero-filled)");
        for point in &dashboard.daily_active {
            println!("  {} {}", point.date, point.count);
        }

        println!("\nMAU (distinct phones per month)");
        for point in &dashboard.monthly_active {
            println!("  {} {}", point.month, point.count);
        }
    }

    if dashboard.new_users.is_empty() {
        tracing::warn!("No registered users available.");
    } else {
        println!("\nNew Users per Month");
        for point in &dashboard.new_users {
            println!("  {} {}", point.month, point.count);
        }
    }

    if export_path.is_some() || status_filter.is_some() {
        let orders = OrderService::new(&pool);
        let lines = orders
            .filtered_view(status_filter)
            .await
            .map_err(AppError::from)?;
        let path = export_path.unwrap_or(config.export_path);

        export::write_csv(&path, &lines).map_err(AppError::from)?;
        println!("\nExported {} rows to {}", lines.len(), path.display());
    }

    pool.close().await;
    Ok(())
}
