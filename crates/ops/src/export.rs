//! Delimited flat-file export of the filtered order view.
//!
//! Writes the same rows the filtered admin table shows to a CSV file on
//! disk. Fields containing the delimiter, quotes, or newlines are quoted
//! with doubled interior quotes.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::models::OrderLine;

/// Errors from the export writer.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// Filesystem failure while writing the export.
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: &str =
    "ID,Name,Phone,Email,Pickup Date,Pickup Time,Status,Address,City,Postal Code,Item Name,Item Price";

/// Write the filtered view to `path` as CSV, overwriting any existing
/// file.
///
/// # Errors
///
/// Returns [`ExportError::Io`] if the file cannot be created or written.
pub fn write_csv(path: &Path, lines: &[OrderLine]) -> Result<(), ExportError> {
    let mut out = BufWriter::new(File::create(path)?);

    writeln!(out, "{HEADER}")?;
    for line in lines {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            line.id,
            escape(&line.name),
            escape(&line.phone),
            escape(&line.email),
            line.pickup_date.format("%Y-%m-%d"),
            line.pickup_time.format("%H:%M:%S"),
            line.status,
            escape(&line.address),
            escape(&line.city),
            escape(&line.postal_code),
            escape(line.item_name.as_deref().unwrap_or("")),
            line.item_price.map(|p| p.to_string()).unwrap_or_default(),
        )?;
    }

    out.flush()?;
    Ok(())
}

/// Quote a field if it contains the delimiter, a quote, or a newline.
fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use rust_decimal::Decimal;
    use std::str::FromStr;
    use washboard_core::{OrderId, OrderStatus};

    use super::*;

    fn line(item: Option<(&str, &str)>) -> OrderLine {
        OrderLine {
            id: OrderId::new(1),
            name: "Alice".to_owned(),
            phone: "555-1111".to_owned(),
            email: "alice@example.com".to_owned(),
            pickup_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            pickup_time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            status: OrderStatus::Pending,
            address: "1 Main St, Apt 2".to_owned(),
            city: "Springfield".to_owned(),
            postal_code: "00000".to_owned(),
            item_name: item.map(|(name, _)| name.to_owned()),
            item_price: item.map(|(_, price)| Decimal::from_str(price).unwrap()),
        }
    }

    #[test]
    fn test_escape_plain_field_unchanged() {
        assert_eq!(escape("Springfield"), "Springfield");
    }

    #[test]
    fn test_escape_quotes_delimiter_and_quote() {
        assert_eq!(escape("1 Main St, Apt 2"), "\"1 Main St, Apt 2\"");
        assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
    }

    #[test]
    fn test_write_csv_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("export.csv");

        write_csv(&path, &[line(Some(("Shirt", "5.00"))), line(None)]).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<&str> = contents.lines().collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], HEADER);
        assert_eq!(
            rows[1],
            "1,Alice,555-1111,alice@example.com,2024-01-05,09:30:00,Pending,\"1 Main St, Apt 2\",Springfield,00000,Shirt,5.00"
        );
        assert!(rows[2].ends_with(",,"));
    }
}
