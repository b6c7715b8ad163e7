//! CSV rendering of the pivoted inventory matrix.
//!
//! The artifact layout is fixed: header row, pricing row, one row per
//! warehouse, totals row, every line `\n`-terminated. Fields are
//! comma-joined without quoting or escaping: warehouse names like
//! `"Dallas, TX"` are emitted verbatim, matching what the spreadsheet
//! consumers of this export already expect. A conforming CSV writer would
//! quote those commas, so this module builds the string by hand instead of
//! using one.

use crate::pivot::FormattedInventoryTable;

/// Serializes a [`FormattedInventoryTable`] to the CSV artifact.
///
/// Row layout:
/// 1. empty corner cell, then the size headers;
/// 2. `Price ($)` row, `-` for sizes without a price;
/// 3. one row per warehouse in table order, `0` for empty cells;
/// 4. `Total` row.
#[must_use]
pub fn export_csv(table: &FormattedInventoryTable) -> String {
    let mut csv = String::new();

    csv.push(',');
    csv.push_str(&table.headers.join(","));
    csv.push('\n');

    csv.push_str("Price ($),");
    let prices: Vec<&str> = table
        .headers
        .iter()
        .map(|size| table.pricing.get(size).map_or("-", String::as_str))
        .collect();
    csv.push_str(&prices.join(","));
    csv.push('\n');

    for warehouse in &table.warehouses {
        csv.push_str(warehouse);
        csv.push(',');
        let cells: Vec<String> = table
            .headers
            .iter()
            .map(|size| {
                table
                    .data
                    .get(warehouse)
                    .and_then(|row| row.get(size))
                    .copied()
                    .unwrap_or(0)
                    .to_string()
            })
            .collect();
        csv.push_str(&cells.join(","));
        csv.push('\n');
    }

    csv.push_str("Total,");
    let totals: Vec<String> = table
        .headers
        .iter()
        .map(|size| table.totals.get(size).copied().unwrap_or(0).to_string())
        .collect();
    csv.push_str(&totals.join(","));
    csv.push('\n');

    csv
}

/// Download filename for the CSV artifact: `inventory-{label}.csv`, with
/// `export` standing in when no product label is available.
#[must_use]
pub fn csv_filename(product_label: Option<&str>) -> String {
    let label = match product_label {
        Some(label) if !label.is_empty() => label,
        _ => "export",
    };
    format!("inventory-{label}.csv")
}
