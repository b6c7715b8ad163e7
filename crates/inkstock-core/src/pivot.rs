//! Cross-table aggregation: canonical rows → warehouse × size matrix.

use std::collections::HashMap;

use serde::Serialize;

use crate::sizes::compare_sizes;
use crate::types::NormalizedRow;
use crate::warehouses::WAREHOUSE_DISPLAY_ORDER;

/// The pivoted inventory matrix consumed by table display and CSV export.
///
/// `headers` and `warehouses` carry the display order; `data`, `totals` and
/// `pricing` are keyed lookups. The matrix is dense: every
/// `(warehouse, size)` pair from `warehouses × headers` has an entry, `0`
/// when no row supplied a quantity for that cell.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FormattedInventoryTable {
    /// De-duplicated, size-sorted, upper-cased sizes.
    pub headers: Vec<String>,
    /// De-duplicated warehouse names in display order.
    pub warehouses: Vec<String>,
    /// warehouse → size → quantity.
    pub data: HashMap<String, HashMap<String, i64>>,
    /// size → column sum across all warehouses.
    pub totals: HashMap<String, i64>,
    /// size → display price.
    pub pricing: HashMap<String, String>,
}

/// Pivots normalized rows into a [`FormattedInventoryTable`], optionally
/// filtered to one color.
///
/// `color_filter` of `None` or `Some("all")` keeps every row; any other
/// value keeps only rows whose color matches exactly. An empty surviving row
/// set yields the all-empty table (valid filter with no matches is not an
/// error).
///
/// Two deliberate policies, kept from the observed proxy behavior:
///
/// - **Cells are last-write-wins.** When duplicate warehouse+size rows
///   occur, the row appearing last in traversal order overwrites the cell.
/// - **Totals sum every row.** Column totals accumulate all surviving rows
///   regardless of cell overwrites, so a total can exceed any displayed
///   cell for duplicated pairs.
///
/// A row with `qty: None` contributes `0` to both.
#[must_use]
pub fn format_inventory_table(
    rows: &[NormalizedRow],
    color_filter: Option<&str>,
) -> FormattedInventoryTable {
    let filtered: Vec<&NormalizedRow> = match color_filter {
        Some(color) if color != "all" => rows.iter().filter(|r| r.color == color).collect(),
        _ => rows.iter().collect(),
    };

    let mut headers: Vec<String> = Vec::new();
    let mut warehouses: Vec<String> = Vec::new();
    for row in &filtered {
        if !row.size.is_empty() {
            let size = row.size.to_uppercase();
            if !headers.contains(&size) {
                headers.push(size);
            }
        }
        if !row.warehouse.is_empty() && !warehouses.contains(&row.warehouse) {
            warehouses.push(row.warehouse.clone());
        }
    }
    headers.sort_by(|a, b| compare_sizes(a, b));

    // Known warehouses first in fixed priority order, then the rest
    // alphabetically.
    let mut ordered: Vec<String> = WAREHOUSE_DISPLAY_ORDER
        .iter()
        .filter(|known| warehouses.iter().any(|w| w == **known))
        .map(|known| (*known).to_owned())
        .collect();
    let mut unknown: Vec<String> = warehouses
        .iter()
        .filter(|w| !WAREHOUSE_DISPLAY_ORDER.contains(&w.as_str()))
        .cloned()
        .collect();
    unknown.sort();
    ordered.extend(unknown);
    let warehouses = ordered;

    let mut data: HashMap<String, HashMap<String, i64>> = HashMap::new();
    let mut totals: HashMap<String, i64> = HashMap::new();
    let mut pricing: HashMap<String, String> = HashMap::new();

    for size in &headers {
        totals.insert(size.clone(), 0);
    }
    for warehouse in &warehouses {
        let cells = data.entry(warehouse.clone()).or_default();
        for size in &headers {
            cells.insert(size.clone(), 0);
        }
    }

    for row in &filtered {
        let size = row.size.to_uppercase();
        let qty = row.qty.unwrap_or(0);

        if !size.is_empty() && !row.warehouse.is_empty() {
            data.entry(row.warehouse.clone())
                .or_default()
                .insert(size.clone(), qty);
            *totals.entry(size.clone()).or_insert(0) += qty;
        }

        // Pricing needs only a size, not a warehouse; last row wins.
        if !size.is_empty() {
            if let Some(price) = &row.price {
                pricing.insert(size, price.display());
            }
        }
    }

    FormattedInventoryTable {
        headers,
        warehouses,
        data,
        totals,
        pricing,
    }
}

#[cfg(test)]
#[path = "pivot_test.rs"]
mod tests;
