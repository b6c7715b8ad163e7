use super::*;
use crate::types::Price;

fn make_row(color: &str, size: &str, warehouse: &str, qty: Option<i64>) -> NormalizedRow {
    NormalizedRow {
        style: "64000".to_owned(),
        part_id: format!("64000-{color}-{size}"),
        color: color.to_owned(),
        size: size.to_owned(),
        description: String::new(),
        warehouse_id: String::new(),
        warehouse: warehouse.to_owned(),
        qty,
        total_available: qty,
        price: None,
    }
}

fn priced(mut row: NormalizedRow, price: Price) -> NormalizedRow {
    row.price = Some(price);
    row
}

#[test]
fn empty_input_yields_empty_table() {
    let table = format_inventory_table(&[], None);
    assert!(table.headers.is_empty());
    assert!(table.warehouses.is_empty());
    assert!(table.data.is_empty());
    assert!(table.totals.is_empty());
    assert!(table.pricing.is_empty());
}

#[test]
fn headers_are_upper_cased_and_size_sorted() {
    let rows = vec![
        make_row("Black", "2XL", "Dallas, TX", Some(1)),
        make_row("Black", "s", "Dallas, TX", Some(2)),
        make_row("Black", "XL", "Dallas, TX", Some(3)),
        make_row("Black", "m", "Dallas, TX", Some(4)),
        make_row("Black", "3XL", "Dallas, TX", Some(5)),
    ];
    let table = format_inventory_table(&rows, None);
    assert_eq!(table.headers, vec!["S", "M", "XL", "2XL", "3XL"]);
}

#[test]
fn known_warehouses_keep_priority_order_unknown_alphabetical_after() {
    let rows = vec![
        make_row("Black", "M", "Seattle, WA", Some(1)),
        make_row("Black", "M", "Zanesville, OH", Some(1)),
        make_row("Black", "M", "Dallas, TX", Some(1)),
        make_row("Black", "M", "Akron, OH", Some(1)),
    ];
    let table = format_inventory_table(&rows, None);
    assert_eq!(
        table.warehouses,
        vec!["Dallas, TX", "Seattle, WA", "Akron, OH", "Zanesville, OH"]
    );
}

#[test]
fn matrix_is_dense_with_zero_defaults() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        make_row("Black", "M", "Seattle, WA", Some(7)),
    ];
    let table = format_inventory_table(&rows, None);
    for warehouse in &table.warehouses {
        for size in &table.headers {
            assert!(
                table.data[warehouse].contains_key(size),
                "missing cell ({warehouse}, {size})"
            );
        }
    }
    assert_eq!(table.data["Dallas, TX"]["M"], 0);
    assert_eq!(table.data["Seattle, WA"]["S"], 0);
}

#[test]
fn totals_equal_column_sums() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        make_row("Black", "S", "Seattle, WA", Some(3)),
        make_row("Black", "M", "Dallas, TX", Some(2)),
    ];
    let table = format_inventory_table(&rows, None);
    for size in &table.headers {
        let column_sum: i64 = table.warehouses.iter().map(|w| table.data[w][size]).sum();
        assert_eq!(table.totals[size], column_sum, "totals mismatch for {size}");
    }
}

#[test]
fn null_qty_contributes_zero_not_a_gap() {
    let rows = vec![make_row("Black", "S", "Dallas, TX", None)];
    let table = format_inventory_table(&rows, None);
    assert_eq!(table.data["Dallas, TX"]["S"], 0);
    assert_eq!(table.totals["S"], 0);
}

#[test]
fn duplicate_cells_last_write_wins_but_totals_sum_all() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        make_row("Black", "S", "Dallas, TX", Some(3)),
    ];
    let table = format_inventory_table(&rows, None);
    // cell shows the last row's quantity; the total counts both rows
    assert_eq!(table.data["Dallas, TX"]["S"], 3);
    assert_eq!(table.totals["S"], 8);
}

#[test]
fn aggregation_is_idempotent() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        make_row("Red", "M", "Seattle, WA", Some(2)),
    ];
    let first = format_inventory_table(&rows, Some("Black"));
    let second = format_inventory_table(&rows, Some("Black"));
    assert_eq!(first, second);
}

#[test]
fn color_filter_keeps_exact_matches_only() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        make_row("Black Heather", "M", "Dallas, TX", Some(9)),
    ];
    let table = format_inventory_table(&rows, Some("Black"));
    assert_eq!(table.headers, vec!["S"]);
    assert_eq!(table.totals["S"], 5);
}

#[test]
fn color_filter_all_sentinel_keeps_everything() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        make_row("Red", "M", "Dallas, TX", Some(2)),
    ];
    let table = format_inventory_table(&rows, Some("all"));
    assert_eq!(table.headers, vec!["S", "M"]);
}

#[test]
fn color_filter_with_no_matches_is_empty_not_error() {
    let rows = vec![make_row("Black", "S", "Dallas, TX", Some(5))];
    let table = format_inventory_table(&rows, Some("Chartreuse"));
    assert!(table.headers.is_empty());
    assert!(table.warehouses.is_empty());
}

#[test]
fn rows_without_size_or_warehouse_are_skipped_in_matrix() {
    let rows = vec![
        make_row("Black", "", "Dallas, TX", Some(5)),
        make_row("Black", "S", "", Some(7)),
        make_row("Black", "S", "Dallas, TX", Some(1)),
    ];
    let table = format_inventory_table(&rows, None);
    assert_eq!(table.headers, vec!["S"]);
    assert_eq!(table.warehouses, vec!["Dallas, TX"]);
    assert_eq!(table.totals["S"], 1);
}

#[test]
fn pricing_formats_amounts_and_keeps_strings() {
    let rows = vec![
        priced(make_row("Black", "S", "Dallas, TX", Some(5)), Price::Amount(4.5)),
        priced(
            make_row("Black", "M", "Dallas, TX", Some(2)),
            Price::Text("$5.99 - $6.99".to_owned()),
        ),
    ];
    let table = format_inventory_table(&rows, None);
    assert_eq!(table.pricing["S"], "4.50");
    assert_eq!(table.pricing["M"], "$5.99 - $6.99");
}

#[test]
fn pricing_last_row_wins() {
    let rows = vec![
        priced(make_row("Black", "S", "Dallas, TX", Some(5)), Price::Amount(4.5)),
        priced(make_row("Black", "S", "Seattle, WA", Some(2)), Price::Amount(4.75)),
    ];
    let table = format_inventory_table(&rows, None);
    assert_eq!(table.pricing["S"], "4.75");
}

#[test]
fn pricing_applies_even_when_warehouse_is_empty() {
    let rows = vec![
        make_row("Black", "S", "Dallas, TX", Some(5)),
        priced(make_row("Black", "S", "", None), Price::Amount(3.25)),
    ];
    let table = format_inventory_table(&rows, None);
    assert_eq!(table.pricing["S"], "3.25");
    // the priced row still contributed nothing to the matrix
    assert_eq!(table.totals["S"], 5);
}
