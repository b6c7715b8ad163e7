//! Canonical inventory types shared by every vendor response parser.
//!
//! ## Observed quantity semantics across distributor endpoints
//!
//! The REST "WebJSON" inventory endpoint reports a missing quantity field as
//! zero stock, while the product-detail and SOAP endpoints omit the field when
//! the warehouse genuinely did not answer. The canonical row keeps both
//! meanings apart: `qty: None` is "unknown/unparseable", `qty: Some(0)` is
//! "known to be out of stock". Parsers must not collapse one into the
//! other; downstream aggregation treats `None` as a zero *contribution*,
//! not a zero *fact*.

use serde::{Deserialize, Serialize};

/// One style + color + size + warehouse observation, as produced by every
/// vendor response parser regardless of source shape.
///
/// Field names serialize in camelCase to match the proxy wire format
/// (`partId`, `warehouseId`, `totalAvailable`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedRow {
    /// Vendor style/product code. Never empty for a valid row.
    pub style: String,
    /// Vendor SKU for this style+color+size combination. Synthesized as
    /// `style-colorCode-size` when the vendor does not supply one.
    pub part_id: String,
    /// Human-readable color name; empty when unknown.
    pub color: String,
    /// Size label as the vendor sent it (`"M"`, `"2XL"`). Case is preserved
    /// here; the aggregator upper-cases when building headers.
    pub size: String,
    pub description: String,
    /// Vendor warehouse code; empty allowed.
    pub warehouse_id: String,
    /// Human-readable warehouse location, resolved from the static ID table
    /// when the vendor supplies only a code.
    pub warehouse: String,
    /// Units available. `None` = unknown, `Some(0)` = known out of stock.
    pub qty: Option<i64>,
    /// Mirrors `qty` at row level; vendor formats do not distinguish
    /// reserved vs. available at this granularity.
    pub total_available: Option<i64>,
    /// Unit price when the vendor response carried one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Price>,
}

/// A vendor price, which arrives either as a JSON number or as a preformatted
/// display string (`"$4.99 - $7.99"`), depending on the endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Price {
    Amount(f64),
    Text(String),
}

impl Price {
    /// Renders the price the way the cross-table displays it: numeric values
    /// with exactly two decimals, strings verbatim.
    #[must_use]
    pub fn display(&self) -> String {
        match self {
            Self::Amount(v) => format!("{v:.2}"),
            Self::Text(s) => s.clone(),
        }
    }
}

/// Wrapper returned by every fetch/parse operation.
///
/// `error` is `true` only when the operation could not produce usable data.
/// A style with rows but all-zero quantities is a valid non-error state:
/// "the vendor told us it's out of stock" is an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryResponse {
    pub rows: Vec<NormalizedRow>,
    #[serde(default)]
    pub error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl InventoryResponse {
    /// Builds a response from parsed rows. An empty row set is an error with
    /// `empty_message` as the diagnostic; a non-empty set is a success.
    #[must_use]
    pub fn from_rows(rows: Vec<NormalizedRow>, empty_message: &str) -> Self {
        let error = rows.is_empty();
        Self {
            rows,
            error,
            message: error.then(|| empty_message.to_owned()),
        }
    }

    /// Builds an error response with no rows.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            rows: Vec::new(),
            error: true,
            message: Some(message.into()),
        }
    }

    /// `true` when this response should stop a fallback chain: a non-error
    /// result with at least one row. All-zero quantities still count.
    #[must_use]
    pub fn is_usable(&self) -> bool {
        !self.error && !self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_row(size: &str, qty: Option<i64>) -> NormalizedRow {
        NormalizedRow {
            style: "64000".to_owned(),
            part_id: "64000-123-M".to_owned(),
            color: "Black".to_owned(),
            size: size.to_owned(),
            description: String::new(),
            warehouse_id: "3".to_owned(),
            warehouse: "Dallas, TX".to_owned(),
            qty,
            total_available: qty,
            price: None,
        }
    }

    #[test]
    fn from_rows_non_empty_is_success() {
        let resp = InventoryResponse::from_rows(vec![make_row("M", Some(5))], "no data");
        assert!(!resp.error);
        assert!(resp.message.is_none());
        assert!(resp.is_usable());
    }

    #[test]
    fn from_rows_empty_is_error_with_message() {
        let resp = InventoryResponse::from_rows(vec![], "No inventory data found");
        assert!(resp.error);
        assert_eq!(resp.message.as_deref(), Some("No inventory data found"));
        assert!(!resp.is_usable());
    }

    #[test]
    fn all_zero_quantities_are_still_usable() {
        let resp = InventoryResponse::from_rows(vec![make_row("M", Some(0))], "no data");
        assert!(resp.is_usable());
    }

    #[test]
    fn failure_is_never_usable() {
        let resp = InventoryResponse::failure("Invalid inventory data structure");
        assert!(resp.error);
        assert!(!resp.is_usable());
    }

    #[test]
    fn price_display_formats_amounts_to_two_decimals() {
        assert_eq!(Price::Amount(4.5).display(), "4.50");
        assert_eq!(Price::Amount(12.0).display(), "12.00");
    }

    #[test]
    fn price_display_passes_strings_through() {
        assert_eq!(Price::Text("$4.99 - $7.99".to_owned()).display(), "$4.99 - $7.99");
    }

    #[test]
    fn row_serializes_with_camel_case_wire_names() {
        let row = make_row("M", Some(5));
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(value["partId"], "64000-123-M");
        assert_eq!(value["warehouseId"], "3");
        assert_eq!(value["totalAvailable"], 5);
        // price omitted entirely when absent
        assert!(value.get("price").is_none());
    }

    #[test]
    fn row_deserializes_null_qty_as_none() {
        let row: NormalizedRow = serde_json::from_value(serde_json::json!({
            "style": "64000",
            "partId": "",
            "color": "",
            "size": "M",
            "description": "",
            "warehouseId": "1",
            "warehouse": "Seattle, WA",
            "qty": null,
            "totalAvailable": null
        }))
        .unwrap();
        assert_eq!(row.qty, None);
        assert_eq!(row.total_available, None);
    }

    #[test]
    fn price_deserializes_from_number_or_string() {
        let n: Price = serde_json::from_value(serde_json::json!(4.99)).unwrap();
        assert_eq!(n, Price::Amount(4.99));
        let s: Price = serde_json::from_value(serde_json::json!("on sale")).unwrap();
        assert_eq!(s, Price::Text("on sale".to_owned()));
    }
}
