//! Parsers for the distributor's REST "WebJSON" inventory shapes.
//!
//! ## Observed shapes from the live endpoints
//!
//! The search-driven inventory endpoint nests four levels deep:
//! `items[].inventoryItems[].warehouseInventory[].inventoryBySize[]`, one
//! leaf per item × color × warehouse × size. Identity fields repeat across
//! levels with inconsistent placement (`styleCode` vs. `style`, `partId`
//! and `colorName` on either the item or the inventory item), so every
//! field deserializes as optional and the fallback order is applied during
//! normalization.
//!
//! The single-product detail endpoint returns a flatter
//! `data.colors[].sizes[].warehouses[]` tree.
//!
//! ## Absent-quantity semantics differ between the two, on purpose
//!
//! The nested endpoint omits `qtyAvailable` for cells it knows are empty, so
//! an absent field means `0`. The detail endpoint omits the quantity when the
//! warehouse did not answer, so an absent field stays `None` ("unknown").
//! These must not be unified; the divergence is pinned by tests.

use inkstock_core::{resolve_warehouse, InventoryResponse, NormalizedRow, Price};
use serde::Deserialize;
use serde_json::Value;

use crate::doc::coerce_qty;

// ---------------------------------------------------------------------------
// Nested search-driven shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WebJsonItem {
    style_code: Option<String>,
    style: Option<String>,
    part_id: Option<String>,
    color_name: Option<String>,
    description: Option<String>,
    price: Option<Price>,
    inventory_items: Vec<WebJsonInventoryItem>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WebJsonInventoryItem {
    part_id: Option<String>,
    color_name: Option<String>,
    warehouse_inventory: Vec<WebJsonWarehouseInventory>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WebJsonWarehouseInventory {
    /// Warehouse code; arrives as a string or a number depending on the
    /// endpoint revision.
    warehouse_no: Option<Value>,
    warehouse: Option<String>,
    inventory_by_size: Vec<WebJsonSizeInventory>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WebJsonSizeInventory {
    size: Option<String>,
    qty_available: Option<Value>,
}

/// Renders a string-or-number code field to a plain string.
fn code_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) => n.to_string(),
        _ => String::new(),
    }
}

/// Parses the nested `items[]` WebJSON inventory document into canonical rows.
///
/// Absent or unparseable quantities become `Some(0)`: this endpoint reports
/// known-empty cells by omission.
///
/// Never panics; a document without an `items` array yields an error
/// response, as does a structurally valid document with zero leaf rows.
#[must_use]
pub fn parse_webjson_inventory(document: &Value) -> InventoryResponse {
    let Some(items) = document.get("items").and_then(Value::as_array) else {
        return InventoryResponse::failure("Invalid inventory data structure");
    };

    let mut rows = Vec::new();
    for item_value in items {
        let item: WebJsonItem = match serde_json::from_value(item_value.clone()) {
            Ok(item) => item,
            Err(err) => {
                return InventoryResponse::failure(format!(
                    "Error formatting inventory data: {err}"
                ));
            }
        };

        let style = item
            .style_code
            .or(item.style)
            .unwrap_or_default();

        for inv_item in &item.inventory_items {
            let part_id = item
                .part_id
                .clone()
                .or_else(|| inv_item.part_id.clone())
                .unwrap_or_default();
            let color = item
                .color_name
                .clone()
                .or_else(|| inv_item.color_name.clone())
                .unwrap_or_default();

            for wh_inv in &inv_item.warehouse_inventory {
                let warehouse_id = code_text(wh_inv.warehouse_no.as_ref());
                let warehouse = match &wh_inv.warehouse {
                    Some(name) if !name.is_empty() => name.clone(),
                    _ if !warehouse_id.is_empty() => resolve_warehouse(&warehouse_id, None),
                    _ => String::new(),
                };

                for size_inv in &wh_inv.inventory_by_size {
                    let qty = size_inv
                        .qty_available
                        .as_ref()
                        .and_then(coerce_qty)
                        .unwrap_or(0);
                    rows.push(NormalizedRow {
                        style: style.clone(),
                        part_id: part_id.clone(),
                        color: color.clone(),
                        size: size_inv.size.clone().unwrap_or_default(),
                        description: item.description.clone().unwrap_or_default(),
                        warehouse_id: warehouse_id.clone(),
                        warehouse: warehouse.clone(),
                        qty: Some(qty),
                        total_available: Some(qty),
                        price: item.price.clone(),
                    });
                }
            }
        }
    }

    InventoryResponse::from_rows(rows, "No inventory data found")
}

// ---------------------------------------------------------------------------
// Flat product-detail shape
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DetailProduct {
    style_code: Option<String>,
    style: Option<String>,
    name: Option<String>,
    price: Option<Price>,
    colors: Option<Vec<DetailColor>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DetailColor {
    color_name: Option<String>,
    name: Option<String>,
    color_code: Option<String>,
    sizes: Vec<DetailSize>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DetailSize {
    size: Option<String>,
    part_id: Option<String>,
    price: Option<Price>,
    warehouses: Vec<DetailWarehouse>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct DetailWarehouse {
    warehouse_no: Option<Value>,
    warehouse: Option<String>,
    qty_available: Option<Value>,
}

/// Parses the flat `data.colors[]` product-detail document into canonical
/// rows.
///
/// Quantities go through an explicit integer conversion; an absent or
/// unparseable field stays `None` rather than collapsing to `0`. Part ids
/// are synthesized as `style-colorCode-size` when the vendor omits them.
#[must_use]
pub fn parse_detail_inventory(document: &Value) -> InventoryResponse {
    let Some(data) = document.get("data") else {
        return InventoryResponse::failure("Invalid inventory data structure");
    };
    let product: DetailProduct = match serde_json::from_value(data.clone()) {
        Ok(product) => product,
        Err(err) => {
            return InventoryResponse::failure(format!("Error formatting inventory data: {err}"));
        }
    };
    let Some(colors) = product.colors else {
        return InventoryResponse::failure("Invalid inventory data structure");
    };

    let style = product
        .style_code
        .or(product.style)
        .unwrap_or_default();
    let description = product.name.unwrap_or_default();

    let mut rows = Vec::new();
    for color in &colors {
        let color_name = color
            .color_name
            .clone()
            .or_else(|| color.name.clone())
            .unwrap_or_default();
        let color_code = color.color_code.clone().unwrap_or_else(|| color_name.clone());

        for size_entry in &color.sizes {
            let size = size_entry.size.clone().unwrap_or_default();
            let part_id = size_entry
                .part_id
                .clone()
                .unwrap_or_else(|| format!("{style}-{color_code}-{size}"));
            let price = size_entry.price.clone().or_else(|| product.price.clone());

            for warehouse_entry in &size_entry.warehouses {
                let warehouse_id = code_text(warehouse_entry.warehouse_no.as_ref());
                let warehouse = match &warehouse_entry.warehouse {
                    Some(name) if !name.is_empty() => name.clone(),
                    _ if !warehouse_id.is_empty() => resolve_warehouse(&warehouse_id, None),
                    _ => String::new(),
                };
                let qty = warehouse_entry.qty_available.as_ref().and_then(coerce_qty);

                rows.push(NormalizedRow {
                    style: style.clone(),
                    part_id: part_id.clone(),
                    color: color_name.clone(),
                    size: size.clone(),
                    description: description.clone(),
                    warehouse_id: warehouse_id.clone(),
                    warehouse: warehouse.clone(),
                    qty,
                    total_available: qty,
                    price: price.clone(),
                });
            }
        }
    }

    InventoryResponse::from_rows(rows, "No inventory data found")
}

#[cfg(test)]
#[path = "webjson_test.rs"]
mod tests;
