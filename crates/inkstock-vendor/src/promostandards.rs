//! Parser for PromoStandards Inventory 2.0.0 SOAP responses.
//!
//! The input is an XML-derived [`serde_json::Value`] tree (see
//! [`crate::xmltree`]), not XML text. Two representation hazards apply to
//! every step of the traversal and are absorbed by [`crate::doc`]:
//! namespace-prefixed vs. bare keys, and single-object vs. array for
//! repeatable elements.
//!
//! Traversal: `Product[]` → `PartInventoryArray.PartInventory[]` →
//! `Quantity`. Unlike the REST shapes there is no warehouse list per
//! quantity; `warehouseId`/`warehouseName` sit directly on the `Quantity`
//! node.

use inkstock_core::{resolve_warehouse, InventoryResponse, NormalizedRow};
use serde_json::Value;

use crate::doc::{coerce_qty, field, node_text, to_array};

/// Parses a PromoStandards inventory response tree into canonical rows.
///
/// The `Product` node is probed at the document root and under an
/// `Inventory` wrapper, matching the two envelope layouts seen from the
/// service. A SOAP `Fault` surfaces its fault string as the error message.
/// Quantities that fail integer coercion become `0` (the service reports
/// unknown cells with empty elements, which read as zero stock).
#[must_use]
pub fn parse_promostandards_inventory(document: &Value) -> InventoryResponse {
    if let Some(fault) = field(document, "Fault") {
        let message = node_text(field(fault, "faultstring"))
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| "SOAP fault".to_owned());
        return InventoryResponse::failure(message);
    }

    let product_node = field(document, "Product")
        .or_else(|| field(document, "Inventory").and_then(|inv| field(inv, "Product")));
    let Some(product_node) = product_node else {
        return InventoryResponse::failure("Inventory data not found in response");
    };

    let mut rows = Vec::new();
    for product in to_array(Some(product_node)) {
        let style = node_text(field(product, "productId")).unwrap_or_default();
        let product_description = node_text(field(product, "productName")).unwrap_or_default();

        let parts = to_array(
            field(product, "PartInventoryArray").and_then(|array| field(array, "PartInventory")),
        );
        for part in parts {
            let part_id = node_text(field(part, "partId")).unwrap_or_default();
            let color = node_text(field(part, "partColor")).unwrap_or_default();
            let size = node_text(field(part, "labelSize")).unwrap_or_default();
            let description = node_text(field(part, "partDescription"))
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| product_description.clone());

            for quantity in to_array(field(part, "Quantity")) {
                let warehouse_id = node_text(field(quantity, "warehouseId")).unwrap_or_default();
                let warehouse_name = node_text(field(quantity, "warehouseName"));
                let warehouse = resolve_warehouse(&warehouse_id, warehouse_name.as_deref());
                let qty = field(quantity, "quantityAvailable")
                    .and_then(coerce_qty)
                    .unwrap_or(0);

                let part_id = if part_id.is_empty() {
                    format!("{style}-{color}-{size}")
                } else {
                    part_id.clone()
                };

                rows.push(NormalizedRow {
                    style: style.clone(),
                    part_id,
                    color: color.clone(),
                    size: size.clone(),
                    description: description.clone(),
                    warehouse_id: warehouse_id.clone(),
                    warehouse,
                    qty: Some(qty),
                    total_available: Some(qty),
                    price: None,
                });
            }
        }
    }

    InventoryResponse::from_rows(rows, "No inventory data found")
}

#[cfg(test)]
#[path = "promostandards_test.rs"]
mod tests;
