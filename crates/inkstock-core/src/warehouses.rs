//! Static distributor warehouse data.
//!
//! The ID→location table is versioned vendor data, not configuration: the
//! distributor has operated the same nine fulfillment centers for years and
//! communicates them by numeric code in SOAP responses. Changes here track a
//! vendor announcement, not a code change.

/// Warehouse code → human-readable location, as the distributor assigns them.
pub const WAREHOUSE_LOCATIONS: &[(&str, &str)] = &[
    ("1", "Seattle, WA"),
    ("2", "Cincinnati, OH"),
    ("3", "Dallas, TX"),
    ("4", "Reno, NV"),
    ("5", "Robbinsville, NJ"),
    ("6", "Jacksonville, FL"),
    ("7", "Minneapolis, MN"),
    ("12", "Phoenix, AZ"),
    ("31", "Richmond, VA"),
];

/// Display order for the cross-table: highest-volume warehouses first.
/// Locations not in this list sort alphabetically after it.
pub const WAREHOUSE_DISPLAY_ORDER: &[&str] = &[
    "Dallas, TX",
    "Cincinnati, OH",
    "Richmond, VA",
    "Jacksonville, FL",
    "Phoenix, AZ",
    "Reno, NV",
    "Minneapolis, MN",
    "Robbinsville, NJ",
    "Seattle, WA",
];

/// Looks up the location name for a distributor warehouse code.
#[must_use]
pub fn location_for_id(id: &str) -> Option<&'static str> {
    WAREHOUSE_LOCATIONS
        .iter()
        .find(|(code, _)| *code == id)
        .map(|(_, name)| *name)
}

/// Resolves a warehouse code to a display name.
///
/// Resolution order: the static table, then the vendor-supplied name (SOAP
/// responses usually carry one), then a `"Warehouse {id}"` placeholder so an
/// unmapped code still produces a distinct table row.
#[must_use]
pub fn resolve_warehouse(id: &str, vendor_name: Option<&str>) -> String {
    if let Some(name) = location_for_id(id) {
        return name.to_owned();
    }
    match vendor_name {
        Some(name) if !name.is_empty() => name.to_owned(),
        _ => format!("Warehouse {id}"),
    }
}
