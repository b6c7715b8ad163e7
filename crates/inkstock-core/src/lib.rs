pub mod export;
pub mod pivot;
pub mod sizes;
pub mod types;
pub mod warehouses;

pub use export::{csv_filename, export_csv};
pub use pivot::{format_inventory_table, FormattedInventoryTable};
pub use sizes::compare_sizes;
pub use types::{InventoryResponse, NormalizedRow, Price};
pub use warehouses::{location_for_id, resolve_warehouse, WAREHOUSE_DISPLAY_ORDER};
