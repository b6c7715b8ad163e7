pub mod client;
mod doc;
pub mod error;
pub mod lookup;
pub mod promostandards;
pub mod search;
pub mod soap;
pub mod webjson;
mod xmltree;

pub use client::DistributorClient;
pub use error::VendorError;
pub use lookup::{lookup_inventory, StyleQuery, VendorGateway};
pub use promostandards::parse_promostandards_inventory;
pub use search::extract_slug;
pub use soap::InventoryFilter;
pub use webjson::{parse_detail_inventory, parse_webjson_inventory};
