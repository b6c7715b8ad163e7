//! Fallback orchestration for style-number inventory lookups.
//!
//! No single distributor endpoint answers for every style: the SOAP
//! services cover the classic catalog, the REST WebJSON endpoints cover the
//! storefront, and some styles only resolve through a search round-trip.
//! The orchestrator tries them in a fixed priority order and accepts the
//! first usable answer.
//!
//! Steps run sequentially on purpose: each step's failure gates whether the
//! next runs, so firing them concurrently would waste vendor calls on
//! lookups that turn out to be unnecessary.

use inkstock_core::InventoryResponse;
use serde_json::Value;

use crate::error::VendorError;
use crate::promostandards::parse_promostandards_inventory;
use crate::search::extract_slug;
use crate::soap::InventoryFilter;
use crate::webjson::{parse_detail_inventory, parse_webjson_inventory};

/// One fetch method per fallback step. Implemented by
/// [`crate::DistributorClient`] for production and by scripted fakes in
/// tests.
///
/// Every method returns the parsed response *document*; shape
/// interpretation stays in the parsers so a gateway never decides what
/// counts as usable inventory.
// Consumers are generic and never spawn the returned futures, so the
// missing Send bound the lint warns about does not bite here.
#[allow(async_fn_in_trait)]
pub trait VendorGateway {
    /// Direct product-ID lookup against the legacy SOAP service.
    ///
    /// # Errors
    ///
    /// Any [`VendorError`]; the orchestrator treats it as fallthrough.
    async fn soap_product_inventory(&self, style: &str) -> Result<Value, VendorError>;

    /// PromoStandards inventory-by-style, optionally filtered.
    ///
    /// # Errors
    ///
    /// Any [`VendorError`]; the orchestrator treats it as fallthrough.
    async fn promostandards_inventory(
        &self,
        style: &str,
        filter: &InventoryFilter,
    ) -> Result<Value, VendorError>;

    /// Storefront product search.
    ///
    /// # Errors
    ///
    /// Any [`VendorError`]; the orchestrator treats it as fallthrough.
    async fn search_products(&self, query: &str) -> Result<Value, VendorError>;

    /// WebJSON inventory for a known product slug.
    ///
    /// # Errors
    ///
    /// Any [`VendorError`]; the orchestrator treats it as fallthrough.
    async fn inventory_by_slug(&self, slug: &str) -> Result<Value, VendorError>;
}

/// A style lookup request.
#[derive(Debug, Clone, Default)]
pub struct StyleQuery {
    /// Vendor style number (e.g. `"64000"`).
    pub style: String,
    /// Product-page slug, when the caller already knows it. Enables the
    /// legacy direct-slug step.
    pub slug: Option<String>,
    /// Restrict the SOAP lookup to one color.
    pub color: Option<String>,
    /// Restrict the SOAP lookup to one size.
    pub size: Option<String>,
}

impl StyleQuery {
    #[must_use]
    pub fn new(style: impl Into<String>) -> Self {
        Self {
            style: style.into(),
            ..Self::default()
        }
    }
}

/// Tries the vendor lookup steps in priority order, returning the first
/// usable result.
///
/// Usable means a non-error response with at least one row. A style that
/// is out of stock everywhere still stops the chain, because the vendor
/// *answered*. Transport errors and error-responses alike log a warning and
/// fall through; only exhausting every step produces the terminal error
/// response.
pub async fn lookup_inventory<G: VendorGateway>(
    gateway: &G,
    query: &StyleQuery,
) -> InventoryResponse {
    let style = query.style.as_str();

    // 1. Direct SOAP product-ID lookup.
    match gateway.soap_product_inventory(style).await {
        Ok(document) => {
            let parsed = parse_promostandards_inventory(&document);
            if parsed.is_usable() {
                tracing::debug!(style, rows = parsed.rows.len(), "direct SOAP lookup succeeded");
                return parsed;
            }
            tracing::warn!(style, message = ?parsed.message, "direct SOAP lookup had no inventory");
        }
        Err(err) => tracing::warn!(style, error = %err, "direct SOAP lookup failed"),
    }

    // 2. PromoStandards inventory-by-style, with any requested filters.
    let filter = InventoryFilter {
        label_sizes: query.size.iter().cloned().collect(),
        part_colors: query.color.iter().cloned().collect(),
        part_ids: Vec::new(),
    };
    match gateway.promostandards_inventory(style, &filter).await {
        Ok(document) => {
            let parsed = parse_promostandards_inventory(&document);
            if parsed.is_usable() {
                tracing::debug!(style, rows = parsed.rows.len(), "PromoStandards lookup succeeded");
                return parsed;
            }
            tracing::warn!(style, message = ?parsed.message, "PromoStandards lookup had no inventory");
        }
        Err(err) => tracing::warn!(style, error = %err, "PromoStandards lookup failed"),
    }

    // 3. Search for the style, then fetch inventory by the matched slug.
    match gateway.search_products(style).await {
        Ok(search_document) => {
            if let Some(slug) = extract_slug(&search_document, style) {
                match gateway.inventory_by_slug(&slug).await {
                    Ok(document) => {
                        let parsed = parse_rest_document(&document);
                        if parsed.is_usable() {
                            tracing::debug!(style, %slug, rows = parsed.rows.len(), "search-driven lookup succeeded");
                            return parsed;
                        }
                        tracing::warn!(style, %slug, message = ?parsed.message, "search-driven lookup had no inventory");
                    }
                    Err(err) => tracing::warn!(style, %slug, error = %err, "inventory fetch for matched slug failed"),
                }
            } else {
                tracing::warn!(style, "no exact style match in search results");
            }
        }
        Err(err) => tracing::warn!(style, error = %err, "product search failed"),
    }

    // 4. Legacy direct-slug fetch, when the caller already had a slug.
    if let Some(slug) = &query.slug {
        match gateway.inventory_by_slug(slug).await {
            Ok(document) => {
                let parsed = parse_rest_document(&document);
                if parsed.is_usable() {
                    tracing::debug!(style, %slug, rows = parsed.rows.len(), "direct slug lookup succeeded");
                    return parsed;
                }
                tracing::warn!(style, %slug, message = ?parsed.message, "direct slug lookup had no inventory");
            }
            Err(err) => tracing::warn!(style, %slug, error = %err, "direct slug lookup failed"),
        }
    }

    InventoryResponse::failure(format!(
        "Could not find inventory for style number: {style}"
    ))
}

/// Parses a REST inventory document, preferring the nested WebJSON shape.
/// The product-detail parser is consulted only when the WebJSON parse
/// reported an error and the document carries a `data.colors` subtree.
fn parse_rest_document(document: &Value) -> InventoryResponse {
    let primary = parse_webjson_inventory(document);
    if primary.error && document.pointer("/data/colors").is_some() {
        return parse_detail_inventory(document);
    }
    primary
}

#[cfg(test)]
#[path = "lookup_test.rs"]
mod tests;
