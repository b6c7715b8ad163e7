//! Slug extraction from product search results.
//!
//! The search endpoint returns matches under either a `results` or a
//! `products` key depending on the storefront revision. The inventory
//! endpoints are keyed by URL slug rather than style number, so the
//! inventory-by-style flow has to find the searched style in the results and
//! lift the slug out of its product-page URL (`.../p/{slug}?...`).

use serde_json::Value;

/// Finds the exact style match in a search response and extracts its slug.
///
/// The match must be exact against `styleNumber`, `style` or `code`;
/// substring or fuzzy hits would silently fetch inventory for the wrong
/// garment. Returns `None` when no result matches exactly or the matching
/// result has no usable `/p/` URL; callers treat that as a fallthrough
/// signal, not an error.
#[must_use]
pub fn extract_slug(search_document: &Value, style: &str) -> Option<String> {
    let results = search_document
        .get("results")
        .or_else(|| search_document.get("products"))?
        .as_array()?;

    let exact = results.iter().find(|item| {
        ["styleNumber", "style", "code"]
            .iter()
            .any(|key| item.get(*key).and_then(Value::as_str) == Some(style))
    })?;

    let url = exact
        .get("url")
        .or_else(|| exact.get("pdpUrl"))
        .and_then(Value::as_str)?;
    slug_from_url(url)
}

/// Takes the path segment after `/p/`, trimming any further path segments
/// and query/hash fragments.
fn slug_from_url(url: &str) -> Option<String> {
    let (_, after) = url.split_once("/p/")?;
    let slug = after
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();
    (!slug.is_empty()).then(|| slug.to_owned())
}
