//! HTTP client for the distributor's REST and SOAP endpoints.
//!
//! Wraps `reqwest` with typed error handling and a configurable base URL so
//! tests can point every endpoint at a `wiremock::MockServer`. The client
//! performs no retries: a failed call is a fallthrough signal for the
//! lookup chain, not something to paper over at the transport layer.

use std::time::Duration;

use reqwest::{Client, Url};
use serde_json::Value;

use crate::error::VendorError;
use crate::lookup::VendorGateway;
use crate::soap::{
    legacy_inventory_request, legacy_soap_action, promostandards_inventory_request,
    InventoryFilter,
};
use crate::xmltree::{soap_payload, xml_to_value};

const SEARCH_PATH: &str = "search/findProducts.json";
const INVENTORY_PATH: &str = "api/inventory";
const LEGACY_SOAP_PATH: &str = "webservices/inventory";
const PROMOSTANDARDS_PATH: &str = "promostandards/inventory/v2";

/// Client for one distributor host, REST and SOAP endpoints alike.
#[derive(Debug)]
pub struct DistributorClient {
    client: Client,
    base_url: Url,
}

impl DistributorClient {
    /// Creates a client for the given distributor base URL.
    ///
    /// # Errors
    ///
    /// Returns [`VendorError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`VendorError::InvalidBaseUrl`] if
    /// `base_url` does not parse.
    pub fn new(base_url: &str, timeout_secs: u64) -> Result<Self, VendorError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("inkstock/0.1 (inventory-lookup)")
            .build()?;

        // Normalise: exactly one trailing slash so joins append instead of
        // replacing the last path segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|e| VendorError::InvalidBaseUrl {
            url: base_url.to_owned(),
            reason: e.to_string(),
        })?;

        Ok(Self { client, base_url })
    }

    /// Searches the storefront for products matching `query`.
    ///
    /// Returns the raw search document; see [`crate::search::extract_slug`]
    /// for exact-match slug extraction.
    ///
    /// # Errors
    ///
    /// [`VendorError::Http`], [`VendorError::UnexpectedStatus`] or
    /// [`VendorError::Deserialize`].
    pub async fn search_products(&self, query: &str) -> Result<Value, VendorError> {
        let url = self.endpoint(SEARCH_PATH)?;
        let body = serde_json::json!({
            "text": query,
            "currentPage": 0,
            "pageSize": 10,
            "sort": "relevance",
        });
        let response = self.client.post(url.clone()).json(&body).send().await?;
        Self::read_json(response, &url, &format!("search({query})")).await
    }

    /// Fetches WebJSON inventory for a product slug.
    ///
    /// # Errors
    ///
    /// [`VendorError::Http`], [`VendorError::UnexpectedStatus`] or
    /// [`VendorError::Deserialize`].
    pub async fn inventory_by_slug(&self, slug: &str) -> Result<Value, VendorError> {
        let url = self.endpoint(&format!("{INVENTORY_PATH}/{slug}"))?;
        let response = self.client.get(url.clone()).send().await?;
        Self::read_json(response, &url, &format!("inventory({slug})")).await
    }

    /// Direct product-ID inventory lookup against the legacy SOAP service.
    ///
    /// # Errors
    ///
    /// [`VendorError::Http`], [`VendorError::UnexpectedStatus`] or an XML
    /// conversion error.
    pub async fn soap_product_inventory(&self, style: &str) -> Result<Value, VendorError> {
        let url = self.endpoint(LEGACY_SOAP_PATH)?;
        let envelope = legacy_inventory_request(style);
        self.post_soap(url, envelope, Some(&legacy_soap_action())).await
    }

    /// PromoStandards `GetInventoryLevels` lookup, optionally filtered by
    /// size/color/part.
    ///
    /// # Errors
    ///
    /// [`VendorError::Http`], [`VendorError::UnexpectedStatus`] or an XML
    /// conversion error.
    pub async fn promostandards_inventory(
        &self,
        style: &str,
        filter: &InventoryFilter,
    ) -> Result<Value, VendorError> {
        let url = self.endpoint(PROMOSTANDARDS_PATH)?;
        let envelope = promostandards_inventory_request(style, filter);
        self.post_soap(url, envelope, None).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, VendorError> {
        self.base_url.join(path).map_err(|e| VendorError::InvalidBaseUrl {
            url: self.base_url.to_string(),
            reason: e.to_string(),
        })
    }

    async fn post_soap(
        &self,
        url: Url,
        envelope: String,
        soap_action: Option<&str>,
    ) -> Result<Value, VendorError> {
        let mut request = self
            .client
            .post(url.clone())
            .header("Content-Type", "text/xml; charset=utf-8")
            .body(envelope);
        if let Some(action) = soap_action {
            request = request.header("SOAPAction", action);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(VendorError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        let tree = xml_to_value(&body)?;
        Ok(soap_payload(&tree).clone())
    }

    async fn read_json(
        response: reqwest::Response,
        url: &Url,
        context: &str,
    ) -> Result<Value, VendorError> {
        let status = response.status();
        if !status.is_success() {
            return Err(VendorError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| VendorError::Deserialize {
            context: context.to_owned(),
            source: e,
        })
    }
}

impl VendorGateway for DistributorClient {
    async fn soap_product_inventory(&self, style: &str) -> Result<Value, VendorError> {
        Self::soap_product_inventory(self, style).await
    }

    async fn promostandards_inventory(
        &self,
        style: &str,
        filter: &InventoryFilter,
    ) -> Result<Value, VendorError> {
        Self::promostandards_inventory(self, style, filter).await
    }

    async fn search_products(&self, query: &str) -> Result<Value, VendorError> {
        Self::search_products(self, query).await
    }

    async fn inventory_by_slug(&self, slug: &str) -> Result<Value, VendorError> {
        Self::inventory_by_slug(self, slug).await
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
