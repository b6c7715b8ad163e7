use thiserror::Error;

/// Errors from the distributor client and SOAP codec.
///
/// Parse failures inside the response *parsers* are not errors at this level:
/// parsers communicate failure through `InventoryResponse::error` so the
/// fallback orchestrator can treat them as fallthrough signals.
#[derive(Debug, Error)]
pub enum VendorError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("invalid base URL \"{url}\": {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("malformed XML response: {0}")]
    MalformedXml(String),
}
