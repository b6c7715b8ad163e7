//! SOAP envelope construction for the two inventory services.
//!
//! Envelopes are plain string templates: both services accept a fixed
//! element layout and the only dynamic content is a handful of
//! XML-escaped scalar values, so a full XML writer would buy nothing.

use std::fmt::Write as _;

const PS_INVENTORY_NS: &str = "http://www.promostandards.org/WSDL/Inventory/2.0.0/";
const PS_SHARED_NS: &str = "http://www.promostandards.org/WSDL/Inventory/2.0.0/SharedObjects/";
const LEGACY_NS: &str = "http://webservice.integration.inkstock.dev/";
const LEGACY_METHOD: &str = "getInventoryQtyForStyle";

/// Optional filters for a PromoStandards `GetInventoryLevelsRequest`.
///
/// Empty vectors mean "no filter"; the `Filter` element is omitted entirely
/// when nothing is set.
#[derive(Debug, Clone, Default)]
pub struct InventoryFilter {
    pub label_sizes: Vec<String>,
    pub part_colors: Vec<String>,
    pub part_ids: Vec<String>,
}

impl InventoryFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.label_sizes.is_empty() && self.part_colors.is_empty() && self.part_ids.is_empty()
    }
}

/// Builds the `GetInventoryLevelsRequest` (PromoStandards Inventory 2.0.0)
/// envelope for a product id, with optional size/color/part filters.
#[must_use]
pub(crate) fn promostandards_inventory_request(product_id: &str, filter: &InventoryFilter) -> String {
    let mut body = String::new();
    body.push_str("<ns:GetInventoryLevelsRequest>\n");
    push_tag(&mut body, "wsVersion", "2.0.0");
    push_tag(&mut body, "productId", product_id.trim());

    if !filter.is_empty() {
        body.push_str("<shar:Filter>\n");
        push_tag_list(&mut body, "LabelSizeArray", "labelSize", &filter.label_sizes);
        push_tag_list(&mut body, "PartColorArray", "partColor", &filter.part_colors);
        push_tag_list(&mut body, "partIdArray", "partId", &filter.part_ids);
        body.push_str("</shar:Filter>\n");
    }

    body.push_str("</ns:GetInventoryLevelsRequest>\n");
    envelope(&format!("xmlns:ns=\"{PS_INVENTORY_NS}\" xmlns:shar=\"{PS_SHARED_NS}\""), &body)
}

/// Builds the legacy inventory-by-style envelope for the direct
/// `WebServicePort` lookup.
#[must_use]
pub(crate) fn legacy_inventory_request(style: &str) -> String {
    let body = format!(
        "<web:{LEGACY_METHOD}>\n<arg0>{}</arg0>\n</web:{LEGACY_METHOD}>\n",
        xml_escape(style.trim())
    );
    envelope(&format!("xmlns:web=\"{LEGACY_NS}\""), &body)
}

/// `SOAPAction` header value for the legacy service, which expects the
/// fully-qualified action in quotes.
#[must_use]
pub(crate) fn legacy_soap_action() -> String {
    format!("\"{LEGACY_NS}{LEGACY_METHOD}\"")
}

fn envelope(namespaces: &str, body: &str) -> String {
    format!(
        "<soapenv:Envelope xmlns:soapenv=\"http://schemas.xmlsoap.org/soap/envelope/\" {namespaces}>\n\
         <soapenv:Header />\n<soapenv:Body>\n{body}</soapenv:Body>\n</soapenv:Envelope>\n"
    )
}

fn push_tag(out: &mut String, name: &str, value: &str) {
    let _ = writeln!(out, "<shar:{name}>{}</shar:{name}>", xml_escape(value));
}

fn push_tag_list(out: &mut String, wrapper: &str, item: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let _ = writeln!(out, "<shar:{wrapper}>");
    for value in values {
        push_tag(out, item, value);
    }
    let _ = writeln!(out, "</shar:{wrapper}>");
}

fn xml_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
