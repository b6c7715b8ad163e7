//! SOAP XML → generic document tree conversion.
//!
//! Response bodies are converted to [`serde_json::Value`] trees so the
//! parsers can traverse REST and SOAP payloads with one set of accessors:
//! element names (namespace prefixes included) become object keys, repeated
//! siblings become arrays, text-only elements become strings. Mixed content
//! (text alongside child elements) does not occur in these services; when it
//! does appear the child elements win and the stray text is dropped.

use quick_xml::events::Event;
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::doc::field;
use crate::error::VendorError;

/// Converts an XML document into a one-key object `{root_name: tree}`.
///
/// # Errors
///
/// Returns [`VendorError::Xml`] for ill-formed markup and
/// [`VendorError::MalformedXml`] for structurally impossible documents
/// (unclosed elements, no root).
pub(crate) fn xml_to_value(xml: &str) -> Result<Value, VendorError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    // (element name, child map, accumulated text)
    let mut stack: Vec<(String, Map<String, Value>, String)> = Vec::new();
    let mut root: Option<Value> = None;

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                stack.push((name, Map::new(), String::new()));
            }
            Ok(Event::Empty(e)) => {
                let name = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                let value = Value::String(String::new());
                match stack.last_mut() {
                    Some((_, children, _)) => insert_child(children, name, value),
                    None => {
                        let mut map = Map::new();
                        map.insert(name, value);
                        root = Some(Value::Object(map));
                    }
                }
            }
            Ok(Event::Text(e)) => {
                if let Some((_, _, text)) = stack.last_mut() {
                    text.push_str(&e.unescape().unwrap_or_default());
                }
            }
            Ok(Event::CData(e)) => {
                if let Some((_, _, text)) = stack.last_mut() {
                    text.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
            }
            Ok(Event::End(_)) => {
                let Some((name, children, text)) = stack.pop() else {
                    return Err(VendorError::MalformedXml("unexpected closing tag".to_owned()));
                };
                let value = if children.is_empty() {
                    Value::String(text.trim().to_owned())
                } else {
                    Value::Object(children)
                };
                match stack.last_mut() {
                    Some((_, parent, _)) => insert_child(parent, name, value),
                    None => {
                        let mut map = Map::new();
                        map.insert(name, value);
                        root = Some(Value::Object(map));
                    }
                }
            }
            Ok(Event::Eof) => break,
            Ok(_) => {}
            Err(e) => return Err(VendorError::Xml(e)),
        }
    }

    if !stack.is_empty() {
        return Err(VendorError::MalformedXml("unclosed element".to_owned()));
    }
    root.ok_or_else(|| VendorError::MalformedXml("empty document".to_owned()))
}

/// Inserts a child value, promoting repeated names to arrays.
fn insert_child(map: &mut Map<String, Value>, name: String, value: Value) {
    match map.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            map.insert(name, value);
        }
    }
}

/// Unwraps a converted SOAP document down to its payload.
///
/// Descends `Envelope` → `Body`, then one level into the single response
/// element. A `Fault` body is returned as-is so the inventory parser can
/// surface the fault string. Documents that don't look like SOAP envelopes
/// pass through unchanged.
pub(crate) fn soap_payload(document: &Value) -> &Value {
    let Some(envelope) = field(document, "Envelope") else {
        return document;
    };
    let Some(body) = field(envelope, "Body") else {
        return document;
    };
    if field(body, "Fault").is_some() {
        return body;
    }
    match body.as_object() {
        Some(children) if children.len() == 1 => {
            children.values().next().unwrap_or(document)
        }
        _ => body,
    }
}

#[cfg(test)]
#[path = "xmltree_test.rs"]
mod tests;
