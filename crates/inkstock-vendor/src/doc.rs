//! Accessor primitives for XML-derived document trees.
//!
//! SOAP responses reach the parsers as generic [`serde_json::Value`] trees
//! built by [`crate::xmltree`]. Two quirks of that representation are handled
//! here once, instead of at every call site:
//!
//! - the same semantic field may appear bare (`"partId"`) or
//!   namespace-prefixed (`"shar:partId"`), depending on whether the
//!   XML-to-object step stripped prefixes;
//! - a "repeatable" element arrives as a bare object for a single occurrence
//!   and as an array for multiple occurrences.

use serde_json::Value;

/// Looks up `name` on an object node, accepting a namespace-prefixed key.
///
/// The bare key wins when both forms are present; otherwise any key whose
/// local name (the part after `:`) matches is accepted, so `"shar:partId"`
/// and `"soapenv:Fault"` both resolve. `null` values count as absent.
pub(crate) fn field<'a>(node: &'a Value, name: &str) -> Option<&'a Value> {
    let object = node.as_object()?;
    let found = object.get(name).or_else(|| {
        object
            .iter()
            .find(|(key, _)| {
                key.rsplit_once(':')
                    .is_some_and(|(_, local)| local == name)
            })
            .map(|(_, value)| value)
    })?;
    (!found.is_null()).then_some(found)
}

/// Normalizes a repeatable node to a list: `None`/`null` → empty, an array →
/// its items, anything else → a one-element list.
pub(crate) fn to_array(node: Option<&Value>) -> Vec<&Value> {
    match node {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items.iter().collect(),
        Some(other) => vec![other],
    }
}

/// Extracts the scalar text of a leaf node: strings trimmed, numbers and
/// booleans rendered. Objects and arrays have no scalar text.
pub(crate) fn node_text(node: Option<&Value>) -> Option<String> {
    match node? {
        Value::String(s) => Some(s.trim().to_owned()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Coerces a quantity value to an integer.
///
/// Accepts JSON numbers (fractions truncate toward zero, the way the
/// upstream display code read them) and numeric strings. Anything else is
/// `None`; callers decide whether "unparseable" means `0` or "unknown" for
/// their endpoint.
pub(crate) fn coerce_qty(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().map(truncate_toward_zero)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed
                .parse::<i64>()
                .ok()
                .or_else(|| trimmed.parse::<f64>().ok().map(truncate_toward_zero))
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate_toward_zero(value: f64) -> i64 {
    value.trunc() as i64
}
