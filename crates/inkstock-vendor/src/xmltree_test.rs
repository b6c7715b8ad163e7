use serde_json::json;

use super::*;
use crate::promostandards::parse_promostandards_inventory;

#[test]
fn text_only_elements_become_strings() {
    let value = xml_to_value("<a><b>hello</b></a>").unwrap();
    assert_eq!(value, json!({ "a": { "b": "hello" } }));
}

#[test]
fn repeated_siblings_become_arrays() {
    let value = xml_to_value("<a><b>1</b><b>2</b><b>3</b></a>").unwrap();
    assert_eq!(value, json!({ "a": { "b": ["1", "2", "3"] } }));
}

#[test]
fn single_occurrence_stays_a_bare_object() {
    // The single-vs-array ambiguity the parsers must absorb originates here.
    let value = xml_to_value("<a><b><c>x</c></b></a>").unwrap();
    assert_eq!(value, json!({ "a": { "b": { "c": "x" } } }));
}

#[test]
fn namespace_prefixes_are_preserved_in_keys() {
    let value = xml_to_value("<shar:a><shar:b>x</shar:b></shar:a>").unwrap();
    assert_eq!(value, json!({ "shar:a": { "shar:b": "x" } }));
}

#[test]
fn empty_elements_become_empty_strings() {
    let value = xml_to_value("<a><b/><c></c></a>").unwrap();
    assert_eq!(value, json!({ "a": { "b": "", "c": "" } }));
}

#[test]
fn entities_are_unescaped() {
    let value = xml_to_value("<a>&lt;64000&gt; &amp; co</a>").unwrap();
    assert_eq!(value, json!({ "a": "<64000> & co" }));
}

#[test]
fn ill_formed_markup_is_an_error() {
    assert!(xml_to_value("<a><b></a>").is_err());
    assert!(xml_to_value("").is_err());
}

#[test]
fn soap_payload_unwraps_envelope_and_body() {
    let doc = json!({
        "soapenv:Envelope": {
            "soapenv:Body": {
                "GetInventoryLevelsResponse": { "Inventory": { "productId": "64000" } }
            }
        }
    });
    assert_eq!(
        soap_payload(&doc),
        &json!({ "Inventory": { "productId": "64000" } })
    );
}

#[test]
fn soap_payload_keeps_fault_bodies_visible() {
    let doc = json!({
        "soapenv:Envelope": {
            "soapenv:Body": {
                "soapenv:Fault": { "faultstring": "bad request" }
            }
        }
    });
    let payload = soap_payload(&doc);
    assert!(field(payload, "Fault").is_some());
}

#[test]
fn soap_payload_passes_non_envelopes_through() {
    let doc = json!({ "items": [] });
    assert_eq!(soap_payload(&doc), &doc);
}

#[test]
fn converted_envelope_feeds_the_inventory_parser() {
    let xml = r#"<?xml version="1.0" encoding="UTF-8"?>
<soapenv:Envelope xmlns:soapenv="http://schemas.xmlsoap.org/soap/envelope/">
  <soapenv:Body>
    <GetInventoryLevelsResponse>
      <Inventory>
        <shar:Product>
          <shar:productId>64000</shar:productId>
          <shar:PartInventoryArray>
            <shar:PartInventory>
              <shar:partId>64000-BLK-M</shar:partId>
              <shar:partColor>Black</shar:partColor>
              <shar:labelSize>M</shar:labelSize>
              <shar:Quantity>
                <shar:warehouseId>3</shar:warehouseId>
                <shar:quantityAvailable>144</shar:quantityAvailable>
              </shar:Quantity>
            </shar:PartInventory>
            <shar:PartInventory>
              <shar:partId>64000-BLK-L</shar:partId>
              <shar:partColor>Black</shar:partColor>
              <shar:labelSize>L</shar:labelSize>
              <shar:Quantity>
                <shar:warehouseId>1</shar:warehouseId>
                <shar:quantityAvailable>12</shar:quantityAvailable>
              </shar:Quantity>
            </shar:PartInventory>
          </shar:PartInventoryArray>
        </shar:Product>
      </Inventory>
    </GetInventoryLevelsResponse>
  </soapenv:Body>
</soapenv:Envelope>"#;

    let tree = xml_to_value(xml).unwrap();
    let resp = parse_promostandards_inventory(soap_payload(&tree));
    assert!(!resp.error, "unexpected error: {:?}", resp.message);
    assert_eq!(resp.rows.len(), 2);
    assert_eq!(resp.rows[0].warehouse, "Dallas, TX");
    assert_eq!(resp.rows[1].warehouse, "Seattle, WA");
    assert_eq!(resp.rows[1].qty, Some(12));
}
