//! JSON-LD structured-data extraction.
//!
//! Locates embedded `application/ld+json` blocks, selects the product
//! entity, and reads its fields with guarded access: key presence and value
//! type are checked before use, and any shape mismatch means "no value",
//! never a fault.

use dom_query::{Document, Selection};
use serde_json::{Map, Value};

use crate::dom;
use crate::patterns;

/// Collect every structured-data candidate entity, document order preserved.
///
/// A block parsing to an object contributes one candidate; an array
/// contributes each object element. Malformed blocks are skipped silently.
#[must_use]
pub fn collect_candidates(doc: &Document) -> Vec<Map<String, Value>> {
    let mut candidates = Vec::new();

    for script in doc.select(patterns::JSON_LD_SELECTOR).nodes() {
        let script_sel = Selection::from(*script);
        let json_text = dom::text_content(&script_sel).trim().to_string();

        if json_text.is_empty() {
            continue;
        }

        let data: Value = match serde_json::from_str(&json_text) {
            Ok(v) => v,
            Err(err) => {
                tracing::debug!(error = %err, "skipping malformed JSON-LD block");
                continue;
            }
        };

        match data {
            Value::Object(map) => candidates.push(map),
            Value::Array(entries) => {
                for entry in entries {
                    if let Value::Object(map) = entry {
                        candidates.push(map);
                    }
                }
            }
            _ => {}
        }
    }

    candidates
}

/// Select the product entity from the candidate list.
///
/// First pass: the first candidate typed as a product. Second pass: the
/// first product inside any candidate's `@graph` container. No match is
/// the common case for pages without markup, not an error.
#[must_use]
pub fn find_product(candidates: &[Map<String, Value>]) -> Option<&Map<String, Value>> {
    if let Some(product) = candidates
        .iter()
        .find(|entity| is_product_type(entity.get("@type")))
    {
        return Some(product);
    }

    candidates.iter().find_map(|entity| {
        let graph = entity.get("@graph")?.as_array()?;
        graph.iter().find_map(|entry| {
            let entry = entry.as_object()?;
            is_product_type(entry.get("@type")).then_some(entry)
        })
    })
}

/// A `@type` of `"Product"`, or an array containing it.
fn is_product_type(type_field: Option<&Value>) -> bool {
    match type_field {
        Some(Value::String(t)) => t == "Product",
        Some(Value::Array(types)) => types.iter().any(|t| t.as_str() == Some("Product")),
        _ => false,
    }
}

/// Product `name` as a non-empty string.
#[must_use]
pub fn product_name(product: &Map<String, Value>) -> Option<String> {
    let name = product.get("name")?.as_str()?.trim();
    if name.is_empty() {
        return None;
    }
    Some(name.to_string())
}

/// Product `image` in any of its common shapes: a plain URL string, an
/// ImageObject with a `url` field, or an array of either.
#[must_use]
pub fn product_image(product: &Map<String, Value>) -> Option<String> {
    image_url_from(product.get("image")?)
}

fn image_url_from(value: &Value) -> Option<String> {
    match value {
        Value::String(src) => {
            let src = src.trim();
            if src.is_empty() {
                return None;
            }
            Some(src.to_string())
        }
        Value::Object(image) => image
            .get("url")
            .and_then(Value::as_str)
            .map(|src| src.trim().to_string())
            .filter(|src| !src.is_empty()),
        Value::Array(images) => images.first().and_then(image_url_from),
        _ => None,
    }
}

/// Offer `price` as its raw string form. The field may be a JSON string or
/// number; normalization happens downstream.
#[must_use]
pub fn offer_price(product: &Map<String, Value>) -> Option<String> {
    match offer_object(product)?.get("price")? {
        Value::String(price) => {
            let price = price.trim();
            if price.is_empty() {
                return None;
            }
            Some(price.to_string())
        }
        Value::Number(price) => Some(price.to_string()),
        _ => None,
    }
}

/// Offer `priceCurrency` as a non-empty string.
#[must_use]
pub fn offer_currency(product: &Map<String, Value>) -> Option<String> {
    let code = offer_object(product)?.get("priceCurrency")?.as_str()?.trim();
    if code.is_empty() {
        return None;
    }
    Some(code.to_string())
}

/// `offers` may be a single object or an array of offers; the first object
/// entry is taken.
fn offer_object(product: &Map<String, Value>) -> Option<&Map<String, Value>> {
    match product.get("offers")? {
        Value::Object(offers) => Some(offers),
        Value::Array(offers) => offers.iter().find_map(Value::as_object),
        _ => None,
    }
}
