//! Result type for product extraction output.

use serde::{Deserialize, Serialize};

/// Best-effort product metadata recovered from a page.
///
/// All fields are independently optional; partial success is the normal
/// case, not an error. Serializes to the JSON contract consumed by the
/// wishlist layer: `name`, `imageUrl`, `price`, `currency`, each either a
/// value or `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedProduct {
    /// Product name.
    pub name: Option<String>,

    /// Absolute URL of the product image.
    pub image_url: Option<String>,

    /// Numeric price, decimal-normalized.
    pub price: Option<f64>,

    /// Currency symbol (`$`, `€`, ...) or ISO-style code (`USD`, ...).
    pub currency: Option<String>,
}

impl ParsedProduct {
    /// True when no field was recovered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.image_url.is_none()
            && self.price.is_none()
            && self.currency.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_contract_keys() {
        let product = ParsedProduct {
            name: Some("Wooden Rattle".to_string()),
            image_url: Some("https://shop.example/img/rattle.jpg".to_string()),
            price: Some(12.5),
            currency: Some("EUR".to_string()),
        };

        let json = serde_json::to_value(&product).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert_eq!(json["name"], "Wooden Rattle");
        assert_eq!(json["imageUrl"], "https://shop.example/img/rattle.jpg");
        assert_eq!(json["price"], 12.5);
        assert_eq!(json["currency"], "EUR");
    }

    #[test]
    fn test_absent_fields_serialize_as_null() {
        let json = serde_json::to_value(ParsedProduct::default()).ok();
        let Some(json) = json else {
            panic!("serialization failed");
        };
        assert!(json["name"].is_null());
        assert!(json["imageUrl"].is_null());
        assert!(json["price"].is_null());
        assert!(json["currency"].is_null());
    }

    #[test]
    fn test_is_empty() {
        assert!(ParsedProduct::default().is_empty());

        let partial = ParsedProduct {
            price: Some(9.99),
            ..ParsedProduct::default()
        };
        assert!(!partial.is_empty());
    }
}
