//! Product metadata extraction.
//!
//! Fuses the page's data sources into a [`ParsedProduct`]: structured data
//! first, meta-tag fallback chains second, heuristics last. Every field is
//! independently optional; a page yielding nothing produces a well-formed
//! all-absent result.

pub mod json_ld;
pub mod meta_tags;

use dom_query::Document;
use url::Url;

use crate::patterns;
use crate::price;
use crate::result::ParsedProduct;
use crate::url_utils;

/// Extract product metadata from a parsed document.
///
/// Pure and stateless: identical input yields identical output. Structured
/// data always takes precedence over meta tags for the same field.
#[must_use]
pub fn extract_product(doc: &Document, page_url: &Url) -> ParsedProduct {
    let candidates = json_ld::collect_candidates(doc);
    let product = json_ld::find_product(&candidates);

    let name = product
        .and_then(json_ld::product_name)
        .or_else(|| meta_tags::pick_meta(doc, patterns::TITLE_META_SELECTORS))
        .or_else(|| meta_tags::document_title(doc))
        .map(|title| title.trim().to_string())
        .filter(|title| !title.is_empty());

    let image_url = product
        .and_then(json_ld::product_image)
        .or_else(|| meta_tags::pick_meta(doc, patterns::IMAGE_META_SELECTORS))
        .and_then(|raw| url_utils::resolve(&raw, page_url));

    // The raw price string is kept for currency inference below.
    let raw_price = product
        .and_then(json_ld::offer_price)
        .or_else(|| meta_tags::pick_meta(doc, patterns::PRICE_META_SELECTORS));

    let price = raw_price.as_deref().and_then(price::normalize_price);

    let currency = product
        .and_then(json_ld::offer_currency)
        .or_else(|| meta_tags::pick_meta(doc, patterns::CURRENCY_META_SELECTORS))
        .or_else(|| raw_price.as_deref().and_then(price::infer_currency));

    ParsedProduct {
        name,
        image_url,
        price,
        currency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom;

    fn page_url() -> Url {
        Url::parse("https://shop.example/product/1")
            .map_or_else(|_| panic!("invalid test URL"), |u| u)
    }

    #[test]
    fn test_structured_data_beats_meta_tags() {
        let html = r#"
        <head>
            <meta property="og:title" content="Other Title">
            <meta property="og:image" content="https://shop.example/og.jpg">
            <script type="application/ld+json">
            {
                "@type": "Product",
                "name": "Widget",
                "image": "https://shop.example/widget.jpg",
                "offers": {"price": "99.00", "priceCurrency": "USD"}
            }
            </script>
        </head>
        "#;

        let result = extract_product(&dom::parse(html), &page_url());

        assert_eq!(result.name, Some("Widget".to_string()));
        assert_eq!(
            result.image_url,
            Some("https://shop.example/widget.jpg".to_string())
        );
        assert_eq!(result.price, Some(99.0));
        assert_eq!(result.currency, Some("USD".to_string()));
    }

    #[test]
    fn test_meta_fallback_when_no_structured_data() {
        let html = r#"
        <head>
            <meta property="og:title" content="Soft Blanket">
            <meta property="og:image" content="/img/blanket.jpg">
            <meta property="product:price:amount" content="34.50">
            <meta property="product:price:currency" content="GBP">
        </head>
        "#;

        let result = extract_product(&dom::parse(html), &page_url());

        assert_eq!(result.name, Some("Soft Blanket".to_string()));
        assert_eq!(
            result.image_url,
            Some("https://shop.example/img/blanket.jpg".to_string())
        );
        assert_eq!(result.price, Some(34.5));
        assert_eq!(result.currency, Some("GBP".to_string()));
    }

    #[test]
    fn test_title_element_is_last_resort() {
        let html = "<html><head><title>Cool Gadget - Shop</title></head><body></body></html>";

        let result = extract_product(&dom::parse(html), &page_url());

        assert_eq!(result.name, Some("Cool Gadget - Shop".to_string()));
    }

    #[test]
    fn test_currency_inferred_from_raw_price_text() {
        let html = r#"<head><meta name="price" content="$19.99"></head>"#;

        let result = extract_product(&dom::parse(html), &page_url());

        assert_eq!(result.price, Some(19.99));
        assert_eq!(result.currency, Some("$".to_string()));
    }

    #[test]
    fn test_explicit_currency_beats_inference() {
        let html = r#"
        <head>
            <meta name="price" content="$19.99">
            <meta itemprop="priceCurrency" content="CAD">
        </head>
        "#;

        let result = extract_product(&dom::parse(html), &page_url());

        assert_eq!(result.currency, Some("CAD".to_string()));
    }

    #[test]
    fn test_unparseable_price_leaves_other_fields() {
        let html = r#"
        <head>
            <meta property="og:title" content="Mystery Box">
            <meta name="price" content="call us">
        </head>
        "#;

        let result = extract_product(&dom::parse(html), &page_url());

        assert_eq!(result.name, Some("Mystery Box".to_string()));
        assert_eq!(result.price, None);
    }

    #[test]
    fn test_empty_document_is_all_absent() {
        let result = extract_product(&dom::parse(""), &page_url());
        assert!(result.is_empty());
    }
}
