//! # product-page-parser
//!
//! Heuristic product metadata extraction from e-commerce pages.
//!
//! Given an arbitrary, uncontrolled product URL, this library fetches the
//! page's HTML and recovers a best-effort product name, image, price, and
//! currency without a site-specific adapter. Data sources are fused in
//! decreasing trust order: Schema.org JSON-LD structured data, then Open
//! Graph / Twitter-card / generic meta tags, then fallback heuristics
//! (document `<title>` text, currency inference from raw price text).
//!
//! ## Quick Start
//!
//! ```rust
//! use product_page_parser::parse_product_page;
//!
//! let html = r#"<html><head>
//! <meta property="og:title" content="Wooden Rattle">
//! <meta property="og:image" content="/img/rattle.jpg">
//! <meta property="product:price:amount" content="12,50">
//! <meta property="product:price:currency" content="EUR">
//! </head><body></body></html>"#;
//!
//! let product = parse_product_page(html, "https://shop.example/item/1")?;
//! assert_eq!(product.name.as_deref(), Some("Wooden Rattle"));
//! assert_eq!(product.image_url.as_deref(), Some("https://shop.example/img/rattle.jpg"));
//! assert_eq!(product.price, Some(12.5));
//! assert_eq!(product.currency.as_deref(), Some("EUR"));
//! # Ok::<(), product_page_parser::Error>(())
//! ```
//!
//! ## Failure model
//!
//! Partial information is always preferable to an error: every field is
//! independently optional, parse failures degrade at the smallest possible
//! granularity, and a total fetch failure yields an all-absent result. The
//! only hard failure is a structurally invalid input URL.

mod error;
mod result;

/// DOM operations adapter over `dom_query`.
pub mod dom;

/// Character encoding detection and transcoding.
pub mod encoding;

/// Page fetcher boundary (blocking GET with browser headers).
pub mod fetch;

/// Product metadata extraction (JSON-LD, meta tags, orchestration).
pub mod metadata;

/// Compiled patterns, selector priority lists, and fixed configuration.
pub mod patterns;

/// Price normalization and currency inference.
pub mod price;

/// URL validation and relative resolution.
pub mod url_utils;

use url::Url;

// Public API - re-exports
pub use error::{Error, Result};
pub use result::ParsedProduct;

/// Extracts product metadata from an HTML document.
///
/// Pure and stateless; `page_url` serves as the base for resolving a
/// relative image URL. Returns `Err` only when `page_url` is not an
/// absolute http(s) URL.
pub fn parse_product_page(html: &str, page_url: &str) -> Result<ParsedProduct> {
    let base = require_absolute(page_url)?;
    let doc = dom::parse(html);
    Ok(metadata::extract_product(&doc, &base))
}

/// Extracts product metadata from raw HTML bytes.
///
/// Detects the declared character encoding and transcodes to UTF-8 before
/// extraction; invalid sequences are replaced rather than failing.
pub fn parse_product_bytes(html: &[u8], page_url: &str) -> Result<ParsedProduct> {
    let text = encoding::decode_to_utf8(html);
    parse_product_page(&text, page_url)
}

/// Fetches a product page and extracts its metadata.
///
/// The URL is validated before any fetch is attempted; a missing or
/// malformed URL is rejected with [`Error::InvalidUrl`]. Transport
/// failures are logged and absorbed: extraction runs on empty content and
/// the result is all-absent, never an error.
pub fn fetch_product_page(url: &str) -> Result<ParsedProduct> {
    let target = require_absolute(url)?;

    let html = match fetch::fetch_page(&target) {
        Ok(body) => body,
        Err(err) => {
            tracing::warn!(url, error = %err, "product page fetch failed");
            String::new()
        }
    };

    let doc = dom::parse(&html);
    Ok(metadata::extract_product(&doc, &target))
}

fn require_absolute(url: &str) -> Result<Url> {
    let (is_absolute, parsed) = url_utils::is_absolute_url(url);
    match parsed {
        Some(parsed) if is_absolute => Ok(parsed),
        _ => Err(Error::InvalidUrl(url.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_page_url_rejected() {
        assert!(matches!(
            parse_product_page("<html></html>", "not a url"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_product_page("<html></html>", "/relative/path"),
            Err(Error::InvalidUrl(_))
        ));
        assert!(matches!(
            parse_product_page("<html></html>", ""),
            Err(Error::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_bytes_entry_point_transcodes() {
        let html = b"<html><head><meta charset=\"ISO-8859-1\">\
<meta property=\"og:title\" content=\"B\xE9b\xE9 Mobile\"></head></html>";

        let result = parse_product_bytes(html, "https://shop.example/p/1");
        let Ok(product) = result else {
            panic!("extraction failed");
        };
        assert_eq!(product.name.as_deref(), Some("B\u{e9}b\u{e9} Mobile"));
    }
}
