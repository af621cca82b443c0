//! DOM Operations Adapter
//!
//! Thin wrappers over the `dom_query` crate, exposing just the operations
//! the extractor needs: parsing, attribute reads, and text content.

// Re-export core types for external use
pub use dom_query::{Document, Selection};

// Re-export StrTendril for zero-copy text passing
pub use tendril::StrTendril;

/// Parse an HTML string into a document.
#[inline]
#[must_use]
pub fn parse(html: &str) -> Document {
    Document::from(html)
}

/// Get any attribute value.
#[inline]
#[must_use]
pub fn get_attribute(sel: &Selection, name: &str) -> Option<String> {
    sel.attr(name).map(|s| s.to_string())
}

/// Get all text content of node and descendants.
///
/// Returns `StrTendril`; use `.to_string()` only when owned storage is
/// needed.
#[inline]
#[must_use]
pub fn text_content(sel: &Selection) -> StrTendril {
    sel.text()
}

/// Select the first element matching `selector`, if any.
#[must_use]
pub fn first_match<'a>(doc: &'a Document, selector: &str) -> Option<Selection<'a>> {
    let matches = doc.select(selector);
    let node = matches.nodes().first().copied()?;
    Some(Selection::from(node))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_match_takes_document_order() {
        let doc = parse(
            r#"<meta property="og:image" content="first.jpg">
               <meta property="og:image" content="second.jpg">"#,
        );
        let Some(meta) = first_match(&doc, r#"meta[property="og:image"]"#) else {
            panic!("expected a match");
        };
        assert_eq!(get_attribute(&meta, "content"), Some("first.jpg".to_string()));
    }

    #[test]
    fn test_first_match_none_for_missing_element() {
        let doc = parse("<html><body></body></html>");
        assert!(first_match(&doc, r#"meta[name="price"]"#).is_none());
    }

    #[test]
    fn test_text_content() {
        let doc = parse("<title>Cool Gadget - Shop</title>");
        let Some(title) = first_match(&doc, "title") else {
            panic!("expected a title");
        };
        assert_eq!(&*text_content(&title), "Cool Gadget - Shop");
    }
}
