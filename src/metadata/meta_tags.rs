//! Meta-tag resolution.
//!
//! Each logical field resolves through an ordered selector list (Open Graph
//! before Twitter cards before generic tags); the first non-empty value
//! wins. Values come from the `content` attribute, with `href` as the
//! fallback for `<link>`-style tags.

use dom_query::Document;

use crate::dom;

/// Resolve one logical field through its selector priority list.
#[must_use]
pub fn pick_meta(doc: &Document, selectors: &[&str]) -> Option<String> {
    for selector in selectors {
        let Some(element) = dom::first_match(doc, selector) else {
            continue;
        };

        let value = dom::get_attribute(&element, "content")
            .filter(|content| !content.is_empty())
            .or_else(|| dom::get_attribute(&element, "href").filter(|href| !href.is_empty()));

        if value.is_some() {
            return value;
        }
    }

    None
}

/// Text of the first `<title>` element, the lowest-trust title source.
#[must_use]
pub fn document_title(doc: &Document) -> Option<String> {
    let title = dom::first_match(doc, "title")?;
    let text = dom::text_content(&title).trim().to_string();
    if text.is_empty() {
        return None;
    }
    Some(text)
}
