//! URL Utility Functions
//!
//! Absolute-URL validation for request input and relative resolution for
//! image URLs pulled out of page markup.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether the URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    // Must start with http:// or https://
    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            // Verify it has a host
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Resolve a possibly relative URL against a base.
///
/// Absolute input passes through unchanged; relative input is joined
/// against the base with standard URL-resolution rules. Input that cannot
/// be parsed even with the base resolves to `None` rather than erroring.
#[must_use]
pub fn resolve(raw: &str, base: &Url) -> Option<String> {
    let raw = raw.trim();

    if raw.is_empty() {
        return None;
    }

    match Url::parse(raw) {
        Ok(absolute) => Some(absolute.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            base.join(raw).ok().map(|resolved| resolved.to_string())
        }
        Err(_) => None,
    }
}
