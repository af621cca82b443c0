//! Character encoding detection and transcoding.
//!
//! Product pages declare charsets inconsistently; fetched bytes are sniffed
//! and converted to UTF-8 before parsing, replacing invalid sequences with
//! the Unicode replacement character rather than failing.

use std::sync::LazyLock;

use encoding_rs::{Encoding, UTF_8};
use regex::Regex;

/// Matches the charset declaration in either meta form:
/// `<meta charset="...">` or
/// `<meta http-equiv="Content-Type" content="...; charset=...">`.
#[allow(clippy::expect_used)]
static CHARSET_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)charset\s*=\s*["']?([a-zA-Z0-9_\-]+)"#).expect("CHARSET_RE regex")
});

/// Number of leading bytes examined for a charset declaration.
const SNIFF_WINDOW: usize = 1024;

/// Detect the declared character encoding, defaulting to UTF-8.
#[must_use]
pub fn sniff_encoding(html: &[u8]) -> &'static Encoding {
    let head = &html[..html.len().min(SNIFF_WINDOW)];
    let head_str = String::from_utf8_lossy(head);

    CHARSET_RE
        .captures(&head_str)
        .and_then(|caps| caps.get(1))
        .and_then(|label| Encoding::for_label(label.as_str().as_bytes()))
        .unwrap_or(UTF_8)
}

/// Transcode HTML bytes to a UTF-8 string, lossily.
#[must_use]
pub fn decode_to_utf8(html: &[u8]) -> String {
    let encoding = sniff_encoding(html);

    if encoding == UTF_8 {
        return String::from_utf8_lossy(html).into_owned();
    }

    let (decoded, _, _) = encoding.decode(html);
    decoded.into_owned()
}
