//! Compiled regex patterns, selector priority lists, and fixed configuration.
//!
//! All patterns are compiled once at first use via `LazyLock`. Selector
//! lists are ordered by decreasing trust; the first non-empty match wins.

#![allow(clippy::expect_used)]

use std::sync::LazyLock;

use regex::Regex;

// =============================================================================
// Fetch Configuration
// =============================================================================

/// Desktop-browser user agent sent with page fetches. Storefronts routinely
/// refuse requests with default library user agents.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 13_6) \
AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Biases localized storefronts toward English-locale pricing text.
pub const ACCEPT_LANGUAGE: &str = "en-US,en;q=0.9";

// =============================================================================
// Selector Priority Lists
// =============================================================================

/// Embedded structured-data blocks.
pub const JSON_LD_SELECTOR: &str = r#"script[type="application/ld+json"]"#;

/// Title sources, most trusted first. The `<title>` element text is the
/// final fallback, applied by the orchestrator.
pub const TITLE_META_SELECTORS: &[&str] = &[
    r#"meta[property="og:title"]"#,
    r#"meta[name="twitter:title"]"#,
    r#"meta[name="title"]"#,
];

/// Image sources, most trusted first. The `link[rel]` entry is why the
/// meta resolver falls back from `content` to `href`.
pub const IMAGE_META_SELECTORS: &[&str] = &[
    r#"meta[property="og:image"]"#,
    r#"meta[property="og:image:url"]"#,
    r#"meta[name="twitter:image"]"#,
    r#"meta[itemprop="image"]"#,
    r#"link[rel="image_src"]"#,
];

/// Price-amount sources, most trusted first.
pub const PRICE_META_SELECTORS: &[&str] = &[
    r#"meta[property="product:price:amount"]"#,
    r#"meta[property="og:price:amount"]"#,
    r#"meta[name="price"]"#,
    r#"meta[itemprop="price"]"#,
];

/// Price-currency sources, most trusted first.
pub const CURRENCY_META_SELECTORS: &[&str] = &[
    r#"meta[property="product:price:currency"]"#,
    r#"meta[property="og:price:currency"]"#,
    r#"meta[itemprop="priceCurrency"]"#,
];

// =============================================================================
// Price Normalization Patterns
// =============================================================================

/// Everything that is not a digit, separator, or minus sign.
pub static PRICE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^0-9.,\-]").expect("PRICE_NOISE regex"));

/// A trailing comma followed by one or two digits marks a decimal comma.
/// Three digits (`1,234`) read as a thousands group instead.
pub static COMMA_DECIMAL_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r",[0-9]{1,2}$").expect("COMMA_DECIMAL_TAIL regex"));

/// Symmetric rule for a trailing dot.
pub static DOT_DECIMAL_TAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.[0-9]{1,2}$").expect("DOT_DECIMAL_TAIL regex"));

/// First contiguous numeric substring with an optional fraction.
pub static NUMERIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]+(?:\.[0-9]+)?").expect("NUMERIC regex"));

// =============================================================================
// Currency Inference Patterns
// =============================================================================

/// Currency symbols recognized anywhere in a raw price string.
pub static CURRENCY_SYMBOL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[$€£¥]").expect("CURRENCY_SYMBOL regex"));

/// Three-uppercase-letter token, ISO-4217 style (`USD`, `EUR`, ...).
pub static CURRENCY_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Z]{3}\b").expect("CURRENCY_CODE regex"));
