//! Error types for product-page-parser.
//!
//! Only a structurally invalid input URL is a hard failure; every other
//! problem degrades to absent fields in the extraction result.

/// Error type for extraction operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input URL is missing, relative, or not http/https.
    #[error("invalid product page URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure while fetching the page.
    ///
    /// Never crosses the public boundary: `fetch_product_page` absorbs it
    /// into an all-absent result.
    #[error("page fetch failed: {0}")]
    Fetch(#[from] ureq::Error),
}

/// Result type alias for extraction operations.
pub type Result<T> = std::result::Result<T, Error>;
