//! Page fetcher boundary.
//!
//! Issues a blocking GET with a realistic browser user agent and language
//! header. Non-2xx statuses are not transport errors: whatever body came
//! back is still handed to the extractor, best-effort. Transport failures
//! surface as [`crate::Error::Fetch`] and are absorbed by the orchestrator.

use std::sync::LazyLock;
use std::time::Duration;

use url::Url;

use crate::encoding;
use crate::error::Result;
use crate::patterns::{ACCEPT_LANGUAGE, USER_AGENT};

/// Request timeout; the only timeout in the pipeline.
const TIMEOUT_SECS: u64 = 20;

/// Shared HTTP agent for connection pooling.
static HTTP_AGENT: LazyLock<ureq::Agent> = LazyLock::new(|| {
    ureq::Agent::config_builder()
        .timeout_global(Some(Duration::from_secs(TIMEOUT_SECS)))
        .http_status_as_error(false)
        .build()
        .into()
});

/// Fetch a product page and decode its body to UTF-8.
pub fn fetch_page(url: &Url) -> Result<String> {
    let response = HTTP_AGENT
        .get(url.as_str())
        .header("User-Agent", USER_AGENT)
        .header("Accept-Language", ACCEPT_LANGUAGE)
        .call()?;

    let status = response.status();
    if !status.is_success() {
        tracing::debug!(%url, %status, "non-success status, reading body anyway");
    }

    let body = response.into_body().read_to_vec()?;
    Ok(encoding::decode_to_utf8(&body))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_refused_is_an_error() {
        // Port 9 (discard) is closed on any sane host; the transport error
        // must surface here so the orchestrator can absorb it.
        let Ok(url) = Url::parse("http://127.0.0.1:9/product") else {
            panic!("invalid test URL");
        };
        assert!(fetch_page(&url).is_err());
    }
}
