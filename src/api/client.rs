//! HTTP API Client
//!
//! Functions for fetching the CVE feed from the backing REST API.

use gloo_net::http::Request;

use crate::state::global::CveRecord;

/// Default API base URL, resolvable at build time via `CVE_API_BASE`
pub const DEFAULT_API_BASE: &str = match option_env!("CVE_API_BASE") {
    Some(url) => url,
    None => "http://127.0.0.1:5000",
};

/// Local storage key holding a runtime override for the API base URL
const API_URL_STORAGE_KEY: &str = "cve_dashboard_api_url";

/// Failure modes of a feed fetch
///
/// The dashboard collapses all variants into one fixed user-facing message;
/// the variant detail goes to the browser console only.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchError {
    /// Connection, DNS, or other transport failure
    Network(String),
    /// Server answered with a non-2xx status
    Http(u16),
    /// Response body was not a valid CVE list
    Parse(String),
}

impl std::fmt::Display for FetchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchError::Network(detail) => write!(f, "network error: {}", detail),
            FetchError::Http(status) => write!(f, "unexpected HTTP status {}", status),
            FetchError::Parse(detail) => write!(f, "parse error: {}", detail),
        }
    }
}

/// Get the API base URL from local storage or use the build-time default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item(API_URL_STORAGE_KEY) {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Fetch the CVE feed
///
/// A single best-effort attempt: no retry, no timeout, no pagination.
pub async fn fetch_cves() -> Result<Vec<CveRecord>, FetchError> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/api/cves", api_base))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Http(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Network("connection refused".to_string()).to_string(),
            "network error: connection refused"
        );
        assert_eq!(
            FetchError::Http(503).to_string(),
            "unexpected HTTP status 503"
        );
        assert_eq!(
            FetchError::Parse("expected an array".to_string()).to_string(),
            "parse error: expected an array"
        );
    }
}
