//! API Access
//!
//! HTTP client for the CVE feed endpoint.

pub mod client;

pub use client::{fetch_cves, get_api_base, FetchError};
