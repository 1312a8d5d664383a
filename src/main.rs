//! Threat Intelligence Dashboard
//!
//! Single-page dashboard for recent CVE data built with Leptos (WASM).
//!
//! # Features
//!
//! - Severity distribution pie chart
//! - Expandable table of recent CVE entries with NVD detail links
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It fetches the CVE feed over HTTP once on mount and renders
//! everything from that single snapshot.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
