//! Loading Component

use leptos::*;

/// Indicator shown while the feed fetch is outstanding
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center justify-center py-12 space-x-3">
            <div class="loading-spinner w-6 h-6" />
            <span class="text-gray-400">"Loading CVE data..."</span>
        </div>
    }
}
