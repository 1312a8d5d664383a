//! App Root Component
//!
//! Page chrome and the dashboard view with its state provider.

use leptos::*;
use wasm_bindgen::JsValue;

use crate::pages::Dashboard;
use crate::state::global::provide_dashboard_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide row-expansion state to the component tree
    provide_dashboard_state();

    // Stamped once at mount
    let last_updated = String::from(
        js_sys::Date::new_0().to_locale_string("default", &JsValue::UNDEFINED),
    );

    view! {
        <div class="min-h-screen bg-gray-900 text-white px-6 py-8">
            <header class="mb-8">
                <h1 class="text-3xl font-bold">"Threat Intelligence Dashboard"</h1>
                <p class="text-xs text-gray-400 mt-2">
                    {format!("Last updated: {}", last_updated)}
                </p>
            </header>

            <main class="container mx-auto">
                <Dashboard />
            </main>
        </div>
    }
}
