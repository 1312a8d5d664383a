//! Dashboard Page
//!
//! Main view: fetches the CVE feed once on mount, then renders the severity
//! chart and record table from the derived report.

use leptos::*;

use crate::api::{self, FetchError};
use crate::components::{CveTable, Loading, PieChart};
use crate::state::global::CveReport;

/// Fixed message shown for any fetch failure
pub const FETCH_FAILED_MESSAGE: &str = "Failed to fetch CVE data. Please try again later.";

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    // One best-effort fetch, owned by this view's reactive scope: a result
    // arriving after the scope is disposed is dropped, never applied.
    let report = create_local_resource(|| (), |_| load_report());

    view! {
        <div class="space-y-10">
            {move || match report.get() {
                None => view! { <Loading /> }.into_view(),
                Some(Err(_)) => view! {
                    <p class="text-red-500">{FETCH_FAILED_MESSAGE}</p>
                }
                .into_view(),
                Some(Ok(report)) if report.is_empty() => view! {
                    <p class="text-gray-400">"No CVE data available."</p>
                }
                .into_view(),
                Some(Ok(report)) => view! {
                    <section class="bg-gray-800 rounded-xl p-6">
                        <h2 class="text-xl font-semibold mb-4">"Severity Levels"</h2>
                        <PieChart counts=report.severity_counts.clone() />
                    </section>

                    <section>
                        <h2 class="text-xl font-semibold mb-4">"Recent CVE Entries"</h2>
                        <CveTable records=report.records.clone() />
                    </section>
                }
                .into_view(),
            }}
        </div>
    }
}

/// Run the fetch and derive the report, logging failure detail to the console
async fn load_report() -> Result<CveReport, FetchError> {
    match api::fetch_cves().await {
        Ok(records) => Ok(CveReport::from_records(records)),
        Err(err) => {
            web_sys::console::error_1(&format!("CVE fetch failed: {}", err).into());
            Err(err)
        }
    }
}
