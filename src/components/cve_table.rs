//! CVE Table Component
//!
//! Expandable table of vulnerability records.

use leptos::*;

use crate::state::global::{summary_preview, CveRecord, DashboardState};

/// Fixed severity-to-text-color mapping for the table
fn severity_color(label: &str) -> &'static str {
    match label {
        "CRITICAL" => "#f87171", // Red
        "HIGH" => "#facc15",     // Yellow
        "MEDIUM" => "#34d399",   // Green
        "LOW" => "#60a5fa",      // Blue
        _ => "#e2e8f0",          // Gray, unknown/other
    }
}

/// Format a publish date for the table
///
/// The report never carries "N/A" entries, but the column renders any record;
/// a date string chrono cannot parse is shown verbatim.
fn format_published(record: &CveRecord) -> String {
    if record.published_unknown() {
        return "N/A".to_string();
    }
    match record.published_at() {
        Some(dt) => dt.format("%b %d, %Y").to_string(),
        None => record.published.clone(),
    }
}

/// CVE table component
#[component]
pub fn CveTable(
    /// Records to display, already filtered and sorted
    records: Vec<CveRecord>,
) -> impl IntoView {
    view! {
        <table class="w-full border-collapse rounded-lg overflow-hidden text-sm">
            <thead>
                <tr class="bg-gray-800 text-left">
                    <th class="border border-gray-700 px-4 py-2">"CVE ID"</th>
                    <th class="border border-gray-700 px-4 py-2">"Summary"</th>
                    <th class="border border-gray-700 px-4 py-2">"Published"</th>
                    <th class="border border-gray-700 px-4 py-2">"Severity"</th>
                </tr>
            </thead>
            <tbody>
                {records
                    .into_iter()
                    .enumerate()
                    .map(|(idx, record)| {
                        let zebra = idx % 2 == 1;
                        view! { <CveRow record=record zebra=zebra /> }
                    })
                    .collect_view()}
            </tbody>
        </table>
    }
}

/// One table row with an expandable summary cell
#[component]
fn CveRow(record: CveRecord, zebra: bool) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let row_id = record.id.clone();
    let expanded = create_memo(move |_| state.is_expanded(&row_id));

    let severity_label = record.severity_label().to_string();
    let color = severity_color(&severity_label);
    let published = format_published(&record);

    let summary_cell = match summary_preview(&record.summary) {
        None => view! { <span>{record.summary.clone()}</span> }.into_view(),
        Some(preview) => {
            let full = record.summary.clone();
            let toggle_id = record.id.clone();
            view! {
                <span>
                    {move || if expanded.get() { full.clone() } else { preview.clone() }}
                </span>
                <button
                    on:click=move |_| state.toggle_row(&toggle_id)
                    class="ml-2 text-blue-400 text-xs"
                >
                    {move || if expanded.get() { "Show Less" } else { "Show More" }}
                </button>
            }
            .into_view()
        }
    };

    let row_class = if zebra {
        "bg-gray-800"
    } else {
        "bg-gray-900"
    };

    view! {
        <tr class=row_class>
            <td class="border border-gray-700 px-4 py-2 whitespace-nowrap">
                <a
                    href=record.detail_url()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-blue-400 underline"
                >
                    {record.id.clone()}
                </a>
            </td>
            <td class="border border-gray-700 px-4 py-2">{summary_cell}</td>
            <td class="border border-gray-700 px-4 py-2 whitespace-nowrap">{published}</td>
            <td
                class="border border-gray-700 px-4 py-2 whitespace-nowrap"
                style=format!("color: {}", color)
            >
                {severity_label}
            </td>
        </tr>
    }
}
