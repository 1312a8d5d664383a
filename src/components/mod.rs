//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod cve_table;
pub mod loading;
pub mod pie_chart;

pub use cve_table::CveTable;
pub use loading::Loading;
pub use pie_chart::PieChart;
