//! State Management
//!
//! Dashboard state and the pure record-preparation core.

pub mod global;

pub use global::{provide_dashboard_state, CveRecord, CveReport, DashboardState};
