//! Dashboard module
//!
//! Provides the page that charts per-day transaction totals for a selected
//! customer, as a line or bar chart.

mod aggregation;
mod charts;
mod handlers;

pub use handlers::{get_chart_panel, get_dashboard_page};
