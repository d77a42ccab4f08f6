//! The endpoint URIs of the application.

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying the transactions table with filter inputs.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The partial route that returns only the transaction table rows.
pub const TRANSACTIONS_TABLE: &str = "/transactions/table";
/// The page for displaying the per-day totals chart for a customer.
pub const DASHBOARD_VIEW: &str = "/dashboard";
/// The partial route that returns only the chart panel.
pub const DASHBOARD_CHART: &str = "/dashboard/chart";

// These tests are here so that we know the routes will parse as URIs.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_TABLE);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_CHART);
    }
}
