//! Application router configuration.

use axum::{
    Router, middleware,
    response::Redirect,
    routing::get,
};

use crate::{
    AppState,
    dashboard::{get_chart_panel, get_dashboard_page},
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    transactions::{get_transactions_page, get_transactions_table},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(endpoints::TRANSACTIONS_TABLE, get(get_transactions_table))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::DASHBOARD_CHART, get(get_chart_panel))
        .layer(middleware::from_fn(logging_middleware))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;

    use crate::{AppState, Dataset, endpoints};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let dataset = Dataset::from_json(
            r#"{
                "customers": [{ "id": 1, "name": "Ahmed Ali" }],
                "transactions": [
                    { "id": 1, "customer_id": 1, "date": "2022-01-01", "amount": 1000 }
                ]
            }"#,
        )
        .unwrap();
        let app = build_router(AppState::new(dataset));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn transactions_page_is_served() {
        let server = get_test_server();

        let response = server.get(endpoints::TRANSACTIONS_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("Ahmed Ali"));
    }

    #[tokio::test]
    async fn dashboard_page_is_served() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_VIEW).await;

        response.assert_status_ok();
        assert!(response.text().contains("echarts"));
    }

    #[tokio::test]
    async fn unknown_route_returns_404_page() {
        let server = get_test_server();

        let response = server.get("/no/such/page").await;

        response.assert_status_not_found();
        assert!(response.text().contains("404"));
    }
}
