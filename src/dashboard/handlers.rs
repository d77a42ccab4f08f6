//! Dashboard HTTP handlers and view rendering.
//!
//! This module contains:
//! - Route handlers for displaying the dashboard and refreshing the chart
//! - HTML view functions for rendering the dashboard UI

use std::sync::Arc;

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;

use crate::{
    AppState, Error,
    dataset::Dataset,
    endpoints,
    html::{FORM_LABEL_STYLE, FORM_SELECT_STYLE, PAGE_CONTAINER_STYLE, base},
    model::{Customer, CustomerID},
    navigation::NavBar,
};

use super::{
    aggregation::{daily_totals, transactions_for_customer},
    charts::{ChartKind, DashboardChart, chart_view, daily_totals_chart, echarts_script_link},
};

/// The container element ID for the per-day totals chart.
const DAILY_TOTALS_CHART_ID: &str = "daily-totals-chart";

/// The state needed for displaying the dashboard page.
#[derive(Debug, Clone)]
pub struct DashboardState {
    /// The loaded customer transaction dataset.
    dataset: Arc<Dataset>,
}

impl FromRef<AppState> for DashboardState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            dataset: state.dataset.clone(),
        }
    }
}

/// The chart selection taken from the URL query string.
#[derive(Debug, Default, Deserialize)]
pub struct ChartQuery {
    /// The customer to chart. Defaults to the first customer in the dataset.
    customer: Option<CustomerID>,
    /// How to draw the totals. Defaults to a line chart.
    kind: Option<ChartKind>,
}

/// Display a page with the per-day transaction totals chart for a customer.
pub async fn get_dashboard_page(
    State(state): State<DashboardState>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, Error> {
    let nav_bar = NavBar::new(endpoints::DASHBOARD_VIEW);
    let kind = query.kind.unwrap_or_default();

    let Some(customer) = select_customer(&state.dataset, query.customer)? else {
        return Ok(dashboard_no_data_view(nav_bar).into_response());
    };

    Ok(dashboard_view(nav_bar, &state.dataset, customer, kind).into_response())
}

/// Render only the chart panel.
///
/// Requested by htmx whenever the customer or chart kind selection changes;
/// the response replaces the previous panel, so the old drawing is discarded
/// before the new one is initialized.
pub async fn get_chart_panel(
    State(state): State<DashboardState>,
    Query(query): Query<ChartQuery>,
) -> Result<Response, Error> {
    let kind = query.kind.unwrap_or_default();

    let Some(customer) = select_customer(&state.dataset, query.customer)? else {
        return Err(Error::NotFound);
    };

    Ok(chart_panel(&state.dataset, customer, kind).into_response())
}

/// Resolve the selected customer.
///
/// An explicit ID must match a customer in the dataset; with no ID the first
/// customer is selected. Returns `None` only when the dataset has no
/// customers at all.
///
/// # Errors
/// Returns [Error::NotFound] if an explicit ID matches no customer.
fn select_customer(
    dataset: &Dataset,
    requested: Option<CustomerID>,
) -> Result<Option<&Customer>, Error> {
    match requested {
        Some(id) => dataset.customer(id).map(Some),
        None => Ok(dataset.customers().first()),
    }
}

/// Builds the chart panel for one customer: the chart container and its
/// initialization script, or an explicit message when the customer has no
/// transactions to aggregate.
fn chart_panel(dataset: &Dataset, customer: &Customer, kind: ChartKind) -> Markup {
    let transactions = transactions_for_customer(dataset, customer.id);
    let totals = daily_totals(&transactions);

    if totals.is_empty() {
        return html!(
            p
                data-empty-state="true"
                class="px-6 py-8 text-center text-gray-900 dark:text-white"
            {
                "No transactions for " (customer.name) " yet."
            }
        );
    }

    let chart = DashboardChart {
        id: DAILY_TOTALS_CHART_ID,
        options: daily_totals_chart(kind, &customer.name, &totals).to_string(),
    };

    chart_view(&chart)
}

/// Renders the dashboard page when the dataset contains no customers.
fn dashboard_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class="flex flex-col items-center px-6 py-8 mx-auto text-gray-900 dark:text-white"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "Charts will show up here once the dataset contains customers
                and transactions."
            }
        }
    );

    base("Dashboard", &[], &content)
}

/// Renders the main dashboard page with the selection controls and chart.
fn dashboard_view(
    nav_bar: NavBar,
    dataset: &Dataset,
    selected_customer: &Customer,
    kind: ChartKind,
) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="space-y-4 lg:max-w-3xl lg:w-full lg:mx-auto"
            {
                header class="flex justify-between flex-wrap items-end"
                {
                    h1 class="text-xl font-bold" { "Dashboard" }
                }

                form
                    hx-get=(endpoints::DASHBOARD_CHART)
                    hx-target="#chart-panel"
                    hx-swap="innerHTML"
                    hx-trigger="change"
                    class="grid grid-cols-1 md:grid-cols-2 gap-4"
                {
                    div
                    {
                        label for="customer" class=(FORM_LABEL_STYLE) { "Customer" }

                        select name="customer" id="customer" class=(FORM_SELECT_STYLE)
                        {
                            @for customer in dataset.customers() {
                                option
                                    value=(customer.id)
                                    selected[customer.id == selected_customer.id]
                                {
                                    (customer.name)
                                }
                            }
                        }
                    }

                    div
                    {
                        label for="kind" class=(FORM_LABEL_STYLE) { "Chart type" }

                        select name="kind" id="kind" class=(FORM_SELECT_STYLE)
                        {
                            option
                                value=(ChartKind::Line.as_query_value())
                                selected[kind == ChartKind::Line]
                            {
                                "Line"
                            }
                            option
                                value=(ChartKind::Bar.as_query_value())
                                selected[kind == ChartKind::Bar]
                            {
                                "Bar"
                            }
                        }
                    }
                }

                section id="chart-panel" class="w-full mx-auto mb-4"
                {
                    (chart_panel(dataset, selected_customer, kind))
                }
            }
        }
    );

    base("Dashboard", &[echarts_script_link()], &content)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        extract::{Query, State},
        response::Response,
    };
    use scraper::{Html, Selector};

    use crate::{Error, dataset::Dataset};

    use super::{ChartQuery, DashboardState, get_chart_panel, get_dashboard_page};

    fn get_test_state() -> DashboardState {
        let dataset = Dataset::from_json(
            r#"{
                "customers": [
                    { "id": 1, "name": "Ahmed Ali" },
                    { "id": 2, "name": "Aya Elsayed" },
                    { "id": 3, "name": "Sarah Reda" }
                ],
                "transactions": [
                    { "id": 1, "customer_id": 1, "date": "2022-01-01", "amount": 1000 },
                    { "id": 2, "customer_id": 1, "date": "2022-01-02", "amount": 2000 },
                    { "id": 3, "customer_id": 2, "date": "2022-01-03", "amount": 550 }
                ]
            }"#,
        )
        .unwrap();

        DashboardState {
            dataset: Arc::new(dataset),
        }
    }

    fn chart_query(customer: Option<i64>, kind: Option<&str>) -> ChartQuery {
        ChartQuery {
            customer,
            kind: kind.map(|kind| serde_json::from_value(serde_json::json!(kind)).unwrap()),
        }
    }

    async fn parse_html(response: Response) -> Html {
        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX)
            .await
            .expect("Could not get response body");
        let text = String::from_utf8_lossy(&body).to_string();

        Html::parse_document(&text)
    }

    #[track_caller]
    fn assert_valid_html(html: &Html) {
        assert!(
            html.errors.is_empty(),
            "Got HTML parsing errors: {:?}",
            html.errors
        );
    }

    fn get_script_text(html: &Html) -> String {
        html.select(&Selector::parse("script").unwrap())
            .flat_map(|script| script.text())
            .collect()
    }

    #[tokio::test]
    async fn dashboard_page_loads_with_chart_for_first_customer() {
        let state = get_test_state();

        let response = get_dashboard_page(State(state), Query(ChartQuery::default()))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let chart_container = html
            .select(&Selector::parse("#daily-totals-chart").unwrap())
            .next();
        assert!(chart_container.is_some(), "Chart container not found");

        let script_text = get_script_text(&html);
        assert!(script_text.contains("echarts.init"), "Chart init script missing");
        assert!(
            script_text.contains("Ahmed Ali"),
            "Chart should default to the first customer"
        );
        assert!(
            script_text.contains("2022-01-01") && script_text.contains("2022-01-02"),
            "Chart should contain the customer's date labels"
        );
    }

    #[tokio::test]
    async fn dashboard_page_lists_all_customers_with_selection() {
        let state = get_test_state();

        let response = get_dashboard_page(State(state), Query(chart_query(Some(2), None)))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let options: Vec<_> = html
            .select(&Selector::parse("select[name='customer'] option").unwrap())
            .collect();
        assert_eq!(options.len(), 3, "Selector should list every customer");

        let selected: Vec<&str> = options
            .iter()
            .filter(|option| option.value().attr("selected").is_some())
            .map(|option| option.value().attr("value").unwrap())
            .collect();
        assert_eq!(selected, vec!["2"], "Only the requested customer should be selected");

        let script_text = get_script_text(&html);
        assert!(
            script_text.contains("2022-01-03"),
            "Chart should aggregate the selected customer's transactions"
        );
    }

    #[tokio::test]
    async fn chart_kind_selects_line_or_bar_series() {
        let line_response = get_dashboard_page(
            State(get_test_state()),
            Query(chart_query(Some(1), Some("line"))),
        )
        .await
        .unwrap();
        let bar_response = get_dashboard_page(
            State(get_test_state()),
            Query(chart_query(Some(1), Some("bar"))),
        )
        .await
        .unwrap();

        let line_script = get_script_text(&parse_html(line_response).await);
        let bar_script = get_script_text(&parse_html(bar_response).await);

        assert!(bar_script.contains("bar"), "Bar chart should use a bar series");
        assert!(
            !line_script.contains("bar"),
            "Line chart should not use a bar series"
        );
    }

    #[tokio::test]
    async fn customer_without_transactions_renders_no_data_panel() {
        let state = get_test_state();

        let response = get_dashboard_page(State(state), Query(chart_query(Some(3), None)))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let empty_state = html
            .select(&Selector::parse("p[data-empty-state='true']").unwrap())
            .next()
            .expect("No empty-state message found");
        let message = empty_state.text().collect::<String>();
        assert!(message.contains("Sarah Reda"), "Got message: {message}");

        assert!(
            !get_script_text(&html).contains("echarts.init"),
            "No chart should be initialized without data"
        );
    }

    #[tokio::test]
    async fn unknown_customer_id_is_not_found() {
        let state = get_test_state();

        let result = get_dashboard_page(State(state), Query(chart_query(Some(999), None))).await;

        assert_eq!(result.unwrap_err(), Error::NotFound);
    }

    #[tokio::test]
    async fn chart_panel_partial_contains_only_the_panel() {
        let state = get_test_state();

        let response = get_chart_panel(State(state), Query(chart_query(Some(1), None)))
            .await
            .unwrap();

        let body = response.into_body();
        let body = axum::body::to_bytes(body, usize::MAX).await.unwrap();
        let text = String::from_utf8_lossy(&body).to_string();

        assert!(text.contains("daily-totals-chart"), "{text}");
        assert!(text.contains("echarts.init"), "{text}");
        assert!(
            !text.contains("<html"),
            "Partial should not contain a full page: {text}"
        );
    }

    #[tokio::test]
    async fn dashboard_without_customers_prompts_for_data() {
        let dataset = Dataset::from_json(r#"{ "customers": [], "transactions": [] }"#).unwrap();
        let state = DashboardState {
            dataset: Arc::new(dataset),
        };

        let response = get_dashboard_page(State(state), Query(ChartQuery::default()))
            .await
            .unwrap();

        let html = parse_html(response).await;
        assert_valid_html(&html);

        let heading = html
            .select(&Selector::parse("h2").unwrap())
            .next()
            .expect("No prompt heading found");
        assert_eq!(heading.text().collect::<String>(), "Nothing here yet...");
    }
}
