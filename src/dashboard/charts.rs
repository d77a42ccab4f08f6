//! Chart generation and rendering for the dashboard.
//!
//! Builds the per-day totals chart as JSON configuration for the ECharts
//! library, rendered with an HTML container and JavaScript initialization
//! code. The same aggregated data can be drawn as a line or a bar series.

use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Tooltip, Trigger,
    },
    series::{Line, bar},
};
use maud::{Markup, PreEscaped, html};
use serde::Deserialize;
use time::Date;

use crate::html::HeadElement;

use super::aggregation::DailyTotals;

/// The URL the ECharts library is loaded from.
const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@6.0.0/dist/echarts.min.js";

/// How the per-day totals should be drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(super) enum ChartKind {
    /// A single-series line chart.
    #[default]
    Line,
    /// One bar per distinct date.
    Bar,
}

impl ChartKind {
    pub(super) fn as_query_value(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
        }
    }
}

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// The script tag that loads the ECharts library, for the page head.
pub(super) fn echarts_script_link() -> HeadElement {
    HeadElement::ScriptLink(ECHARTS_SCRIPT_URL.to_owned())
}

/// Renders the chart container with its initialization script.
///
/// The script runs as soon as it is inserted, both on the initial page load
/// and when htmx swaps in a fresh panel, so every redraw starts from a new
/// ECharts instance on a new container instead of drawing over the old one.
pub(super) fn chart_view(chart: &DashboardChart) -> Markup {
    let script_content = format!(
        r#"(function() {{
            const chartDom = document.getElementById("{}");
            const chart = echarts.init(chartDom);
            const option = {};
            chart.setOption(option);

            window.addEventListener('resize', chart.resize);
        }})();"#,
        chart.id, chart.options
    );

    html!(
        div
            id=(chart.id)
            class="min-h-[380px] w-full rounded dark:bg-gray-100"
        {}

        script { (PreEscaped(script_content)) }
    )
}

/// Builds the per-day totals chart for one customer.
pub(super) fn daily_totals_chart(
    kind: ChartKind,
    customer_name: &str,
    totals: &DailyTotals,
) -> Chart {
    let labels: Vec<String> = totals.dates.iter().map(Date::to_string).collect();
    let values = totals.totals.clone();

    let chart = Chart::new()
        .title(
            Title::new()
                .text("Daily transaction totals")
                .subtext(customer_name),
        )
        .tooltip(currency_tooltip())
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(Axis::new().type_(AxisType::Category).data(labels))
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .axis_label(AxisLabel::new().formatter(currency_formatter())),
        );

    match kind {
        ChartKind::Line => chart.series(Line::new().name("Daily total").data(values)),
        ChartKind::Bar => chart.series(bar::Bar::new().name("Daily total").data(values)),
    }
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Creates a tooltip configuration for currency values
fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Axis)
        .value_formatter(currency_formatter())
        .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow))
}
