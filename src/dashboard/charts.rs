//! Chart generation and rendering for the dashboard.
//!
//! This module creates ECharts visualizations of the analytics:
//! - **Monthly Spending**: a bar chart of the total spent in each month
//! - **Spending by Category**: a pie chart of all time spending per category
//!
//! Each chart is generated as JSON configuration for the ECharts library and
//! rendered with an HTML container and an inline initialization script, so the
//! charts are redrawn whenever htmx swaps in new dashboard content.

use charming::{
    Chart,
    component::{Axis, Grid, Legend},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, Color, ItemStyle, JsFunction,
        Tooltip, Trigger,
    },
    series::{Pie, bar},
};
use maud::{Markup, PreEscaped, html};

use crate::{
    analytics::Analytics,
    category::{category_color, category_name},
};

/// The colour of the monthly spending bars.
const BAR_COLOR: &str = "#3B82F6";

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The title shown above the chart
    pub title: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Creates the monthly spending and category charts from the analytics.
pub(super) fn build_dashboard_charts(analytics: &Analytics) -> [DashboardChart; 2] {
    [
        DashboardChart {
            id: "monthly-spending-chart",
            title: "Monthly Spending",
            options: monthly_spending_chart(analytics).to_string(),
        },
        DashboardChart {
            id: "category-spending-chart",
            title: "Spending by Category",
            options: category_spending_chart(analytics).to_string(),
        },
    ]
}

/// Renders the chart containers followed by the script that draws them.
///
/// Shows a prompt instead when there is nothing to chart.
pub(super) fn charts_view(charts: &[DashboardChart], has_data: bool) -> Markup {
    html!(
        section
            id="charts"
            class="w-full mx-auto mb-4"
        {
            div class="grid grid-cols-1 lg:grid-cols-2 gap-6"
            {
                @for chart in charts {
                    div class="bg-white dark:bg-gray-800 border border-gray-200 dark:border-gray-700 rounded-lg p-6 shadow-md"
                    {
                        h3 class="text-xl font-semibold mb-4" { (chart.title) }

                        @if has_data {
                            div
                                id=(chart.id)
                                class="min-h-[320px] rounded"
                            {}
                        } @else {
                            p class="text-gray-500 text-center py-8"
                            {
                                "Charts will show up here once you add some transactions."
                            }
                        }
                    }
                }
            }

            @if has_data {
                (charts_script(charts))
            }
        }
    )
}

/// Generates the JavaScript that initializes the ECharts instances.
fn charts_script(charts: &[DashboardChart]) -> Markup {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    if (!chartDom || typeof echarts === "undefined") return;
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);
                }})();"#,
                chart.id,
                escape_script_text(&chart.options)
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html!(script { (PreEscaped(script_content)) })
}

/// Stop text placed inside a `<script>` element from closing the element or opening a comment.
///
/// Category names are free text and end up in the chart options.
fn escape_script_text(text: &str) -> String {
    text.replace("</", "<\\/").replace("<!--", "<\\!--")
}

/// A bar per month with the total spent that month, oldest month first.
fn monthly_spending_chart(analytics: &Analytics) -> Chart {
    let (labels, values): (Vec<String>, Vec<f64>) = analytics
        .monthly_spending
        .iter()
        .map(|(month, amount)| (month.clone(), *amount))
        .unzip();

    Chart::new()
        .tooltip(currency_tooltip().trigger(Trigger::Axis).axis_pointer(
            AxisPointer::new().type_(AxisPointerType::Shadow),
        ))
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
        )
        .series(
            bar::Bar::new()
                .name("Amount")
                .item_style(ItemStyle::new().color(BAR_COLOR))
                .data(values),
        )
}

/// A slice per category sized by its all time spending, coloured with the category colour.
fn category_spending_chart(analytics: &Analytics) -> Chart {
    let (colors, data): (Vec<Color>, Vec<(f64, String)>) = analytics
        .category_spending
        .iter()
        .map(|(category, amount)| {
            (
                Color::from(category_color(category)),
                (*amount, category_name(category).to_owned()),
            )
        })
        .unzip();

    Chart::new()
        .color(colors)
        .tooltip(currency_tooltip().trigger(Trigger::Item))
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Spending")
                .radius("60%")
                .data(data),
        )
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
    Tooltip::new().value_formatter(currency_formatter())
}
