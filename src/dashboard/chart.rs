//! Chart generation for the dashboard.
//!
//! The spending breakdown is rendered as an ECharts pie chart. The chart is
//! generated as JSON configuration and initialized client-side with a small
//! script emitted into the page head.

use charming::{
    Chart,
    component::Legend,
    datatype::DataPointItem,
    element::{ItemStyle, JsFunction, Label, Tooltip, Trigger},
    series::Pie,
};
use maud::PreEscaped;

use crate::html::HeadElement;

use super::aggregation::CategoryTotal;

/// The slice colours, applied in order of descending category total.
const CHART_PALETTE: [&str; 8] = [
    "#3b82f6", "#22c55e", "#ef4444", "#5083e1", "#8b52e1", "#60d88c", "#ea7c7c", "#8cade0",
];

/// A dashboard chart with its HTML container ID and ECharts configuration.
pub(super) struct DashboardChart {
    /// The HTML element ID to use for the chart (kebab-case)
    pub id: &'static str,
    /// The ECharts configuration as a JSON string
    pub options: String,
}

/// Builds the pie chart of expense totals per category.
///
/// `totals` must be sorted largest first so the palette assignment is
/// stable as transactions come and go.
pub(super) fn category_chart(totals: &[CategoryTotal]) -> Chart {
    let data: Vec<DataPointItem> = totals
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            DataPointItem::new(entry.total)
                .name(entry.category.name())
                .item_style(ItemStyle::new().color(CHART_PALETTE[index % CHART_PALETTE.len()]))
        })
        .collect();

    Chart::new()
        .tooltip(currency_tooltip())
        .legend(Legend::new().bottom("0%"))
        .series(
            Pie::new()
                .name("Spending by Category")
                .radius("60%")
                .center(vec!["50%", "45%"])
                .label(Label::new().show(true).formatter("{b} {d}%"))
                .data(data),
        )
}

fn currency_tooltip() -> Tooltip {
    Tooltip::new()
        .trigger(Trigger::Item)
        .value_formatter(currency_formatter())
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

/// Generates JavaScript initialization code for dashboard charts.
///
/// Creates scripts that initialize ECharts instances with dark mode support
/// and responsive resizing.
pub(super) fn charts_script(charts: &[DashboardChart]) -> HeadElement {
    let script_content = charts
        .iter()
        .map(|chart| {
            format!(
                r#"(function() {{
                    const chartDom = document.getElementById("{}");
                    const chart = echarts.init(chartDom);
                    const option = {};
                    chart.setOption(option);

                    window.addEventListener('resize', chart.resize);

                    const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
                    const updateTheme = () => {{
                        const isDarkMode = darkModeMediaQuery.matches;
                        chart.setTheme(isDarkMode ? 'dark' : 'default');
                    }}
                    darkModeMediaQuery.addEventListener('change', updateTheme);
                    updateTheme();
                }})();"#,
                chart.id, chart.options
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let wrapped_script = format!(
        "document.addEventListener('DOMContentLoaded', function() {{\n{}\n}});",
        script_content
    );

    HeadElement::ScriptSource(PreEscaped(wrapped_script))
}
