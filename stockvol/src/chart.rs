//! Two-panel interactive chart.
//!
//! Top panel: closing price with rolling volatility on a secondary axis.
//! Bottom panel: histogram of daily returns.

use std::path::PathBuf;

use plotly::color::NamedColor;
use plotly::common::{Anchor, Line, Marker, Title};
use plotly::layout::{Annotation, Axis, AxisSide, GridPattern, Layout, LayoutGrid, Margin};
use plotly::{Histogram, Plot, Scatter};
use stockvol_core::StockvolError;

use crate::report::VolatilityReport;

const HISTOGRAM_BINS: usize = 50;

/// Top edge of each grid row in paper coordinates, for the default row gap.
const PANEL_TOPS: [f64; 2] = [1.0, 0.45];
const PANEL_TITLES: [&str; 2] = [
    "Stock Price and Volatility Over Time",
    "Distribution of Stock Daily Returns",
];

/// Where a rendered chart goes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ChartTarget {
    /// Open the chart in the default browser.
    #[default]
    Browser,
    /// Write a standalone HTML file.
    Html(PathBuf),
}

/// Build the chart for a report.
#[must_use]
pub fn build_chart(report: &VolatilityReport) -> Plot {
    let dates = report.dates();

    let price = Scatter::new(dates.clone(), report.closes.clone())
        .name("Close Price")
        .line(Line::new().color(NamedColor::Blue));

    let volatility = Scatter::new(dates, report.rolling_volatility.clone())
        .name("Volatility")
        .line(Line::new().color(NamedColor::Red))
        .y_axis("y3");

    let returns = Histogram::new(report.valid_returns())
        .name("Daily Returns")
        .n_bins_x(HISTOGRAM_BINS)
        .opacity(0.6)
        .marker(Marker::new().color(NamedColor::Blue))
        .x_axis("x2")
        .y_axis("y2");

    let layout = Layout::new()
        .annotations(panel_titles())
        .grid(
            LayoutGrid::new()
                .rows(2)
                .columns(1)
                .pattern(GridPattern::Independent),
        )
        .y_axis(Axis::new().title(Title::with_text("Close Price")))
        .y_axis3(
            Axis::new()
                .title(Title::with_text("Volatility"))
                .overlaying("y")
                .side(AxisSide::Right),
        )
        .y_axis2(Axis::new().title(Title::with_text("Count")))
        .height(800)
        .show_legend(false)
        .margin(Margin::new().left(20).right(20).top(30).bottom(20));

    let mut plot = Plot::new();
    plot.add_trace(price);
    plot.add_trace(volatility);
    plot.add_trace(returns);
    plot.set_layout(layout);
    plot
}

/// Titles centred above each grid row.
fn panel_titles() -> Vec<Annotation> {
    PANEL_TITLES
        .iter()
        .zip(PANEL_TOPS)
        .map(|(text, y)| {
            Annotation::new()
                .text(*text)
                .x_ref("paper")
                .y_ref("paper")
                .x(0.5)
                .y(y)
                .x_anchor(Anchor::Center)
                .y_anchor(Anchor::Bottom)
                .show_arrow(false)
        })
        .collect()
}

/// Send a chart to its target.
///
/// # Errors
/// Returns `Chart` if the HTML file cannot be written.
pub fn render(plot: &Plot, target: &ChartTarget) -> Result<(), StockvolError> {
    match target {
        ChartTarget::Browser => {
            plot.show();
            Ok(())
        }
        ChartTarget::Html(path) => std::fs::write(path, plot.to_html()).map_err(|e| {
            StockvolError::Chart(format!("cannot write {}: {e}", path.display()))
        }),
    }
}
