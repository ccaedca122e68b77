use chrono::{TimeZone, Utc};
use stockvol::{ChartTarget, VolatilityReport, build_chart, render};
use stockvol_core::{PricePoint, PriceSeries, RollingWindow, StockvolError};

fn report(n: usize) -> VolatilityReport {
    let points = (0..n)
        .map(|i| PricePoint {
            ts: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
                + chrono::Duration::days(i as i64),
            close: if i % 2 == 0 { 100.0 + i as f64 } else { 99.0 - i as f64 * 0.5 },
        })
        .collect();
    let series = PriceSeries::from_points(points).unwrap();
    VolatilityReport::from_series("TEST", &series, RollingWindow::new(3).unwrap())
}

#[test]
fn chart_has_three_traces_on_two_panels() {
    let json = build_chart(&report(10)).to_json();
    assert!(json.contains("Close Price"));
    assert!(json.contains("Volatility"));
    assert!(json.contains("histogram"));
    assert!(json.contains("\"y3\""));
    assert!(json.contains("\"x2\""));
    assert!(json.contains("Distribution of Stock Daily Returns"));
    assert!(json.contains("nbinsx"));
    assert!(json.contains("Stock Price and Volatility Over Time"));
    assert!(json.contains("annotations"));
    assert!(json.contains("\"paper\""));
}

#[test]
fn missing_rolling_values_become_gaps() {
    let json = build_chart(&report(5)).to_json();
    assert!(json.contains("null"));
}

#[test]
fn empty_report_still_builds() {
    let json = build_chart(&report(0)).to_json();
    assert!(json.contains("Close Price"));
}

#[test]
fn renders_standalone_html_file() {
    let path = std::env::temp_dir().join(format!("stockvol-chart-{}.html", std::process::id()));
    render(&build_chart(&report(8)), &ChartTarget::Html(path.clone())).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<html"));
    assert!(html.contains("Close Price"));
    let _ = std::fs::remove_file(&path);
}

#[test]
fn unwritable_path_is_a_chart_error() {
    let path = std::env::temp_dir()
        .join("stockvol-no-such-dir")
        .join("nested")
        .join("chart.html");
    let err = render(&build_chart(&report(3)), &ChartTarget::Html(path)).unwrap_err();
    assert!(matches!(err, StockvolError::Chart(_)));
}
