use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use stockvol::VolatilityReport;
use stockvol_core::{PricePoint, PriceSeries, RollingWindow, TRADING_DAYS_PER_YEAR};

fn series(closes: &[f64]) -> PriceSeries {
    let points = closes
        .iter()
        .enumerate()
        .map(|(i, &close)| PricePoint {
            ts: Utc
                .with_ymd_and_hms(2024, 1, 1 + u32::try_from(i).unwrap(), 0, 0, 0)
                .unwrap(),
            close,
        })
        .collect();
    PriceSeries::from_points(points).unwrap()
}

#[test]
fn worked_example_from_four_prices() {
    let window = RollingWindow::new(2).unwrap();
    let report = VolatilityReport::from_series("TEST", &series(&[100.0, 110.0, 99.0, 108.9]), window);

    let r: Vec<f64> = report.valid_returns();
    assert_eq!(r.len(), 3);
    assert!((r[0] - 0.10).abs() < 1e-12);
    assert!((r[1] + 0.10).abs() < 1e-12);
    assert!((r[2] - 0.10).abs() < 1e-12);

    let expected = (8.0_f64 / 9.0).sqrt() * 0.1 * TRADING_DAYS_PER_YEAR.sqrt();
    let got = report.annualized_volatility.unwrap();
    assert!((got - expected).abs() < 1e-9, "{got} vs {expected}");

    assert_eq!(report.rolling_volatility[0], None);
    assert_eq!(report.rolling_volatility[1], None);
    assert!(report.rolling_volatility[2].is_some());
    assert!(report.rolling_volatility[3].is_some());
}

#[test]
fn formats_percentage_with_two_decimals() {
    let mut report = VolatilityReport::from_series("X", &series(&[1.0, 2.0]), RollingWindow::default());
    report.annualized_volatility = Some(0.253_456);
    assert_eq!(report.format_volatility(), "25.35%");
    report.annualized_volatility = None;
    assert_eq!(report.format_volatility(), "undefined (insufficient data)");
}

#[test]
fn dates_use_iso_format() {
    let report = VolatilityReport::from_series("X", &series(&[1.0, 2.0, 3.0]), RollingWindow::default());
    assert_eq!(report.dates(), ["2024-01-01", "2024-01-02", "2024-01-03"]);
}

#[test]
fn missing_values_serialize_as_null() {
    let report = VolatilityReport::from_series("X", &series(&[10.0]), RollingWindow::default());
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["symbol"], "X");
    assert_eq!(json["closes"][0], 10.0);
    assert!(json["returns"][0].is_null());
    assert!(json["rolling_volatility"][0].is_null());
    assert!(json["annualized_volatility"].is_null());
    assert_eq!(json["window"]["size"], 20);
}

proptest! {
    #[test]
    fn report_columns_stay_aligned(
        closes in prop::collection::vec(1.0f64..500.0, 0..28),
        size in 1usize..10,
    ) {
        let window = RollingWindow::new(size).unwrap();
        let report = VolatilityReport::from_series("P", &series(&closes), window);
        prop_assert_eq!(report.len(), closes.len());
        prop_assert_eq!(report.returns.len(), closes.len());
        prop_assert_eq!(report.rolling_volatility.len(), closes.len());
        prop_assert_eq!(report.annualized_volatility.is_some(), closes.len() >= 2);
        prop_assert!(report.rolling_volatility.iter().flatten().all(|v| *v >= 0.0));
    }
}
