use chrono::{DateTime, TimeZone, Utc};
use stockvol_core::{
    Candle, Currency, IsoCurrency, Money, PricePoint, PriceSeries, StockvolError,
    ensure_series_currency_uniform,
};

fn money(amount: &str, cur: IsoCurrency) -> Money {
    Money::from_canonical_str(amount, Currency::Iso(cur)).unwrap()
}

fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, d, 0, 0, 0).unwrap()
}

fn candle(d: u32, close: &str, cur: IsoCurrency) -> Candle {
    Candle {
        ts: day(d),
        open: money(close, cur),
        high: money(close, cur),
        low: money(close, cur),
        close: money(close, cur),
        close_unadj: None,
        volume: Some(1_000),
    }
}

#[test]
fn candles_are_sorted_and_deduplicated() {
    let candles = vec![
        candle(5, "101.5", IsoCurrency::USD),
        candle(4, "100", IsoCurrency::USD),
        candle(5, "999", IsoCurrency::USD),
        candle(6, "99.25", IsoCurrency::USD),
    ];
    let s = PriceSeries::from_candles(&candles).unwrap();

    assert_eq!(s.len(), 3);
    assert_eq!(s.timestamps(), vec![day(4), day(5), day(6)]);
    // first occurrence wins for duplicate timestamps
    assert_eq!(s.closes(), vec![100.0, 101.5, 99.25]);
    assert_eq!(s.first().map(|p| p.ts), Some(day(4)));
    assert_eq!(s.last().map(|p| p.close), Some(99.25));
}

#[test]
fn empty_candles_give_empty_series() {
    let s = PriceSeries::from_candles(&[]).unwrap();
    assert!(s.is_empty());
    assert!(s.first().is_none());
}

#[test]
fn mixed_currencies_are_rejected() {
    let candles = vec![
        candle(4, "100", IsoCurrency::USD),
        candle(5, "100", IsoCurrency::EUR),
    ];
    let err = PriceSeries::from_candles(&candles).unwrap_err();
    assert!(matches!(err, StockvolError::Data(_)));
}

#[test]
fn mixed_currency_within_candle_is_rejected() {
    let mut c = candle(4, "100", IsoCurrency::USD);
    c.high = money("100", IsoCurrency::EUR);
    assert!(matches!(
        ensure_series_currency_uniform(&[c]),
        Err(StockvolError::Data(_))
    ));
}

#[test]
fn series_currency_is_reported() {
    let candles = vec![candle(4, "1", IsoCurrency::USD), candle(5, "2", IsoCurrency::USD)];
    assert_eq!(
        ensure_series_currency_uniform(&candles).unwrap(),
        Currency::Iso(IsoCurrency::USD)
    );
}

#[test]
fn from_points_requires_strictly_increasing_timestamps() {
    let ok = PriceSeries::from_points(vec![
        PricePoint { ts: day(1), close: 1.0 },
        PricePoint { ts: day(2), close: 2.0 },
    ]);
    assert!(ok.is_ok());

    let dup = PriceSeries::from_points(vec![
        PricePoint { ts: day(2), close: 1.0 },
        PricePoint { ts: day(2), close: 2.0 },
    ]);
    assert!(matches!(dup, Err(StockvolError::InvalidArg(_))));
}

#[test]
fn repeated_timestamp_collapses_to_one_point() {
    let candles = vec![
        candle(7, "10", IsoCurrency::USD),
        candle(7, "11", IsoCurrency::USD),
        candle(7, "12", IsoCurrency::USD),
    ];
    let s = PriceSeries::from_candles(&candles).unwrap();
    assert_eq!(s.len(), 1);
    assert_eq!(s.closes(), vec![10.0]);
}
