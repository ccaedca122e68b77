#![cfg(feature = "test-adapters")]

use chrono::{TimeZone, Utc};
use stockvol_core::{
    AssetKind, Candle, Currency, HistoryProvider, HistoryRequest, HistoryResponse, Instrument,
    Interval, IsoCurrency, Money,
};
use stockvol_yfinance::{YfConnector, adapter};

fn usd(s: &str) -> Money {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD)).unwrap()
}

fn candle(secs: i64, close: &str) -> Candle {
    Candle {
        ts: Utc.timestamp_opt(secs, 0).unwrap(),
        open: usd(close),
        high: usd(close),
        low: usd(close),
        close: usd(close),
        close_unadj: None,
        volume: None,
    }
}

fn daily_request() -> HistoryRequest {
    HistoryRequest::try_from_period(
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
        Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap(),
        Interval::D1,
    )
    .unwrap()
}

fn aapl() -> Instrument {
    Instrument::from_symbol("AAPL", AssetKind::Equity).expect("valid test instrument")
}

#[tokio::test]
async fn history_forwards_period_and_interval_to_adapter() {
    let hist = <dyn adapter::YfHistory>::from_fn(|symbol, req| {
        assert_eq!(symbol, "AAPL");
        assert_eq!(req.interval, Interval::D1);
        assert!(req.range.is_none());
        let (start, end) = req.period.expect("period request");
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap().timestamp());
        assert_eq!(end, Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap().timestamp());

        Ok(HistoryResponse {
            candles: vec![candle(1_704_153_600, "185.64"), candle(1_704_240_000, "184.25")],
            actions: vec![],
            adjusted: true,
            meta: None,
        })
    });

    let connector = YfConnector::from_adapter(hist);
    let resp = connector.history(&aapl(), daily_request()).await.unwrap();

    assert_eq!(resp.candles.len(), 2);
    assert_eq!(resp.candles[1].close.amount().to_string(), "184.25");
    assert!(resp.adjusted);
    assert_eq!(connector.name(), "stockvol-yfinance");
    assert_eq!(connector.vendor(), "Yahoo Finance");
}

#[tokio::test]
async fn empty_history_is_passed_through() {
    let hist = <dyn adapter::YfHistory>::from_fn(|_, _| {
        Ok(HistoryResponse {
            candles: vec![],
            actions: vec![],
            adjusted: true,
            meta: None,
        })
    });
    let connector = YfConnector::from_adapter(hist);
    let resp = connector.history(&aapl(), daily_request()).await.unwrap();
    assert!(resp.candles.is_empty());
}
