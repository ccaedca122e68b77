use chrono::{Datelike, Duration, NaiveDate, Weekday};
use stockvol_core::{Candle, Currency, HistoryResponse, IsoCurrency, Money};

const AAPL_CLOSES: &[&str] = &[
    "125.57", "128.20", "129.71", "128.22", "126.06", "126.23", "128.04", "128.27", "125.90",
    "123.86", "124.69", "127.02", "127.59", "125.92", "125.06", "126.87", "129.30", "129.15",
    "126.73", "125.45", "126.71", "128.09", "126.90", "124.31", "123.74", "125.83", "127.71",
    "126.99", "125.30", "125.74", "128.22", "129.51", "127.77", "125.40", "125.43", "127.18",
    "127.46", "125.26", "123.46", "124.52", "127.06", "127.78", "126.15", "125.22", "126.88",
    "129.08", "128.69", "126.06", "124.64", "125.86", "127.29", "126.26", "123.91", "123.58",
    "125.88", "127.90", "127.22", "125.46", "125.75", "128.00",
];

/// First trading day of every fixture series.
pub const FIRST_DAY: (i32, u32, u32) = (2023, 1, 3);

pub fn by_symbol(s: &str) -> Option<HistoryResponse> {
    match s {
        "AAPL" => Some(build(AAPL_CLOSES)),
        "FLAT" => Some(build(&["50.00"; 30])),
        "ONE" => Some(build(&["42.00"])),
        "EMPTY" => Some(build(&[])),
        _ => None,
    }
}

fn usd(s: &str) -> Money {
    Money::from_canonical_str(s, Currency::Iso(IsoCurrency::USD)).unwrap()
}

/// Consecutive weekdays starting at `FIRST_DAY`.
fn trading_days(n: usize) -> Vec<NaiveDate> {
    let (y, m, d) = FIRST_DAY;
    let mut day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
    let mut out = Vec::with_capacity(n);
    while out.len() < n {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            out.push(day);
        }
        day += Duration::days(1);
    }
    out
}

fn build(closes: &[&str]) -> HistoryResponse {
    let candles = trading_days(closes.len())
        .into_iter()
        .zip(closes)
        .map(|(date, c)| Candle {
            ts: date.and_hms_opt(0, 0, 0).unwrap().and_utc(),
            open: usd(c),
            high: usd(c),
            low: usd(c),
            close: usd(c),
            close_unadj: None,
            volume: Some(1_000_000),
        })
        .collect();
    HistoryResponse {
        candles,
        actions: vec![],
        adjusted: true,
        meta: None,
    }
}
