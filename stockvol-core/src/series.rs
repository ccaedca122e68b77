//! Price series normalization.
//!
//! Providers hand back candles; the engine wants a plain, strictly increasing
//! sequence of closing prices. `PriceSeries` is that bridge.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use chrono::{DateTime, Utc};
use paft::market::responses::history::Candle;
use paft::money::Currency;
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

use crate::StockvolError;

/// One trading-day observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PricePoint {
    /// Trading-day timestamp (UTC).
    pub ts: DateTime<Utc>,
    /// Closing price.
    pub close: f64,
}

/// Ordered closing prices with strictly increasing timestamps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Build a series from provider candles.
    ///
    /// Candles are sorted by timestamp and duplicate timestamps keep the first
    /// occurrence. An empty slice yields an empty series.
    ///
    /// # Errors
    /// - `Data` if the candles mix currencies.
    /// - `Data` if a closing price cannot be represented as `f64`.
    pub fn from_candles(candles: &[Candle]) -> Result<Self, StockvolError> {
        if candles.is_empty() {
            return Ok(Self::default());
        }
        ensure_series_currency_uniform(candles)?;

        let mut by_ts: BTreeMap<DateTime<Utc>, f64> = BTreeMap::new();
        for c in candles {
            if let Entry::Vacant(v) = by_ts.entry(c.ts) {
                let close = c.close.amount().to_f64().ok_or_else(|| {
                    StockvolError::Data(format!("close price at {} is not representable", c.ts))
                })?;
                v.insert(close);
            }
        }
        #[cfg(feature = "tracing")]
        {
            let dropped = candles.len() - by_ts.len();
            if dropped > 0 {
                tracing::debug!(
                    dropped,
                    kept = by_ts.len(),
                    "dropped duplicate candle timestamps"
                );
            }
        }

        Ok(Self {
            points: by_ts
                .into_iter()
                .map(|(ts, close)| PricePoint { ts, close })
                .collect(),
        })
    }

    /// Build a series from points that are already ordered.
    ///
    /// # Errors
    /// Returns `InvalidArg` if timestamps are not strictly increasing.
    pub fn from_points(points: Vec<PricePoint>) -> Result<Self, StockvolError> {
        if let Some(w) = points.windows(2).find(|w| w[0].ts >= w[1].ts) {
            return Err(StockvolError::invalid_arg(format!(
                "timestamps must be strictly increasing: {} then {}",
                w[0].ts, w[1].ts
            )));
        }
        Ok(Self { points })
    }

    /// Observations in timestamp order.
    #[must_use]
    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Timestamp axis shared by every derived series.
    #[must_use]
    pub fn timestamps(&self) -> Vec<DateTime<Utc>> {
        self.points.iter().map(|p| p.ts).collect()
    }

    /// Closing prices in timestamp order.
    #[must_use]
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    /// Number of observations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when no observations exist.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Earliest observation.
    #[must_use]
    pub fn first(&self) -> Option<&PricePoint> {
        self.points.first()
    }

    /// Latest observation.
    #[must_use]
    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }
}

/// Ensure OHLC currencies within a single candle are identical.
///
/// # Errors
/// Returns `Err(StockvolError::Data)` if the candle's `open`, `high`, `low`, and `close`
/// do not all share the same currency.
pub fn ensure_candle_currency_uniform(c: &Candle) -> Result<(), StockvolError> {
    let cur = c.open.currency();
    if cur != c.high.currency() || cur != c.low.currency() || cur != c.close.currency() {
        return Err(StockvolError::Data("currency mismatch within candle".into()));
    }
    Ok(())
}

/// Ensure all candles in the series share one currency and return it.
///
/// # Errors
/// - `Data` if any candle mixes currencies across its OHLC fields.
/// - `Data` if candles in the series use different currencies.
/// - `Data` if the series is empty.
pub fn ensure_series_currency_uniform(candles: &[Candle]) -> Result<Currency, StockvolError> {
    let mut series_cur: Option<Currency> = None;
    for c in candles {
        ensure_candle_currency_uniform(c)?;
        let oc = c.open.currency().clone();
        if let Some(ref cur) = series_cur {
            if cur != &oc {
                return Err(StockvolError::Data("currency mismatch across series".into()));
            }
        } else {
            series_cur = Some(oc);
        }
    }
    series_cur.ok_or_else(|| StockvolError::Data("empty series has no currency".into()))
}
