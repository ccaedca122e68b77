use chrono::{DateTime, Utc};
use serde::Serialize;
use stockvol_core::{PriceSeries, RollingWindow, summarize};

use crate::config::DATE_FORMAT;

/// Engine output laid out as parallel arrays on one timestamp axis.
///
/// Every vector has the same length; index `i` of each refers to
/// `timestamps[i]`. Missing values serialize as `null`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilityReport {
    /// Ticker the data was fetched for.
    pub symbol: String,
    /// Rolling window used for `rolling_volatility`.
    pub window: RollingWindow,
    /// Trading-day timestamps.
    pub timestamps: Vec<DateTime<Utc>>,
    /// Closing prices.
    pub closes: Vec<f64>,
    /// Daily returns; the first is always missing.
    pub returns: Vec<Option<f64>>,
    /// Rolling annualized volatility.
    pub rolling_volatility: Vec<Option<f64>>,
    /// Annualized volatility over the whole period, if defined.
    pub annualized_volatility: Option<f64>,
}

impl VolatilityReport {
    /// Run the engine over `series`.
    #[must_use]
    pub fn from_series(
        symbol: impl Into<String>,
        series: &PriceSeries,
        window: RollingWindow,
    ) -> Self {
        let closes = series.closes();
        let summary = summarize(&closes, window);
        Self {
            symbol: symbol.into(),
            window,
            timestamps: series.timestamps(),
            closes,
            returns: summary.returns,
            rolling_volatility: summary.rolling,
            annualized_volatility: summary.annualized,
        }
    }

    /// Number of trading days covered.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// True when the provider returned no prices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns with the missing entries dropped.
    #[must_use]
    pub fn valid_returns(&self) -> Vec<f64> {
        self.returns.iter().flatten().copied().collect()
    }

    /// Timestamp axis formatted as `YYYY-MM-DD`.
    #[must_use]
    pub fn dates(&self) -> Vec<String> {
        self.timestamps
            .iter()
            .map(|ts| ts.format(DATE_FORMAT).to_string())
            .collect()
    }

    /// Annualized volatility as a percentage with two decimals.
    #[must_use]
    pub fn format_volatility(&self) -> String {
        self.annualized_volatility.map_or_else(
            || "undefined (insufficient data)".to_string(),
            |v| format!("{:.2}%", v * 100.0),
        )
    }
}
