//! Run configuration.
//!
//! `AnalysisConfig` is what the pipeline needs; `RuntimeSettings` is how the
//! binary is wired (connector choice, chart output, window override) and is
//! read from the environment.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use stockvol_core::{
    AssetKind, DEFAULT_WINDOW, HistoryRequest, Instrument, Interval, RollingWindow, StockvolError,
};

use crate::chart::ChartTarget;

/// Date format accepted for start and end dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Environment variable selecting the fixture connector.
pub const ENV_USE_MOCK: &str = "STOCKVOL_USE_MOCK";
/// Environment variable naming an HTML file to write instead of opening a browser.
pub const ENV_CHART_PATH: &str = "STOCKVOL_CHART_PATH";
/// Environment variable overriding the rolling window size.
pub const ENV_WINDOW: &str = "STOCKVOL_WINDOW";

/// Parse a `YYYY-MM-DD` date.
///
/// # Errors
/// Returns `InvalidArg` when the input does not match the format.
pub fn parse_date(s: &str) -> Result<NaiveDate, StockvolError> {
    NaiveDate::parse_from_str(s.trim(), DATE_FORMAT).map_err(|e| {
        StockvolError::invalid_arg(format!("invalid date '{}' (expected YYYY-MM-DD): {e}", s.trim()))
    })
}

/// Everything one analysis run needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Ticker symbol, e.g. `AAPL`.
    pub symbol: String,
    /// First calendar day to fetch (inclusive).
    pub start: NaiveDate,
    /// Last calendar day boundary (exclusive).
    pub end: NaiveDate,
    /// Rolling volatility window, in trading days.
    pub window: usize,
}

impl AnalysisConfig {
    /// Config with the default 20-day rolling window.
    pub fn new(symbol: impl Into<String>, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            symbol: symbol.into(),
            start,
            end,
            window: DEFAULT_WINDOW,
        }
    }

    /// Replace the rolling window size.
    #[must_use]
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Check the config before any network traffic happens.
    ///
    /// # Errors
    /// Returns `InvalidArg` for an empty symbol, a start date not before the
    /// end date, or a zero window.
    pub fn validate(&self) -> Result<(), StockvolError> {
        if self.symbol.trim().is_empty() {
            return Err(StockvolError::invalid_arg("ticker symbol must not be empty"));
        }
        if self.start >= self.end {
            return Err(StockvolError::invalid_arg(format!(
                "start date {} must be before end date {}",
                self.start, self.end
            )));
        }
        self.rolling_window().map(|_| ())
    }

    /// The validated rolling window.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the window is zero.
    pub fn rolling_window(&self) -> Result<RollingWindow, StockvolError> {
        RollingWindow::new(self.window)
    }

    /// Start and end as UTC midnights.
    #[must_use]
    pub fn period(&self) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            self.start.and_time(chrono::NaiveTime::MIN).and_utc(),
            self.end.and_time(chrono::NaiveTime::MIN).and_utc(),
        )
    }

    /// The instrument to request.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol is rejected by the instrument parser.
    pub fn instrument(&self) -> Result<Instrument, StockvolError> {
        Instrument::from_symbol(self.symbol.trim(), AssetKind::Equity)
            .map_err(|e| StockvolError::invalid_arg(format!("invalid symbol '{}': {e}", self.symbol)))
    }

    /// Daily history request for the configured period.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the period is rejected.
    pub fn history_request(&self) -> Result<HistoryRequest, StockvolError> {
        let (start, end) = self.period();
        Ok(HistoryRequest::try_from_period(start, end, Interval::D1)?)
    }
}

/// How the binary is wired for this process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuntimeSettings {
    /// Use the offline fixture connector instead of Yahoo Finance.
    pub use_mock: bool,
    /// Where the chart goes.
    pub chart: ChartTarget,
    /// Rolling window override.
    pub window: Option<usize>,
}

impl RuntimeSettings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    /// Returns `InvalidArg` if `STOCKVOL_WINDOW` is not a positive integer.
    pub fn from_env() -> Result<Self, StockvolError> {
        Self::from_lookup(|k| std::env::var(k).ok())
    }

    /// Read settings through an arbitrary key lookup.
    ///
    /// # Errors
    /// Returns `InvalidArg` if the window override is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, StockvolError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let use_mock = lookup(ENV_USE_MOCK).is_some();
        let chart = lookup(ENV_CHART_PATH)
            .filter(|p| !p.trim().is_empty())
            .map_or(ChartTarget::Browser, |p| ChartTarget::Html(p.into()));
        let window = match lookup(ENV_WINDOW) {
            Some(raw) => {
                let n: usize = raw.trim().parse().map_err(|_| {
                    StockvolError::invalid_arg(format!("{ENV_WINDOW} must be a positive integer, got '{raw}'"))
                })?;
                RollingWindow::new(n)?;
                Some(n)
            }
            None => None,
        };
        Ok(Self {
            use_mock,
            chart,
            window,
        })
    }
}
