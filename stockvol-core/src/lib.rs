//! stockvol-core
//!
//! Core types, traits, and the numeric engine shared across the stockvol workspace.
//!
//! - `types`: market data types re-exported from `paft`.
//! - `connector`: the `HistoryProvider` trait implemented by data sources.
//! - `series`: normalization of provider candles into a `PriceSeries`.
//! - `volatility`: daily returns, annualized and rolling volatility.
//!
//! The engine in `volatility` is synchronous and pure. Only connectors are
//! async, because the upstream HTTP client is.
#![warn(missing_docs)]

/// The `HistoryProvider` data source trait.
pub mod connector;
/// Unified error type.
pub mod error;
/// Candle normalization into ordered closing prices.
pub mod series;
pub mod types;
/// Return and volatility computations.
pub mod volatility;

pub use connector::HistoryProvider;
pub use series::{PricePoint, PriceSeries, ensure_series_currency_uniform};
pub use types::*;
pub use volatility::{
    DEFAULT_WINDOW, RollingWindow, TRADING_DAYS_PER_YEAR, VolatilitySummary,
    compute_annualized_volatility, compute_daily_returns, compute_rolling_volatility, summarize,
};
