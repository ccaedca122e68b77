//! stockvol-yfinance
//!
//! `HistoryProvider` implementation on top of the `yfinance-rs` client library.
//! One call, one request: no retry, no rate limiting, no caching.
#![warn(missing_docs)]

/// Adapter definitions and the production adapter backed by `yfinance-rs`.
pub mod adapter;

use std::sync::Arc;

use adapter::{RealAdapter, YfHistory};
use async_trait::async_trait;
use stockvol_core::{HistoryProvider, HistoryRequest, HistoryResponse, Instrument, StockvolError};

#[cfg(feature = "test-adapters")]
type HistoryAdapter = Arc<dyn YfHistory>;
#[cfg(not(feature = "test-adapters"))]
type HistoryAdapter = Arc<RealAdapter>;

/// Public connector type. Production users construct it with `YfConnector::try_new_default()`.
pub struct YfConnector {
    history: HistoryAdapter,
}

impl YfConnector {
    /// Connector name used in error tags and log lines.
    pub const NAME: &'static str = "stockvol-yfinance";

    fn looks_like_not_found(msg: &str) -> bool {
        let m = msg.to_ascii_lowercase();
        m.contains("not found") || m.contains("no data") || m.contains("no matches")
    }

    fn normalize_error(e: StockvolError, what: &str) -> StockvolError {
        match e {
            StockvolError::Connector { connector: _, msg } => {
                if Self::looks_like_not_found(&msg) {
                    StockvolError::not_found(what.to_string())
                } else {
                    StockvolError::connector(Self::NAME, msg)
                }
            }
            StockvolError::Other(msg) => StockvolError::connector(Self::NAME, msg),
            other => other,
        }
    }

    /// Build with a fresh `yfinance_rs::YfClient` inside.
    ///
    /// # Errors
    /// Returns an error if the HTTP client or the `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, StockvolError> {
        let a = RealAdapter::try_new_default()?;
        Ok(Self::from_real(a))
    }

    /// Build from an existing `yfinance_rs::YfClient`.
    #[must_use]
    pub fn new_with_client(client: yfinance_rs::YfClient) -> Self {
        Self::from_real(RealAdapter::new(client))
    }

    /// Build from a provided `reqwest::Client` by constructing a `yfinance_rs::YfClient`.
    ///
    /// # Errors
    /// Returns an error if the internal `YfClient` cannot be constructed from the provided HTTP client.
    pub fn try_new_with_reqwest_client(http: reqwest::Client) -> Result<Self, StockvolError> {
        let a = RealAdapter::try_with_reqwest_client(http)?;
        Ok(Self::from_real(a))
    }

    /// For tests/injection (requires the `test-adapters` feature).
    #[cfg(feature = "test-adapters")]
    #[must_use]
    pub fn from_adapter(history: Arc<dyn YfHistory>) -> Self {
        Self { history }
    }

    fn from_real(adapter: RealAdapter) -> Self {
        Self {
            history: Arc::new(adapter),
        }
    }
}

#[async_trait]
impl HistoryProvider for YfConnector {
    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    #[cfg_attr(
        feature = "tracing",
        tracing::instrument(
            name = "stockvol_yfinance::history",
            skip(self, req),
            fields(symbol = %instrument.symbol()),
        )
    )]
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockvolError> {
        let yf_req = yfinance_rs::core::services::HistoryRequest {
            range: req.range(),
            period: req.period().map(|(s, e)| (s.timestamp(), e.timestamp())),
            interval: req.interval(),
            include_prepost: req.include_prepost(),
            include_actions: req.include_actions(),
            auto_adjust: req.auto_adjust(),
            keepna: req.keepna(),
        };
        let symbol = instrument.symbol_str();
        let raw = self
            .history
            .fetch_full(symbol, yf_req)
            .await
            .map_err(|e| Self::normalize_error(e, &format!("history for {symbol}")))?;
        #[cfg(feature = "tracing")]
        tracing::debug!(candles = raw.candles.len(), adjusted = raw.adjusted, "history fetched");
        Ok(raw)
    }
}
