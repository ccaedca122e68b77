use async_trait::async_trait;
use stockvol_core::{HistoryProvider, HistoryRequest, HistoryResponse, Instrument, StockvolError};

mod fixtures;

pub use fixtures::history::FIRST_DAY;

/// Mock connector for offline runs and tests. Provides deterministic data from static fixtures.
///
/// Symbols: `AAPL` (60 trading days), `FLAT` (constant price), `ONE` (a single
/// candle), `EMPTY` (no candles), `FAIL` (connector error). Anything else is
/// not found.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl HistoryProvider for MockConnector {
    fn name(&self) -> &'static str {
        "stockvol-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockvolError> {
        let s = instrument.symbol_str();
        if s == "FAIL" {
            return Err(StockvolError::connector(
                "stockvol-mock",
                "forced failure: history",
            ));
        }
        let mut resp = fixtures::history::by_symbol(s)
            .ok_or_else(|| StockvolError::not_found(format!("history for {s}")))?;
        // Period end is exclusive, like the upstream provider.
        if let Some((start, end)) = req.period() {
            resp.candles.retain(|c| c.ts >= start && c.ts < end);
        }
        Ok(resp)
    }
}
