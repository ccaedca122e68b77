use async_trait::async_trait;

use crate::StockvolError;
use paft::domain::Instrument;
use paft::market::requests::history::HistoryRequest;
use paft::market::responses::history::HistoryResponse;

/// A data source that serves daily OHLCV history for one instrument.
///
/// Implementations make a single request per call: no retry, no caching.
#[async_trait]
pub trait HistoryProvider: Send + Sync {
    /// Stable connector name, used to tag errors and log lines.
    fn name(&self) -> &'static str;

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Fetch OHLCV history for the given instrument and request.
    async fn history(
        &self,
        instrument: &Instrument,
        req: HistoryRequest,
    ) -> Result<HistoryResponse, StockvolError>;
}
