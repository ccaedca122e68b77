use stockvol_core::{HistoryProvider, PriceSeries, StockvolError};

use crate::config::AnalysisConfig;
use crate::report::VolatilityReport;

/// Fetch, normalize, and analyze one instrument.
///
/// Makes exactly one provider call. Provider errors are returned as-is;
/// too little data is not an error and shows up as missing statistics in
/// the report.
///
/// # Errors
/// - `InvalidArg` if the config is invalid.
/// - Whatever the provider returns (`NotFound`, `Connector`, ...).
/// - `Data` if the candles cannot be normalized.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "stockvol::pipeline::run",
        skip(provider, config),
        fields(
            connector = provider.name(),
            symbol = %config.symbol,
            start = %config.start,
            end = %config.end,
            window = config.window,
        ),
    )
)]
pub async fn run(
    provider: &dyn HistoryProvider,
    config: &AnalysisConfig,
) -> Result<VolatilityReport, StockvolError> {
    config.validate()?;
    let window = config.rolling_window()?;
    let instrument = config.instrument()?;
    let req = config.history_request()?;

    let resp = provider.history(&instrument, req).await?;
    #[cfg(feature = "tracing")]
    tracing::debug!(candles = resp.candles.len(), "history received");

    let series = PriceSeries::from_candles(&resp.candles)?;
    #[cfg(feature = "tracing")]
    if series.len() < 2 {
        tracing::warn!(
            points = series.len(),
            "fewer than two prices; volatility will be undefined"
        );
    }

    let report = VolatilityReport::from_series(config.symbol.clone(), &series, window);
    #[cfg(feature = "tracing")]
    tracing::info!(
        points = report.len(),
        annualized = ?report.annualized_volatility,
        "volatility computed"
    );
    Ok(report)
}
