#[cfg(feature = "test-adapters")]
use std::sync::Arc;

use async_trait::async_trait;

use stockvol_core::StockvolError;
use yf::core::HistoryService;
use yfinance_rs as yf;

const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// History abstraction (so we can inject mocks in tests).
#[async_trait]
pub trait YfHistory: Send + Sync {
    /// Fetch full history for a symbol using a provider-specific request.
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, StockvolError>;
}

/// Real adapter backed by a single `YfClient` instance.
#[derive(Clone)]
pub struct RealAdapter {
    client: yf::YfClient,
}

impl RealAdapter {
    /// Build a `YfClient` with a cookie-enabled HTTP client and a browser user agent.
    ///
    /// # Errors
    /// Returns `Other` if the HTTP client or the `YfClient` cannot be built.
    pub fn try_new_default() -> Result<Self, StockvolError> {
        let http = reqwest::Client::builder()
            .cookie_store(true)
            .no_proxy()
            .build()
            .map_err(|e| StockvolError::Other(e.to_string()))?;
        Self::try_with_reqwest_client(http)
    }

    /// Build from a provided `reqwest::Client`.
    ///
    /// The client should keep a cookie store; Yahoo's crumb flow depends on it.
    ///
    /// # Errors
    /// Returns `Other` if the `YfClient` cannot be built.
    pub fn try_with_reqwest_client(http: reqwest::Client) -> Result<Self, StockvolError> {
        let client = yf::YfClient::builder()
            .custom_client(http)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| StockvolError::Other(e.to_string()))?;
        Ok(Self { client })
    }

    /// Wrap an existing `YfClient`.
    #[must_use]
    pub const fn new(client: yf::YfClient) -> Self {
        Self { client }
    }
}

fn map_yf_err(e: &yf::YfError, context: &str) -> StockvolError {
    match e {
        yf::YfError::NotFound { .. } => StockvolError::not_found(context.to_string()),
        yf::YfError::RateLimited { .. } => {
            StockvolError::connector("stockvol-yfinance", format!("rate limit: {context}"))
        }
        yf::YfError::ServerError { status, .. } => StockvolError::connector(
            "stockvol-yfinance",
            format!("server error {status}: {context}"),
        ),
        yf::YfError::Status { status, .. } => {
            StockvolError::connector("stockvol-yfinance", format!("status {status}: {context}"))
        }
        other => StockvolError::connector("stockvol-yfinance", other.to_string()),
    }
}

#[async_trait]
impl YfHistory for RealAdapter {
    async fn fetch_full(
        &self,
        symbol: &str,
        req: yf::core::services::HistoryRequest,
    ) -> Result<yf::HistoryResponse, StockvolError> {
        self.client
            .fetch_full_history(symbol, req)
            .await
            .map_err(|e| map_yf_err(&e, &format!("history for {symbol}")))
    }
}

#[cfg(feature = "test-adapters")]
impl dyn YfHistory {
    /// Build a `YfHistory` from a closure (tests only).
    pub fn from_fn<F>(f: F) -> Arc<dyn YfHistory>
    where
        F: Send
            + Sync
            + 'static
            + Fn(
                String,
                yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, StockvolError>,
    {
        struct FnHist<F>(F);
        #[async_trait]
        impl<F> YfHistory for FnHist<F>
        where
            F: Send
                + Sync
                + 'static
                + Fn(
                    String,
                    yf::core::services::HistoryRequest,
                ) -> Result<yf::HistoryResponse, StockvolError>,
        {
            async fn fetch_full(
                &self,
                symbol: &str,
                req: yf::core::services::HistoryRequest,
            ) -> Result<yf::HistoryResponse, StockvolError> {
                (self.0)(symbol.to_string(), req)
            }
        }
        Arc::new(FnHist(f))
    }
}
