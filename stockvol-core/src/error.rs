use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Unified error type for the stockvol workspace.
///
/// Statistical degeneracy (too few returns for a standard deviation) is not
/// an error; the engine reports it as `None`. Everything here aborts the run.
#[derive(Debug, Error, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StockvolError {
    /// Invalid input argument (malformed date, empty symbol, bad window, ...).
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// Issues with the returned price data (mixed currencies, unrepresentable values).
    #[error("data issue: {0}")]
    Data(String),

    /// The data source returned an error.
    #[error("{connector} failed: {msg}")]
    Connector {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// A symbol or its history could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of missing resource, e.g. "history for AAPL".
        what: String,
    },

    /// The chart could not be rendered or written.
    #[error("chart rendering failed: {0}")]
    Chart(String),

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),
}

impl StockvolError {
    /// Helper: build a `Connector` error with the connector name and message.
    pub fn connector(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Connector {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build an `InvalidArg` error.
    pub fn invalid_arg(msg: impl Into<String>) -> Self {
        Self::InvalidArg(msg.into())
    }

    /// Returns true if the failure was caused by user input rather than the provider.
    #[must_use]
    pub const fn is_input_error(&self) -> bool {
        matches!(self, Self::InvalidArg(_) | Self::NotFound { .. })
    }
}

impl From<paft::Error> for StockvolError {
    fn from(err: paft::Error) -> Self {
        use paft::Error as E;
        match err {
            E::Money(_) => Self::Data(err.to_string()),
            E::Core(_) | E::Domain(_) | E::Market(_) | E::MoneyParse(_) | E::Canonical(_) => {
                Self::InvalidArg(err.to_string())
            }
        }
    }
}

impl From<paft::market::MarketError> for StockvolError {
    fn from(e: paft::market::MarketError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::domain::DomainError> for StockvolError {
    fn from(e: paft::domain::DomainError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::core::PaftError> for StockvolError {
    fn from(e: paft::core::PaftError) -> Self {
        Self::InvalidArg(e.to_string())
    }
}

impl From<paft::money::MoneyError> for StockvolError {
    fn from(e: paft::money::MoneyError) -> Self {
        Self::Data(e.to_string())
    }
}
