//! Re-export of the market data types stockvol consumes from `paft`.
// Downstream crates depend on `stockvol-core` only

pub use crate::error::StockvolError;

pub use paft::domain::{AssetKind, Instrument, Symbol};

pub use paft::money::{Currency, IsoCurrency, Money};

pub use paft::Decimal;

pub use paft::market::requests::history::{HistoryRequest, HistoryRequestBuilder, Interval, Range};
pub use paft::market::responses::history::{Candle, HistoryMeta, HistoryResponse};
