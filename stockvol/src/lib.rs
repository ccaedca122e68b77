//! stockvol
//!
//! Fetch daily closing prices for one ticker, compute daily returns, the
//! annualized volatility over the whole period, and a rolling annualized
//! volatility series, then chart them.
//!
//! The pipeline is headless: build an [`AnalysisConfig`], hand it to
//! [`pipeline::run`] with any [`stockvol_core::HistoryProvider`], and render
//! the resulting [`VolatilityReport`] with [`chart`]. The `stockvol` binary
//! wires these together behind three interactive prompts.
//!
//! ```rust,ignore
//! use stockvol::{AnalysisConfig, config::parse_date, pipeline};
//! use stockvol_mock::MockConnector;
//!
//! let cfg = AnalysisConfig::new("AAPL", parse_date("2023-01-01")?, parse_date("2023-04-01")?);
//! let report = pipeline::run(&MockConnector::new(), &cfg).await?;
//! println!("Calculated Volatility: {}", report.format_volatility());
//! ```
#![warn(missing_docs)]

/// Chart construction and rendering.
pub mod chart;
/// Run configuration and environment settings.
pub mod config;
/// The fetch → normalize → compute pipeline.
pub mod pipeline;
pub mod prompt;
/// Report handed to the presentation layer.
pub mod report;

pub use chart::{ChartTarget, build_chart, render};
pub use config::{AnalysisConfig, RuntimeSettings};
pub use report::VolatilityReport;
