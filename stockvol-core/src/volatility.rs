//! Daily returns and annualized volatility.
//!
//! Every function here is pure and total over finite slices. Missing values
//! are `None`: the first return has no prior day, and a rolling window that
//! does not yet hold enough valid returns has no estimate.
//!
//! The scalar estimate uses the population standard deviation (divide by N);
//! the rolling estimate uses the sample standard deviation (divide by N - 1).
//! Both are scaled by `sqrt(TRADING_DAYS_PER_YEAR)`.

use serde::{Deserialize, Serialize};

use crate::StockvolError;

/// Trading days per year used to annualize daily dispersion.
pub const TRADING_DAYS_PER_YEAR: f64 = 252.0;

/// Default rolling window length, in trading days.
pub const DEFAULT_WINDOW: usize = 20;

/// Validated trailing window for the rolling estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRollingWindow")]
pub struct RollingWindow {
    size: usize,
    min_periods: usize,
}

impl Default for RollingWindow {
    fn default() -> Self {
        Self {
            size: DEFAULT_WINDOW,
            min_periods: DEFAULT_WINDOW,
        }
    }
}

#[derive(Deserialize)]
struct RawRollingWindow {
    size: usize,
    min_periods: Option<usize>,
}

impl TryFrom<RawRollingWindow> for RollingWindow {
    type Error = StockvolError;

    fn try_from(raw: RawRollingWindow) -> Result<Self, Self::Error> {
        let window = Self::new(raw.size)?;
        match raw.min_periods {
            Some(m) => window.with_min_periods(m),
            None => Ok(window),
        }
    }
}

impl RollingWindow {
    /// Window of `size` returns that must all be present to produce a value.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `size` is zero.
    pub fn new(size: usize) -> Result<Self, StockvolError> {
        if size == 0 {
            return Err(StockvolError::invalid_arg("rolling window must be positive"));
        }
        Ok(Self {
            size,
            min_periods: size,
        })
    }

    /// Lower the number of valid returns a window needs before it reports.
    ///
    /// A standard deviation still needs at least two values, so anything
    /// below two behaves like two.
    ///
    /// # Errors
    /// Returns `InvalidArg` when `min_periods` is zero or exceeds the window size.
    pub fn with_min_periods(self, min_periods: usize) -> Result<Self, StockvolError> {
        if min_periods == 0 || min_periods > self.size {
            return Err(StockvolError::invalid_arg(format!(
                "min_periods must be in 1..={}, got {min_periods}",
                self.size
            )));
        }
        Ok(Self {
            size: self.size,
            min_periods,
        })
    }

    /// Number of trailing returns covered by each window.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of valid returns a window needs before it reports.
    #[must_use]
    pub const fn min_periods(&self) -> usize {
        self.min_periods
    }
}

/// Fractional day-over-day returns, aligned with `prices`.
///
/// Element 0 is always `None`. A return is also `None` when the previous
/// price is not strictly positive, either price is not finite, or the
/// ratio overflows.
#[must_use]
pub fn compute_daily_returns(prices: &[f64]) -> Vec<Option<f64>> {
    let mut out = Vec::with_capacity(prices.len());
    if prices.is_empty() {
        return out;
    }
    out.push(None);
    out.extend(prices.windows(2).map(|w| {
        let (prev, cur) = (w[0], w[1]);
        (prev.is_finite() && cur.is_finite() && prev > 0.0)
            .then(|| cur / prev - 1.0)
            .filter(|r| r.is_finite())
    }));
    out
}

/// Annualized population standard deviation of the valid returns.
///
/// Returns `None` when there are no valid returns and `Some(0.0)` for a
/// single one.
#[must_use]
pub fn compute_annualized_volatility(returns: &[Option<f64>]) -> Option<f64> {
    let values: Vec<f64> = returns.iter().flatten().copied().collect();
    let n = values.len();
    if n == 0 {
        return None;
    }
    let variance = sum_squared_deviations(&values) / n as f64;
    Some(annualize(variance))
}

/// Annualized sample standard deviation over a trailing window.
///
/// Missing returns are excluded from every window. Index `i` reports once
/// `i + 1 >= window.size()` and the window holds at least
/// `max(window.min_periods(), 2)` valid returns.
#[must_use]
pub fn compute_rolling_volatility(
    returns: &[Option<f64>],
    window: RollingWindow,
) -> Vec<Option<f64>> {
    let size = window.size();
    let needed = window.min_periods().max(2);
    let mut buf: Vec<f64> = Vec::with_capacity(size);

    (0..returns.len())
        .map(|i| {
            if i + 1 < size {
                return None;
            }
            buf.clear();
            buf.extend(returns[i + 1 - size..=i].iter().flatten().copied());
            if buf.len() < needed {
                return None;
            }
            let variance = sum_squared_deviations(&buf) / (buf.len() - 1) as f64;
            Some(annualize(variance))
        })
        .collect()
}

/// The three engine outputs for one price series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VolatilitySummary {
    /// Daily returns, `None` at index 0.
    pub returns: Vec<Option<f64>>,
    /// Annualized volatility over the whole series.
    pub annualized: Option<f64>,
    /// Rolling annualized volatility aligned with `returns`.
    pub rolling: Vec<Option<f64>>,
}

/// Run the whole engine over `prices`.
#[must_use]
pub fn summarize(prices: &[f64], window: RollingWindow) -> VolatilitySummary {
    let returns = compute_daily_returns(prices);
    let annualized = compute_annualized_volatility(&returns);
    let rolling = compute_rolling_volatility(&returns, window);
    VolatilitySummary {
        returns,
        annualized,
        rolling,
    }
}

fn sum_squared_deviations(values: &[f64]) -> f64 {
    // Constant inputs are exactly zero even when the mean does not round-trip.
    if values.iter().all(|v| *v == values[0]) {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean) * (v - mean)).sum()
}

fn annualize(variance: f64) -> f64 {
    variance.sqrt() * TRADING_DAYS_PER_YEAR.sqrt()
}
