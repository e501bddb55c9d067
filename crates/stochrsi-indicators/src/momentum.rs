//! Momentum indicators.

use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};
use stochrsi_core::error::{IndicatorError, IndicatorResult, Stage};
use stochrsi_core::traits::{Indicator, MultiOutputIndicator, RsiProvider};
use tracing::{debug, error};

use crate::rolling::{rolling_mean, rolling_min_max};
use crate::simd::gains_losses_simd;

/// Default RSI lookback.
pub const DEFAULT_RSI_PERIOD: usize = 14;
/// Default %K smoothing window.
pub const DEFAULT_K_PERIOD: usize = 3;
/// Default %D smoothing window.
pub const DEFAULT_D_PERIOD: usize = 3;

// Averages closer to zero than this are treated as zero.
const ZERO_EPSILON: f64 = 1e-8;

/// Wilder RSI over `data`, one value per price.
///
/// The first `period` entries are `NaN`; the first value is seeded with the
/// simple mean of the first `period` gains and losses, then smoothed with
/// `avg = (avg * (period - 1) + x) / period`. When both averages are zero the
/// RSI is `0`.
pub fn wilder_rsi(data: &[f64], period: usize) -> Vec<f64> {
    let mut result = vec![f64::NAN; data.len()];
    if period == 0 || data.len() <= period {
        return result;
    }

    let (gains, losses) = gains_losses_simd(data);
    let period_f64 = period as f64;

    // Initial average
    let mut avg_gain = gains[..period].iter().sum::<f64>() / period_f64;
    let mut avg_loss = losses[..period].iter().sum::<f64>() / period_f64;
    result[period] = rsi_value(avg_gain, avg_loss);

    for i in period..gains.len() {
        avg_gain = (avg_gain * (period_f64 - 1.0) + gains[i]) / period_f64;
        avg_loss = (avg_loss * (period_f64 - 1.0) + losses[i]) / period_f64;
        result[i + 1] = rsi_value(avg_gain, avg_loss);
    }

    result
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    let total = avg_gain + avg_loss;
    if total.abs() < ZERO_EPSILON {
        0.0
    } else {
        100.0 * (avg_gain / total)
    }
}

/// The Wilder RSI as an [`RsiProvider`].
///
/// This is the provider [`StochRsi`] uses unless told otherwise.
#[derive(Debug, Clone, Copy, Default)]
pub struct WilderRsi;

impl RsiProvider for WilderRsi {
    fn rsi_series(&self, prices: &[f64], period: usize) -> Vec<f64> {
        wilder_rsi(prices, period)
    }
}

/// Relative Strength Index (RSI).
///
/// Measures the speed and magnitude of recent price changes
/// to evaluate overbought or oversold conditions.
#[derive(Debug, Clone)]
pub struct Rsi {
    period: usize,
}

impl Rsi {
    /// Create a new RSI indicator.
    ///
    /// Common periods are 14 (default) or 9.
    pub fn new(period: usize) -> Self {
        assert!(period > 0, "Period must be greater than 0");
        Self { period }
    }
}

impl Default for Rsi {
    fn default() -> Self {
        Self::new(DEFAULT_RSI_PERIOD)
    }
}

impl Indicator for Rsi {
    type Output = f64;

    /// Only the defined values; the leading `NaN` lookback is dropped.
    fn calculate(&self, data: &[f64]) -> Vec<f64> {
        if data.len() <= self.period {
            return vec![];
        }

        let mut values = wilder_rsi(data, self.period);
        values.split_off(self.period)
    }

    fn period(&self) -> usize {
        self.period + 1 // Need period+1 data points
    }

    fn name(&self) -> &str {
        "RSI"
    }
}

/// Smoothed %K and %D lines of a Stochastic RSI run.
///
/// %K always exists when this value exists; %D needs `d_period` %K values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochRsiLines {
    /// %K: rolling mean of the raw Stochastic RSI
    pub k: Vec<f64>,
    /// %D: rolling mean of %K
    pub d: Option<Vec<f64>>,
}

impl StochRsiLines {
    /// Convert into the `(%K, %D)` optional pair.
    pub fn into_pair(self) -> (Option<Vec<f64>>, Option<Vec<f64>>) {
        (Some(self.k), self.d)
    }
}

/// Stochastic RSI output for a single bar.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StochRsiOutput {
    /// %K (smoothed stochastic of RSI)
    pub k: f64,
    /// %D (signal)
    pub d: f64,
}

/// Stochastic RSI with TradingView-style smoothing.
///
/// RSI values are normalised against their own rolling min/max over
/// `period`, scaled to 0..=100, then smoothed by a `k_period` mean (%K) and a
/// `d_period` mean of %K (%D).
///
/// A window where the RSI was flat gives `0 / 0`; that `NaN` is kept in the
/// output rather than treated as a failure.
#[derive(Debug, Clone)]
pub struct StochRsi<P = WilderRsi> {
    provider: P,
    period: usize,
    k_period: usize,
    d_period: usize,
}

impl StochRsi {
    /// Create a Stochastic RSI with default parameters (14, 3, 3).
    pub fn new() -> Self {
        Self::with_periods(DEFAULT_RSI_PERIOD, DEFAULT_K_PERIOD, DEFAULT_D_PERIOD)
    }

    /// Create with custom periods and the Wilder RSI.
    ///
    /// Parameters are checked when calculating, not here.
    pub fn with_periods(period: usize, k_period: usize, d_period: usize) -> Self {
        Self::with_provider(WilderRsi, period, k_period, d_period)
    }
}

impl Default for StochRsi {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: RsiProvider> StochRsi<P> {
    /// Create with a custom RSI provider.
    pub fn with_provider(provider: P, period: usize, k_period: usize, d_period: usize) -> Self {
        Self {
            provider,
            period,
            k_period,
            d_period,
        }
    }

    /// `(period, k_period, d_period)`.
    pub fn periods(&self) -> (usize, usize, usize) {
        (self.period, self.k_period, self.d_period)
    }

    fn validate_params(&self) -> IndicatorResult<()> {
        if self.period < 2 {
            return Err(IndicatorError::InvalidParameter(format!(
                "RSI period must be at least 2, got {}",
                self.period
            )));
        }
        if self.k_period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "%K period must be at least 1".to_string(),
            ));
        }
        if self.d_period == 0 {
            return Err(IndicatorError::InvalidParameter(
                "%D period must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Calculate the %K and %D lines.
    ///
    /// # Errors
    /// - `InsufficientData` with [`Stage::Rsi`] when fewer than `period` RSI
    ///   values are defined
    /// - `InsufficientData` with [`Stage::PercentK`] when fewer than
    ///   `k_period` raw Stochastic RSI values exist
    /// - `InvalidParameter` / `CalculationError` for bad periods or a
    ///   provider that panics or breaks its length contract
    ///
    /// Too few %K values for %D is not an error: `d` is `None`.
    pub fn try_calculate(&self, prices: &[f64]) -> IndicatorResult<StochRsiLines> {
        self.validate_params()?;

        let rsi = panic::catch_unwind(AssertUnwindSafe(|| {
            self.provider.rsi_series(prices, self.period)
        }))
        .map_err(|payload| {
            IndicatorError::CalculationError(format!(
                "RSI provider panicked: {}",
                panic_message(payload.as_ref())
            ))
        })?;
        if rsi.len() != prices.len() {
            return Err(IndicatorError::CalculationError(format!(
                "RSI provider returned {} values for {} prices",
                rsi.len(),
                prices.len()
            )));
        }

        let rsi_valid: Vec<f64> = rsi.into_iter().filter(|v| !v.is_nan()).collect();
        if rsi_valid.len() < self.period {
            return Err(IndicatorError::InsufficientData {
                stage: Stage::Rsi,
                required: self.period,
                available: rsi_valid.len(),
            });
        }

        let (min_rsi, max_rsi) = rolling_min_max(&rsi_valid, self.period);

        // Each window is scored by the RSI at its end. Scaling the ratio keeps
        // the result within [0, 100] after rounding.
        let tail = &rsi_valid[rsi_valid.len() - min_rsi.len()..];
        let stoch_rsi: Vec<f64> = tail
            .iter()
            .zip(min_rsi.iter().zip(max_rsi.iter()))
            .map(|(&rsi, (&lowest, &highest))| 100.0 * ((rsi - lowest) / (highest - lowest)))
            .collect();

        if stoch_rsi.len() < self.k_period {
            return Err(IndicatorError::InsufficientData {
                stage: Stage::PercentK,
                required: self.k_period,
                available: stoch_rsi.len(),
            });
        }

        let k = rolling_mean(&stoch_rsi, self.k_period);
        let d = (k.len() >= self.d_period).then(|| rolling_mean(&k, self.d_period));

        Ok(StochRsiLines { k, d })
    }

    /// Calculate the `(%K, %D)` pair, absorbing every failure.
    ///
    /// Never fails: insufficient data, bad parameters and provider faults all
    /// come back as `None` for the affected lines and are logged. Running out
    /// of RSI values and faults are logged at ERROR, the later smoothing
    /// stages at DEBUG.
    pub fn compute(&self, prices: &[f64]) -> (Option<Vec<f64>>, Option<Vec<f64>>) {
        match self.try_calculate(prices) {
            Ok(lines) => {
                if lines.d.is_none() {
                    debug!(
                        stage = %Stage::PercentD,
                        required = self.d_period,
                        available = lines.k.len(),
                        "Not enough %K values to compute %D"
                    );
                }
                lines.into_pair()
            }
            Err(IndicatorError::InsufficientData {
                stage: Stage::Rsi,
                required,
                available,
            }) => {
                error!(
                    stage = %Stage::Rsi,
                    required,
                    available,
                    "Not enough RSI values to compute Stochastic RSI"
                );
                (None, None)
            }
            Err(IndicatorError::InsufficientData {
                stage,
                required,
                available,
            }) => {
                debug!(
                    stage = %stage,
                    required,
                    available,
                    "Not enough Stochastic RSI values to compute %K"
                );
                (None, None)
            }
            Err(e) => {
                error!(
                    period = self.period,
                    k = self.k_period,
                    d = self.d_period,
                    "An error occurred: {}",
                    e
                );
                (None, None)
            }
        }
    }
}

impl<P: RsiProvider> MultiOutputIndicator for StochRsi<P> {
    type Outputs = StochRsiOutput;

    /// Bars where both lines exist, aligned on their last value.
    fn calculate(&self, data: &[f64]) -> Vec<StochRsiOutput> {
        let lines = match self.try_calculate(data) {
            Ok(lines) => lines,
            Err(_) => return vec![],
        };

        let Some(d_line) = lines.d else {
            return vec![];
        };

        let offset = lines.k.len() - d_line.len();
        lines.k[offset..]
            .iter()
            .zip(d_line.iter())
            .map(|(&k, &d)| StochRsiOutput { k, d })
            .collect()
    }

    fn period(&self) -> usize {
        // period prices before the first RSI, then period + k + d - 2 RSI values
        self.period
            .saturating_mul(2)
            .saturating_add(self.k_period)
            .saturating_add(self.d_period)
            .saturating_sub(2)
    }

    fn name(&self) -> &str {
        "StochRSI"
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        *msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.as_str()
    } else {
        "unknown panic"
    }
}

/// Stochastic RSI `(%K, %D)` of `prices` with the Wilder RSI.
///
/// Shorthand for [`StochRsi::compute`]; see it for the failure policy.
pub fn stoch_rsi(
    prices: &[f64],
    period: usize,
    k_period: usize,
    d_period: usize,
) -> (Option<Vec<f64>>, Option<Vec<f64>>) {
    StochRsi::with_periods(period, k_period, d_period).compute(prices)
}
