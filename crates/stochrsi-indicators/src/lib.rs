//! Stochastic RSI indicator.
//!
//! This crate computes the Stochastic RSI smoothed into %K and %D lines, the
//! way TradingView draws it:
//! - [`Rsi`] / [`WilderRsi`]: Wilder RSI, the default RSI provider
//! - [`rolling`]: sliding-window min/max and mean kernels
//! - [`StochRsi`]: the %K / %D calculator
//!
//! The RSI gain/loss split uses SIMD via the `wide` crate.

pub mod momentum;
pub mod rolling;
pub mod sample;
pub mod simd;

pub use momentum::{
    stoch_rsi, wilder_rsi, Rsi, StochRsi, StochRsiLines, StochRsiOutput, WilderRsi,
    DEFAULT_D_PERIOD, DEFAULT_K_PERIOD, DEFAULT_RSI_PERIOD,
};
