//! Core traits for indicator calculation.

mod indicator;
mod rsi_provider;

pub use indicator::{Indicator, MultiOutputIndicator};
pub use rsi_provider::RsiProvider;
