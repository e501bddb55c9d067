//! RSI provider trait.

/// Source of RSI values for the Stochastic RSI pipeline.
///
/// Implementations return one value per input price. Entries for which the
/// lookback is not yet available are `NaN`; they mean "no value yet", not zero.
/// Any Wilder RSI satisfies this contract.
pub trait RsiProvider: Send + Sync {
    /// Compute the RSI series for `prices` with lookback `period`.
    fn rsi_series(&self, prices: &[f64], period: usize) -> Vec<f64>;
}

impl<F> RsiProvider for F
where
    F: Fn(&[f64], usize) -> Vec<f64> + Send + Sync,
{
    fn rsi_series(&self, prices: &[f64], period: usize) -> Vec<f64> {
        self(prices, period)
    }
}
