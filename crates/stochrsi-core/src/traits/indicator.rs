//! Indicator trait definitions.

use crate::error::{IndicatorError, Stage};

/// Trait for technical indicators.
///
/// Indicators process price data and produce derived values.
pub trait Indicator: Send + Sync {
    /// The output type of the indicator.
    type Output;

    /// Calculate indicator values for the given data.
    ///
    /// # Arguments
    /// * `data` - Input data (typically prices)
    ///
    /// # Returns
    /// A vector of indicator values
    fn calculate(&self, data: &[f64]) -> Vec<Self::Output>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;
}

/// Multi-output indicator (e.g. Stochastic RSI with %K and %D).
///
/// Some indicators produce multiple related values.
pub trait MultiOutputIndicator: Send + Sync {
    /// The output type containing multiple values.
    type Outputs;

    /// Calculate indicator values for the given data.
    fn calculate(&self, data: &[f64]) -> Vec<Self::Outputs>;

    /// Get the minimum data points required.
    fn period(&self) -> usize;

    /// Get the name of the indicator.
    fn name(&self) -> &str;

    /// Validate that there are enough prices to reach the first output.
    fn validate_data(&self, data: &[f64]) -> Result<(), IndicatorError> {
        if data.len() < self.period() {
            return Err(IndicatorError::InsufficientData {
                stage: Stage::Rsi,
                required: self.period(),
                available: data.len(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct TestIndicator {
        period: usize,
    }

    impl Indicator for TestIndicator {
        type Output = f64;

        fn calculate(&self, data: &[f64]) -> Vec<f64> {
            if data.len() < self.period {
                return vec![];
            }
            // Simple sum indicator for testing
            data.windows(self.period)
                .map(|w| w.iter().sum())
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "test"
        }
    }

    struct PairIndicator {
        period: usize,
    }

    impl MultiOutputIndicator for PairIndicator {
        type Outputs = (f64, f64);

        fn calculate(&self, data: &[f64]) -> Vec<(f64, f64)> {
            data.windows(self.period)
                .map(|w| (w[0], w[w.len() - 1]))
                .collect()
        }

        fn period(&self) -> usize {
            self.period
        }

        fn name(&self) -> &str {
            "pair"
        }
    }

    #[test]
    fn test_indicator_validation() {
        let indicator = PairIndicator { period: 5 };

        let err = indicator.validate_data(&[1.0, 2.0, 3.0]).unwrap_err();
        assert_eq!(
            err,
            IndicatorError::InsufficientData {
                stage: Stage::Rsi,
                required: 5,
                available: 3,
            }
        );
        assert!(indicator.validate_data(&[1.0, 2.0, 3.0, 4.0, 5.0]).is_ok());
        assert_eq!(indicator.calculate(&[1.0, 2.0, 3.0, 4.0, 5.0]), vec![(1.0, 5.0)]);
    }

    #[test]
    fn test_indicator_calculate() {
        let indicator = TestIndicator { period: 3 };
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let result = indicator.calculate(&data);

        assert_eq!(result.len(), 3);
        assert!((result[0] - 6.0).abs() < 0.001); // 1+2+3
        assert!((result[1] - 9.0).abs() < 0.001); // 2+3+4
        assert!((result[2] - 12.0).abs() < 0.001); // 3+4+5
        assert_eq!(indicator.name(), "test");
    }
}
