//! Error types for indicator calculation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Stage of the Stochastic RSI pipeline.
///
/// Used to report which step ran out of data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Valid RSI points feeding the rolling min/max window.
    Rsi,
    /// Raw Stochastic RSI points feeding the %K mean.
    PercentK,
    /// %K points feeding the %D mean.
    PercentD,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Rsi => write!(f, "RSI"),
            Stage::PercentK => write!(f, "%K"),
            Stage::PercentD => write!(f, "%D"),
        }
    }
}

/// Indicator calculation errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IndicatorError {
    #[error("Insufficient data for {stage}: need {required} points, have {available}")]
    InsufficientData {
        stage: Stage,
        required: usize,
        available: usize,
    },

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

impl IndicatorError {
    /// Whether the error only means "not enough data yet".
    pub fn is_insufficient_data(&self) -> bool {
        matches!(self, IndicatorError::InsufficientData { .. })
    }

    /// The pipeline stage that ran short, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            IndicatorError::InsufficientData { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Result type alias for indicator operations.
pub type IndicatorResult<T> = Result<T, IndicatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insufficient_data_message() {
        let err = IndicatorError::InsufficientData {
            stage: Stage::Rsi,
            required: 14,
            available: 3,
        };

        assert_eq!(
            err.to_string(),
            "Insufficient data for RSI: need 14 points, have 3"
        );
        assert!(err.is_insufficient_data());
        assert_eq!(err.stage(), Some(Stage::Rsi));
    }

    #[test]
    fn test_faults_have_no_stage() {
        let err = IndicatorError::InvalidParameter("k must be at least 1".to_string());
        assert!(!err.is_insufficient_data());
        assert_eq!(err.stage(), None);

        let err = IndicatorError::CalculationError("bad length".to_string());
        assert_eq!(err.to_string(), "Calculation error: bad length");
    }

    #[test]
    fn test_stage_serde() {
        let json = serde_json::to_string(&Stage::PercentK).unwrap();
        assert_eq!(json, "\"percent_k\"");

        let stage: Stage = serde_json::from_str("\"percent_d\"").unwrap();
        assert_eq!(stage, Stage::PercentD);
    }
}
