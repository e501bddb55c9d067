//! Configuration structures.

use serde::{Deserialize, Serialize};
use stochrsi_core::error::{IndicatorError, IndicatorResult};

/// Main application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSettings,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub stoch_rsi: StochRsiSettings,
}

/// General app settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub environment: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: "stochrsi".to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// `pretty` or `json`
    pub format: String,
    /// Directory for a daily-rolling log file, in addition to stdout.
    pub file: Option<String>,
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "pretty".to_string(),
            file: None,
        }
    }
}

/// Stochastic RSI parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StochRsiSettings {
    /// RSI lookback, also the min/max window
    pub period: usize,
    /// %K smoothing window
    pub k: usize,
    /// %D smoothing window
    pub d: usize,
}

impl StochRsiSettings {
    /// Check the parameters before handing them to the calculator.
    pub fn validate(&self) -> IndicatorResult<()> {
        if self.period < 2 {
            return Err(IndicatorError::InvalidParameter(format!(
                "stoch_rsi.period must be at least 2, got {}",
                self.period
            )));
        }
        if self.k == 0 || self.d == 0 {
            return Err(IndicatorError::InvalidParameter(
                "stoch_rsi.k and stoch_rsi.d must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for StochRsiSettings {
    fn default() -> Self {
        Self {
            period: 14,
            k: 3,
            d: 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();

        assert_eq!(config.app.name, "stochrsi");
        assert_eq!(config.stoch_rsi.period, 14);
        assert_eq!(config.stoch_rsi.k, 3);
        assert_eq!(config.stoch_rsi.d, 3);
        assert!(!config.logging.is_json());
        assert!(config.stoch_rsi.validate().is_ok());
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [logging]
            format = "JSON"

            [stoch_rsi]
            d = 5
            "#,
        )
        .unwrap();

        assert!(config.logging.is_json());
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.stoch_rsi, StochRsiSettings { period: 14, k: 3, d: 5 });
        assert_eq!(config.app, AppSettings::default());
    }

    #[test]
    fn test_validate_rejects_bad_periods() {
        let settings = StochRsiSettings {
            period: 1,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(IndicatorError::InvalidParameter(_))
        ));

        let settings = StochRsiSettings {
            k: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
