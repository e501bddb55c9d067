//! Configuration management.

mod settings;

pub use settings::{AppConfig, AppSettings, LoggingConfig, StochRsiSettings};

use config::{Config, ConfigError, Environment, File};
use std::path::Path;

/// Environment variable prefix, e.g. `STOCHRSI__STOCH_RSI__PERIOD=21`.
pub const ENV_PREFIX: &str = "STOCHRSI";

/// Load configuration from file and environment.
///
/// The file is optional; every section falls back to its defaults.
pub fn load_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config = Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    config.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = load_config(Path::new("does/not/exist.toml")).unwrap();

        assert_eq!(config.stoch_rsi, StochRsiSettings::default());
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let dir = std::env::temp_dir().join(format!("stochrsi-config-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("custom.toml");
        fs::write(
            &path,
            "[stoch_rsi]\nperiod = 21\nk = 5\n\n[logging]\nlevel = \"debug\"\n",
        )
        .unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(config.stoch_rsi.period, 21);
        assert_eq!(config.stoch_rsi.k, 5);
        assert_eq!(config.stoch_rsi.d, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }
}
