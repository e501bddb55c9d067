//! Validate configuration command.

use anyhow::Result;
use std::path::Path;
use stochrsi_config::AppConfig;

pub fn run(config_path: &Path, config: &AppConfig) -> Result<()> {
    println!("Validating configuration: {:?}", config_path);
    if !config_path.exists() {
        println!("(file not found, using defaults and environment)");
    }

    if let Err(e) = config.stoch_rsi.validate() {
        println!("Configuration error: {}", e);
        return Err(e.into());
    }

    println!("Configuration is valid!");
    println!();
    println!("App: {}", config.app.name);
    println!("Environment: {}", config.app.environment);
    println!("Log level: {}", config.logging.level);
    println!("Log format: {}", config.logging.format);
    if let Some(dir) = &config.logging.file {
        println!("Log directory: {}", dir);
    }
    println!("RSI period: {}", config.stoch_rsi.period);
    println!("%K smoothing: {}", config.stoch_rsi.k);
    println!("%D smoothing: {}", config.stoch_rsi.d);

    Ok(())
}
