//! Demo command implementation.

use anyhow::{Context, Result};
use serde::Serialize;
use stochrsi_config::AppConfig;
use stochrsi_indicators::sample::sample_prices;
use stochrsi_indicators::StochRsi;
use tracing::info;

use crate::cli::{DemoArgs, OutputFormat};

/// Result of one demo run.
#[derive(Debug, Serialize)]
struct DemoReport {
    prices: usize,
    period: usize,
    k_period: usize,
    d_period: usize,
    k: Option<Vec<f64>>,
    d: Option<Vec<f64>>,
}

impl DemoReport {
    fn summary(&self) -> String {
        let mut s = String::new();

        s.push_str("═══════════════════════════════════════════════════════════\n");
        s.push_str("                  STOCHASTIC RSI (DEMO)                     \n");
        s.push_str("═══════════════════════════════════════════════════════════\n\n");

        s.push_str(&format!("  Prices:              {}\n", self.prices));
        s.push_str(&format!(
            "  Parameters:          period={} k={} d={}\n\n",
            self.period, self.k_period, self.d_period
        ));

        s.push_str(&format_line("%K", self.k.as_deref()));
        s.push('\n');
        s.push_str(&format_line("%D", self.d.as_deref()));

        s
    }
}

fn format_line(label: &str, values: Option<&[f64]>) -> String {
    let mut s = String::new();
    s.push_str(&format!("{}\n", label));
    s.push_str("───────────────────────────────────────────────────────────\n");

    match values {
        Some(values) => {
            s.push_str(&format!("  {} values\n", values.len()));
            for chunk in values.chunks(8) {
                let row: Vec<String> = chunk
                    .iter()
                    .map(|v| if v.is_nan() { "NaN".to_string() } else { format!("{:.2}", v) })
                    .collect();
                s.push_str(&format!("  {}\n", row.join("  ")));
            }
        }
        None => s.push_str("  unavailable (not enough data)\n"),
    }

    s
}

pub fn run(args: DemoArgs, config: &AppConfig) -> Result<()> {
    let settings = config.stoch_rsi;
    settings
        .validate()
        .context("Invalid [stoch_rsi] configuration")?;

    let prices = sample_prices(args.cycles);
    info!(
        prices = prices.len(),
        period = settings.period,
        k = settings.k,
        d = settings.d,
        "Running Stochastic RSI over sample prices"
    );

    let stoch = StochRsi::with_periods(settings.period, settings.k, settings.d);
    let (k, d) = stoch.compute(&prices);

    let report = DemoReport {
        prices: prices.len(),
        period: settings.period,
        k_period: settings.k,
        d_period: settings.d,
        k,
        d,
    };

    // Output results
    match args.output {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        OutputFormat::Text => {
            println!("{}", report.summary());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        let line = format_line("%K", Some(&[12.5, f64::NAN]));
        assert!(line.contains("2 values"));
        assert!(line.contains("12.50  NaN"));

        let line = format_line("%D", None);
        assert!(line.contains("unavailable"));
    }

    #[test]
    fn test_report_json_writes_nan_as_null() {
        let report = DemoReport {
            prices: 3,
            period: 14,
            k_period: 3,
            d_period: 3,
            k: Some(vec![f64::NAN, 50.0]),
            d: None,
        };
        let json = serde_json::to_string(&report).unwrap();

        assert!(json.contains(r#""k":[null,50.0]"#));
        assert!(json.contains(r#""d":null"#));
    }
}
