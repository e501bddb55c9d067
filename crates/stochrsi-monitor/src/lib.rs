//! Logging setup for the Stochastic RSI tools.

mod logging;

pub use logging::{setup_logging, LOG_FILE_NAME};
