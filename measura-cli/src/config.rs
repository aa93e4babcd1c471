//! Runtime configuration from the environment

use std::env;
use measura_core::Number;

/// Variable holding the number of decimal places to render
pub const PRECISION_VAR: &str = "MEASURA_PRECISION";

/// Variable holding the tracing filter
pub const LOG_VAR: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "warn";

/// Upper bound for `MEASURA_PRECISION`
const MAX_PRECISION: u32 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Decimal places for rendered amounts; None renders exactly
    pub precision: Option<u32>,
    /// Filter directive for the log subscriber
    pub log_filter: String,
    /// Problems found while reading the environment, reported once logging is up
    pub warnings: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            precision: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            warnings: Vec::new(),
        }
    }
}

impl Config {
    /// Load from the process environment
    pub fn from_env() -> Self {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Load from any variable source
    pub fn from_vars(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Config::default();

        if let Some(filter) = get(LOG_VAR).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(raw) = get(PRECISION_VAR) {
            match raw.trim().parse::<u32>() {
                Ok(places) if places <= MAX_PRECISION => config.precision = Some(places),
                _ => config.warnings.push(format!(
                    "ignoring {}={:?}: expected an integer between 0 and {}",
                    PRECISION_VAR, raw, MAX_PRECISION
                )),
            }
        }

        config
    }

    /// Render an amount according to the configured precision
    pub fn render(&self, amount: &Number) -> String {
        match self.precision {
            Some(places) => amount.as_decimal(places),
            None => amount.to_string(),
        }
    }
}
