//! Application configuration management.

use serde::Deserialize;

use crate::types::{Currency, Money};

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Settlement configuration.
    #[serde(default)]
    pub settlement: SettlementConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settlement configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SettlementConfig {
    /// Balances strictly inside `(-tolerance, tolerance)` count as settled.
    /// Must be a non-negative whole number of cents.
    #[serde(default = "default_tolerance")]
    pub tolerance: Money,
    /// Currency assumed for trip records that do not name one.
    #[serde(default)]
    pub currency: Currency,
}

impl Default for SettlementConfig {
    fn default() -> Self {
        Self {
            tolerance: default_tolerance(),
            currency: Currency::default(),
        }
    }
}

fn default_tolerance() -> Money {
    Money::CENT
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Output format.
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            format: LogFormat::default(),
        }
    }
}

fn default_filter() -> String {
    "tripsplit=info".to_string()
}

impl AppConfig {
    /// Loads configuration from config files and the environment.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `TRIPSPLIT__`-prefixed environment variables
    /// (e.g. `TRIPSPLIT__SETTLEMENT__TOLERANCE=0.05`).
    ///
    /// # Errors
    ///
    /// Returns an error if a source exists but cannot be parsed, or if a
    /// value is out of range (negative or sub-cent tolerance).
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("TRIPSPLIT").separator("__"))
            .build()?;

        let app: Self = config.try_deserialize()?;
        app.validate()?;
        Ok(app)
    }

    fn validate(&self) -> Result<(), config::ConfigError> {
        if self.settlement.tolerance.is_negative() {
            return Err(config::ConfigError::Message(format!(
                "settlement.tolerance must not be negative, got {}",
                self.settlement.tolerance
            )));
        }
        Ok(())
    }
}
