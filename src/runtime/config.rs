//! Configuration for the price operations.
//!
//! Defaults match the production warehouse. Each value can be overridden
//! from the environment:
//!
//! | Variable               | Field       | Default           |
//! |------------------------|-------------|-------------------|
//! | `PRICE_OPS_DATABASE`   | `database`  | `WH_testing`      |
//! | `PRICE_OPS_SCHEMA`     | `schema`    | `dbo`             |
//! | `PRICE_OPS_TIME_ZONE`  | `time_zone` | `America/Chicago` |

use chrono_tz::Tz;
use serde::Deserialize;
use thiserror::Error;

pub const ENV_DATABASE: &str = "PRICE_OPS_DATABASE";
pub const ENV_SCHEMA: &str = "PRICE_OPS_SCHEMA";
pub const ENV_TIME_ZONE: &str = "PRICE_OPS_TIME_ZONE";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Invalid {field}: {value:?} (letters, digits and '_' only)")]
    InvalidIdentifier { field: &'static str, value: String },
}

/// Where the price procedures live and which civil time zone summaries use.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PriceOpsConfig {
    /// First part of the three-part procedure name.
    pub database: String,
    /// Second part of the three-part procedure name.
    pub schema: String,
    /// Reference zone for summary timestamps.
    pub time_zone: Tz,
}

impl Default for PriceOpsConfig {
    fn default() -> Self {
        Self {
            database: "WH_testing".to_string(),
            schema: "dbo".to_string(),
            time_zone: chrono_tz::America::Chicago,
        }
    }
}

impl PriceOpsConfig {
    /// Defaults overridden by the `PRICE_OPS_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(database) = lookup(ENV_DATABASE) {
            config.database = database;
        }
        if let Some(schema) = lookup(ENV_SCHEMA) {
            config.schema = schema;
        }
        if let Some(zone) = lookup(ENV_TIME_ZONE) {
            config.time_zone = zone
                .parse::<Tz>()
                .map_err(|_| ConfigError::UnknownTimeZone(zone))?;
        }
        config.validate()?;
        Ok(config)
    }

    /// Namespace parts end up in statement text, so they must be plain
    /// identifiers.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_identifier("database", &self.database)?;
        check_identifier("schema", &self.schema)
    }
}

fn check_identifier(field: &'static str, value: &str) -> Result<(), ConfigError> {
    let valid = !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(ConfigError::InvalidIdentifier {
            field,
            value: value.to_string(),
        })
    }
}
