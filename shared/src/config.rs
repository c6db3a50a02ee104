//! Dashboard settings.
//!
//! Every field is optional in the JSON source; anything left out keeps its default.

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::aggregation::BucketOrder;
use crate::TimePeriod;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Period tab selected when the dashboard opens
    pub default_period: TimePeriod,
    pub bucket_order: BucketOrder,
    pub currency_symbol: String,
    /// One of off, error, warn, info, debug, trace
    pub log_level: String,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse dashboard config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_period: TimePeriod::ThreeMonths,
            bucket_order: BucketOrder::Chronological,
            currency_symbol: "$".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DashboardConfig {
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        let config: DashboardConfig = serde_json::from_str(source)?;
        config.level_filter()?;
        Ok(config)
    }

    pub fn level_filter(&self) -> Result<LevelFilter, ConfigError> {
        self.log_level
            .parse::<LevelFilter>()
            .map_err(|_| ConfigError::InvalidLogLevel(self.log_level.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_gives_defaults() {
        let config = DashboardConfig::from_json("{}").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Info);
    }

    #[test]
    fn test_partial_overrides() {
        let config = DashboardConfig::from_json(
            r#"{ "default_period": "1month", "bucket_order": "label", "log_level": "debug" }"#,
        )
        .unwrap();

        assert_eq!(config.default_period, TimePeriod::OneMonth);
        assert_eq!(config.bucket_order, BucketOrder::Label);
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.level_filter().unwrap(), LevelFilter::Debug);
    }

    #[test]
    fn test_invalid_sources_are_rejected() {
        assert!(matches!(
            DashboardConfig::from_json("not json"),
            Err(ConfigError::Parse(_))
        ));
        assert!(matches!(
            DashboardConfig::from_json(r#"{ "log_level": "loud" }"#),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
