use shared::{ConfigError, DashboardConfig};

const DASHBOARD_CONFIG: &str = include_str!("../../dashboard.json");

/// Parse the bundled dashboard settings
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    DashboardConfig::from_json(DASHBOARD_CONFIG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_parses() {
        let config = load_config().unwrap();
        assert_eq!(config.currency_symbol, "$");
    }
}
