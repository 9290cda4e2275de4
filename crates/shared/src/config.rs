//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// External back-office API configuration.
    pub api: ApiConfig,
}

/// External API configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the back-office REST API.
    pub base_url: String,
    /// Fixed per-request deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Bearer token for the current session, if any.
    #[serde(default)]
    pub token: Option<String>,
}

fn default_timeout_ms() -> u64 {
    10_000
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("DEALERDESK").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_timeout() {
        let api: ApiConfig =
            serde_json::from_str(r#"{"base_url": "http://localhost:8000/api"}"#).unwrap();
        assert_eq!(api.timeout_ms, 10_000);
        assert!(api.token.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let api: ApiConfig = serde_json::from_str(
            r#"{"base_url": "https://api.example.com", "timeout_ms": 2500, "token": "t0k"}"#,
        )
        .unwrap();
        assert_eq!(api.timeout_ms, 2500);
        assert_eq!(api.token.as_deref(), Some("t0k"));
    }
}
