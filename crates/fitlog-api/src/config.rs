use std::collections::HashMap;
use std::env;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database_path: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let values: HashMap<String, String> = env::vars().collect();
        Self::from_lookup(|name| values.get(name).cloned())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let bind_addr = value_or_default(&lookup, "FITLOG_API_BIND_ADDR", "127.0.0.1:8080");
        let database_path = value_or_default(&lookup, "FITLOG_DB_PATH", "fitlog.db");

        if bind_addr.is_empty() {
            return Err(ConfigError::Invalid(
                "FITLOG_API_BIND_ADDR must not be empty".to_string(),
            ));
        }
        if database_path.is_empty() {
            return Err(ConfigError::Invalid(
                "FITLOG_DB_PATH must not be empty".to_string(),
            ));
        }

        Ok(Self {
            bind_addr,
            database_path,
        })
    }
}

fn value_or_default(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &'static str,
    default: &str,
) -> String {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
        .unwrap_or_else(|| default.to_string())
}
