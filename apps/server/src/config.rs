use std::env;

use chrono_tz::Tz;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub timezone: Tz,
    pub points_enabled: bool,
    pub points_default: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let timezone: Tz = env::var("HOMEBOARD_TZ")
            .unwrap_or_else(|_| "America/Chicago".to_string())
            .parse()
            .map_err(|e| ConfigError::InvalidValue(format!("HOMEBOARD_TZ: {}", e)))?;

        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("PORT".to_string()))?,
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://homeboard.db?mode=rwc".to_string()),
            timezone,
            points_enabled: env::var("POINTS_ENABLED")
                .map(|v| v != "false")
                .unwrap_or(true),
            points_default: env::var("POINTS_DEFAULT")
                .unwrap_or_else(|_| "1".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("POINTS_DEFAULT".to_string()))?,
        })
    }
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidValue(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::InvalidValue(var) => write!(f, "Invalid value for: {}", var),
        }
    }
}

impl std::error::Error for ConfigError {}
