//! Application configuration
//!
//! Loaded from environment variables; a `.env` file is honored when present.

use serde::Deserialize;
use std::env;
use std::str::FromStr;

/// Main application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ApiConfig,
    pub database: DatabaseConfig,
    pub pagination: PaginationConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    pub host: String,
    pub port: u16,
}

impl ApiConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database connection settings
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Result paging limits for list-style endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct PaginationConfig {
    /// Page size when a request does not pass a `limit` parameter
    pub limit_param_default: i64,
    /// Absolute cap on results per request; larger asks are trimmed to this
    pub api_limit_max: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            limit_param_default: 25,
            api_limit_max: 1000,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error when a required variable is missing
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let pagination = PaginationConfig::default();

        Ok(Self {
            app: AppSettings {
                name: env_or("APP_NAME", "cookbook".to_string()),
                env: env_or("APP_ENV", Environment::default()),
            },
            api: ApiConfig {
                host: env_or("API_HOST", "127.0.0.1".to_string()),
                port: env_required("API_PORT")?,
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL")
                    .map_err(|_| ConfigError::MissingVar("DATABASE_URL"))?,
                max_connections: env_or("DATABASE_MAX_CONNECTIONS", 20),
                min_connections: env_or("DATABASE_MIN_CONNECTIONS", 5),
            },
            pagination: PaginationConfig {
                limit_param_default: env_or("LIMIT_PARAM_DEFAULT", pagination.limit_param_default),
                api_limit_max: env_or("API_LIMIT_MAX", pagination.api_limit_max),
            },
        })
    }
}

/// Parse a variable, falling back when it is absent or malformed
fn env_or<T: FromStr>(name: &str, fallback: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(fallback)
}

/// Parse a variable that must be present and well-formed
fn env_required<T: FromStr>(name: &'static str) -> Result<T, ConfigError> {
    match env::var(name) {
        Err(_) => Err(ConfigError::MissingVar(name)),
        Ok(raw) => raw
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
