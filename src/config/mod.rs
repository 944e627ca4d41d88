use std::env;

use crate::error::AppError;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub logging: LoggingConfig,
    pub request: RequestConfig,
}

/// Remote strategy API configuration
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    /// Bearer token, sent only when set.
    pub token: Option<String>,
    /// Session used when a command does not name one.
    pub default_session: Option<String>,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

/// Log output format
#[derive(Debug, Clone, PartialEq)]
pub enum LogFormat {
    Pretty,
    Json,
}

/// HTTP request configuration
#[derive(Debug, Clone)]
pub struct RequestConfig {
    pub timeout_ms: u64,
    pub max_retries: u32,
    pub retry_delay_ms: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, AppError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let base_url = env::var("STRATEGY_API_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        if base_url.trim().is_empty() {
            return Err(AppError::Config {
                message: "STRATEGY_API_URL must not be blank".to_string(),
            });
        }

        let api = ApiConfig {
            base_url,
            token: non_blank_var("STRATEGY_API_TOKEN"),
            default_session: non_blank_var("STRATEGY_SESSION_ID"),
        };

        let log_defaults = LoggingConfig::default();
        let logging = LoggingConfig {
            level: non_blank_var("LOG_LEVEL").unwrap_or(log_defaults.level),
            format: match env::var("LOG_FORMAT").map(|v| v.to_lowercase()).as_deref() {
                Ok("json") => LogFormat::Json,
                Ok("pretty") => LogFormat::Pretty,
                _ => log_defaults.format,
            },
        };

        let defaults = RequestConfig::default();
        let request = RequestConfig {
            timeout_ms: parsed_var("REQUEST_TIMEOUT_MS").unwrap_or(defaults.timeout_ms),
            max_retries: parsed_var("MAX_RETRIES").unwrap_or(defaults.max_retries),
            retry_delay_ms: parsed_var("RETRY_DELAY_MS").unwrap_or(defaults.retry_delay_ms),
        };

        Ok(Config {
            api,
            logging,
            request,
        })
    }
}

fn non_blank_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parsed_var<T: std::str::FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.parse().ok())
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            timeout_ms: 30000,
            max_retries: 3,
            retry_delay_ms: 1000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}
