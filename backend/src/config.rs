use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_RECRUIT_API_BASE_URL: &str = "http://localhost:5000";
const DEFAULT_HOLIDAY_API_BASE_URL: &str = "https://calendarific.com/api/v2";
const DEFAULT_HOLIDAY_COUNTRY: &str = "IN";
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:8080";
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be a socket address like 127.0.0.1:3000, got '{value}'")]
    InvalidAddress { key: &'static str, value: String },
    #[error("{key} must be a positive number of seconds, got '{value}'")]
    InvalidTimeout { key: &'static str, value: String },
}

/// Service configuration loaded from environment variables
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub recruit_api_base_url: String,
    pub holiday_api_base_url: String,
    /// Holiday fetches fail softly when absent
    pub holiday_api_key: Option<String>,
    pub holiday_country: String,
    pub bind_addr: SocketAddr,
    pub cors_origin: String,
    pub http_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let bind_value = get_or("BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_value
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::InvalidAddress {
                key: "BIND_ADDR",
                value: bind_value.clone(),
            })?;

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        key: "HTTP_TIMEOUT_SECS",
                        value,
                    })
                }
            },
        };

        Ok(AppConfig {
            recruit_api_base_url: get_or("RECRUIT_API_BASE_URL", DEFAULT_RECRUIT_API_BASE_URL),
            holiday_api_base_url: get_or("HOLIDAY_API_BASE_URL", DEFAULT_HOLIDAY_API_BASE_URL),
            holiday_api_key: get("HOLIDAY_API_KEY"),
            holiday_country: get_or("HOLIDAY_COUNTRY", DEFAULT_HOLIDAY_COUNTRY),
            bind_addr,
            cors_origin: get_or("CORS_ORIGIN", DEFAULT_CORS_ORIGIN),
            http_timeout,
        })
    }
}
