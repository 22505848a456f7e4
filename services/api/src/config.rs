//! services/api/src/config.rs
//!
//! Runtime settings: listen address, log level, CORS origin, the simulated
//! assistant latencies, and the session lifetime. Values come from the
//! environment, with a `.env` file honoured during local development.

use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;
use tracing::Level;

/// Raised when an environment variable is set but cannot be parsed.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} has an invalid value: {1}")]
    InvalidValue(String, String),
}

/// Settings read once at startup and shared through `AppState`.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub cors_origin: String,
    /// How long the assistant "types" before its reply lands.
    pub chat_reply_delay: Duration,
    /// How long the summary action "thinks" before the abstract is replaced.
    pub summary_delay: Duration,
    pub session_ttl_days: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 3000)),
            log_level: Level::INFO,
            cors_origin: "http://localhost:3000".to_string(),
            chat_reply_delay: Duration::from_millis(1500),
            summary_delay: Duration::from_millis(2000),
            session_ttl_days: 30,
        }
    }
}

/// Reads `name`, falling back to `default` when it is unset.
fn var_or<T: FromStr>(name: &str, default: T) -> Result<T, ConfigError>
where
    T::Err: std::fmt::Display,
{
    match std::env::var(name) {
        Ok(raw) => raw
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), e.to_string())),
        Err(_) => Ok(default),
    }
}

/// Reads `SESSION_TTL_DAYS`, which must be a positive number of days.
fn read_session_ttl(default: i64) -> Result<i64, ConfigError> {
    let days = var_or("SESSION_TTL_DAYS", default)?;
    if days <= 0 {
        return Err(ConfigError::InvalidValue(
            "SESSION_TTL_DAYS".to_string(),
            "must be a positive number of days".to_string(),
        ));
    }
    Ok(days)
}

impl Config {
    /// Reads every setting from the environment, falling back to the defaults.
    ///
    /// A `.env` file is read first, except in unit tests.
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        let defaults = Config::default();

        // --- Load Server Settings ---
        let bind_address = var_or("BIND_ADDRESS", defaults.bind_address)?;

        let log_level_str = std::env::var("RUST_LOG").unwrap_or_else(|_| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_origin = std::env::var("CORS_ORIGIN").unwrap_or(defaults.cors_origin);

        // --- Load Simulated Latency and Session Settings ---
        let chat_reply_delay =
            Duration::from_millis(var_or("CHAT_REPLY_DELAY_MS", 1500u64)?);
        let summary_delay = Duration::from_millis(var_or("SUMMARY_DELAY_MS", 2000u64)?);

        let session_ttl_days = read_session_ttl(defaults.session_ttl_days)?;

        Ok(Self {
            bind_address,
            log_level,
            cors_origin,
            chat_reply_delay,
            summary_delay,
            session_ttl_days,
        })
    }

    /// A configuration with no simulated latency, for tests.
    pub fn instant() -> Self {
        Self {
            chat_reply_delay: Duration::ZERO,
            summary_delay: Duration::ZERO,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_values() {
        let config = Config::default();
        assert_eq!(config.bind_address.port(), 3000);
        assert_eq!(config.chat_reply_delay, Duration::from_millis(1500));
        assert_eq!(config.summary_delay, Duration::from_millis(2000));
        assert_eq!(config.session_ttl_days, 30);
    }

    #[test]
    fn unset_variables_fall_back() {
        let value: u64 = var_or("SHELF_AWARE_SURELY_UNSET_VARIABLE", 7).unwrap();
        assert_eq!(value, 7);
    }

    #[test]
    fn unparseable_variable_is_an_invalid_value() {
        std::env::set_var("SHELF_AWARE_TEST_BAD_DELAY_MS", "soon");
        let result: Result<u64, _> = var_or("SHELF_AWARE_TEST_BAD_DELAY_MS", 5);
        std::env::remove_var("SHELF_AWARE_TEST_BAD_DELAY_MS");

        match result {
            Err(ConfigError::InvalidValue(name, _)) => {
                assert_eq!(name, "SHELF_AWARE_TEST_BAD_DELAY_MS")
            }
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn zero_session_ttl_is_rejected() {
        std::env::set_var("SESSION_TTL_DAYS", "0");
        let result = read_session_ttl(30);
        std::env::remove_var("SESSION_TTL_DAYS");

        match result {
            Err(ConfigError::InvalidValue(name, _)) => assert_eq!(name, "SESSION_TTL_DAYS"),
            other => panic!("expected InvalidValue, got {:?}", other),
        }
    }

    #[test]
    fn instant_config_has_no_delays() {
        let config = Config::instant();
        assert!(config.chat_reply_delay.is_zero());
        assert!(config.summary_delay.is_zero());
    }
}
