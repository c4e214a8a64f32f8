use std::net::SocketAddr;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_ADDR: &str = "127.0.0.1:8080";
/// Every Monday at 00:00:00 UTC (seconds-first cron syntax).
const DEFAULT_WEEKLY_RESET_SCHEDULE: &str = "0 0 0 * * Mon";

pub struct Config {
    pub database_url: String,
    pub app_addr: SocketAddr,
    pub weekly_reset_schedule: String,
    /// Send the session cookie with the `Secure` flag.
    pub session_secure: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_addr: parse_var("APP_ADDR", DEFAULT_APP_ADDR)?,
            weekly_reset_schedule: std::env::var("WEEKLY_RESET_SCHEDULE")
                .unwrap_or_else(|_| DEFAULT_WEEKLY_RESET_SCHEDULE.to_string()),
            session_secure: parse_var("SESSION_SECURE", "false")?,
        })
    }
}

/// Reads an optional variable, falling back to `default` when unset.
fn parse_var<T: std::str::FromStr>(name: &str, default: &str) -> Result<T, ConfigError> {
    let value = std::env::var(name).unwrap_or_else(|_| default.to_string());
    value.parse::<T>().map_err(|_| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_defaults() {
        let addr: SocketAddr = parse_var("LABHUB_TEST_UNSET_ADDR", DEFAULT_APP_ADDR).unwrap();
        assert_eq!(addr.port(), 8080);

        let secure: bool = parse_var("LABHUB_TEST_UNSET_SECURE", "false").unwrap();
        assert!(!secure);
    }

    #[test]
    fn rejects_unparsable_default() {
        let result: Result<bool, _> = parse_var("LABHUB_TEST_UNSET_BOOL", "maybe");
        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "LABHUB_TEST_UNSET_BOOL"
        ));
    }
}
