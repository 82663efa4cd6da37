use std::env;
use std::net::SocketAddr;

use thiserror::Error;

use crate::models::DateFormat;

pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("BOOKING_ADDR is invalid: {0}")]
    Addr(String),

    #[error("MAX_TOTAL_SESSIONS must be a positive integer, got {0:?}")]
    MaxTotalSessions(String),

    #[error("REPORT_DATE_FORMAT cannot render a calendar date: {0:?}")]
    DateFormat(String),
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub addr: SocketAddr,
    /// Upper bound on `total_sessions` accepted over HTTP; `None` accepts any count.
    pub max_total_sessions: Option<u32>,
    pub date_format: DateFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            max_total_sessions: None,
            date_format: DateFormat::default(),
        }
    }
}

impl AppConfig {
    pub fn new_from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            env::var("BOOKING_ADDR").ok(),
            env::var("MAX_TOTAL_SESSIONS").ok(),
            env::var("REPORT_DATE_FORMAT").ok(),
        )
    }

    /// Builds the config from raw variable values; `None` falls back to the default.
    pub fn from_vars(
        addr: Option<String>,
        max_total_sessions: Option<String>,
        date_format: Option<String>,
    ) -> Result<Self, ConfigError> {
        let addr = addr
            .as_deref()
            .unwrap_or(DEFAULT_ADDR)
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Addr(e.to_string()))?;

        let max_total_sessions = match max_total_sessions {
            Some(raw) => Some(
                raw.trim()
                    .parse::<u32>()
                    .ok()
                    .filter(|n| *n >= 1)
                    .ok_or(ConfigError::MaxTotalSessions(raw))?,
            ),
            None => None,
        };

        let date_format = match date_format {
            Some(pattern) => {
                DateFormat::parse(&pattern).ok_or(ConfigError::DateFormat(pattern))?
            }
            None => DateFormat::default(),
        };

        Ok(Self {
            addr,
            max_total_sessions,
            date_format,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = AppConfig::from_vars(None, None, None).unwrap();
        assert_eq!(config.addr, AppConfig::default().addr);
        assert_eq!(config.max_total_sessions, None);
        assert_eq!(config.date_format, DateFormat::default());
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_vars(
            Some("0.0.0.0:8080".to_string()),
            Some("10".to_string()),
            Some("%Y-%m-%d".to_string()),
        )
        .unwrap();
        assert_eq!(config.addr.port(), 8080);
        assert_eq!(config.max_total_sessions, Some(10));
        assert_eq!(config.date_format.as_str(), "%Y-%m-%d");
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            AppConfig::from_vars(Some("nope".to_string()), None, None),
            Err(ConfigError::Addr(_))
        ));
        assert!(matches!(
            AppConfig::from_vars(None, Some("0".to_string()), None),
            Err(ConfigError::MaxTotalSessions(_))
        ));
        assert!(matches!(
            AppConfig::from_vars(None, None, Some("%Q".to_string())),
            Err(ConfigError::DateFormat(_))
        ));
    }

    #[test]
    fn rejects_time_only_date_format() {
        assert_eq!(
            AppConfig::from_vars(None, None, Some("%H:%M".to_string())).unwrap_err(),
            ConfigError::DateFormat("%H:%M".to_string())
        );
        assert!(matches!(
            AppConfig::from_vars(None, None, Some("%d/%m/%Y %z".to_string())),
            Err(ConfigError::DateFormat(_))
        ));
    }
}
