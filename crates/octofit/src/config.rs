//! Server configuration read from the environment.

use std::env;

use thiserror::Error;

pub const DEFAULT_PORT: u16 = 8000;
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    /// PostgreSQL connection string. When absent the in-memory store is used.
    pub database_url: Option<String>,
    pub port: u16,
    pub max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: None,
            port: DEFAULT_PORT,
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl Config {
    /// Reads `DATABASE_URL`, `PORT` and `DATABASE_MAX_CONNECTIONS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Reads only the database settings; `port` keeps its default.
    ///
    /// Used by tools that never bind a listener.
    pub fn database_from_env() -> Result<Self, ConfigError> {
        Self::database_from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        Ok(Self {
            port,
            ..Self::database_from_lookup(lookup)?
        })
    }

    fn database_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.trim().is_empty());
        let max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_MAX_CONNECTIONS,
        )?;

        Ok(Self {
            database_url,
            max_connections,
            ..Self::default()
        })
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.database_url, None);
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
    }

    #[test]
    fn test_reads_values() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://octofit@localhost/octofit_db"),
            ("PORT", "3001"),
            ("DATABASE_MAX_CONNECTIONS", "10"),
        ]))
        .unwrap();
        assert_eq!(
            config.database_url.as_deref(),
            Some("postgres://octofit@localhost/octofit_db")
        );
        assert_eq!(config.port, 3001);
        assert_eq!(config.max_connections, 10);
    }

    #[test]
    fn test_blank_database_url_is_ignored() {
        let config = Config::from_lookup(lookup_from(&[("DATABASE_URL", "  ")])).unwrap();
        assert!(config.database_url.is_none());
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_database_settings_ignore_port() {
        let lookup = lookup_from(&[
            ("DATABASE_URL", "postgres://octofit@localhost/octofit_db"),
            ("PORT", "eighty"),
            ("DATABASE_MAX_CONNECTIONS", "2"),
        ]);
        let config = Config::database_from_lookup(&lookup).unwrap();
        assert!(config.database_url.is_some());
        assert_eq!(config.max_connections, 2);
        assert_eq!(config.port, DEFAULT_PORT);

        assert!(Config::from_lookup(&lookup).is_err());
    }

    #[test]
    fn test_database_settings_reject_bad_pool_size() {
        let err = Config::database_from_lookup(lookup_from(&[("DATABASE_MAX_CONNECTIONS", "many")]))
            .unwrap_err();
        assert!(err.to_string().contains("DATABASE_MAX_CONNECTIONS"));
    }
}
