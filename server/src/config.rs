//! Runtime configuration read from the environment.
//!
//! | Variable | Default |
//! |---|---|
//! | `HOST` | `127.0.0.1` |
//! | `PORT` | `3000` |
//! | `TODO_STORE` | `sqlite` (or `memory`) |
//! | `DATABASE_URL` | `sqlite://todo.db` |
//! | `DATABASE_MAX_CONNECTIONS` | `1` |
//! | `LOG_FORMAT` | `text` (or `json`) |

use std::{env, str::FromStr};

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    Memory,
    Sqlite,
}

impl FromStr for StoreKind {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "memory" => Ok(StoreKind::Memory),
            "sqlite" => Ok(StoreKind::Sqlite),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub store: StoreKind,
    pub database_url: String,
    pub max_connections: u32,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup; unset keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        Ok(Config {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: parse(&lookup, "PORT", 3000)?,
            store: parse(&lookup, "TODO_STORE", StoreKind::Sqlite)?,
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| "sqlite://todo.db".to_string()),
            max_connections: parse(&lookup, "DATABASE_MAX_CONNECTIONS", 1)?,
            log_format: parse(&lookup, "LOG_FORMAT", LogFormat::Text)?,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|_| ConfigError { var, value }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.addr(), "127.0.0.1:3000");
        assert_eq!(config.store, StoreKind::Sqlite);
        assert_eq!(config.database_url, "sqlite://todo.db");
        assert_eq!(config.max_connections, 1);
        assert_eq!(config.log_format, LogFormat::Text);
    }

    #[test]
    fn overrides() {
        let config = config_from(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "8080"),
            ("TODO_STORE", "Memory"),
            ("LOG_FORMAT", "json"),
        ])
        .unwrap();
        assert_eq!(config.addr(), "0.0.0.0:8080");
        assert_eq!(config.store, StoreKind::Memory);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn bad_port_names_the_variable() {
        let err = config_from(&[("PORT", "eighty")]).unwrap_err();
        assert_eq!(err.var, "PORT");
        assert_eq!(err.to_string(), r#"invalid value for PORT: "eighty""#);
    }

    #[test]
    fn unknown_store_is_rejected() {
        let err = config_from(&[("TODO_STORE", "postgres")]).unwrap_err();
        assert_eq!(err.var, "TODO_STORE");
    }
}
