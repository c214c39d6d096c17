//! Process configuration from environment variables (optionally via `.env`).

use std::str::FromStr;

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub max_connections: u32,
    /// `None` allows any origin.
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let database_url = var("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?;
        let host = var("HTTP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port: u16 = parse_or("HTTP_PORT", var("HTTP_PORT"), 8080, "a valid port number")?;
        let max_connections: u32 = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            var("DATABASE_MAX_CONNECTIONS"),
            10,
            "a positive number",
        )?;
        if max_connections == 0 {
            return Err(ConfigError::Invalid {
                name: "DATABASE_MAX_CONNECTIONS",
                expected: "a positive number",
                value: "0".to_string(),
            });
        }
        let cors_origin = var("CORS_ORIGIN").filter(|origin| origin != "*");

        Ok(Config {
            database_url,
            host,
            port,
            max_connections,
            cors_origin,
        })
    }
}

fn parse_or<T: FromStr>(
    name: &'static str,
    value: Option<String>,
    default: T,
    expected: &'static str,
) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid {
            name,
            expected,
            value,
        }),
    }
}
