use std::net::IpAddr;
use std::str::FromStr;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("invalid value for {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub host: IpAddr,
    pub port: u16,
    pub port_fallback_attempts: u16,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match lookup("STORAGE") {
            None => StorageBackend::Postgres,
            Some(v) if v.eq_ignore_ascii_case("postgres") => StorageBackend::Postgres,
            Some(v) if v.eq_ignore_ascii_case("memory") => StorageBackend::Memory,
            Some(value) => return Err(ConfigError::Invalid { key: "STORAGE", value }),
        };

        let database_url = lookup("DATABASE_URL");
        if storage == StorageBackend::Postgres && database_url.is_none() {
            return Err(ConfigError::Missing("DATABASE_URL"));
        }

        Ok(Self {
            storage,
            database_url,
            max_connections: parse_or(&lookup, "DATABASE_MAX_CONNECTIONS", 5)?,
            host: parse_or(&lookup, "HOST", IpAddr::from([127, 0, 0, 1]))?,
            port: parse_or(&lookup, "PORT", 3000)?,
            port_fallback_attempts: parse_or(&lookup, "PORT_FALLBACK_ATTEMPTS", 20)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match lookup(key) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_with_database_url() {
        let cfg = config(&[("DATABASE_URL", "postgres://localhost/products")]).unwrap();
        assert_eq!(cfg.storage, StorageBackend::Postgres);
        assert_eq!(cfg.host, IpAddr::from([127, 0, 0, 1]));
        assert_eq!(cfg.port, 3000);
        assert_eq!(cfg.max_connections, 5);
        assert_eq!(cfg.port_fallback_attempts, 20);
    }

    #[test]
    fn postgres_requires_database_url() {
        assert!(matches!(config(&[]), Err(ConfigError::Missing("DATABASE_URL"))));
    }

    #[test]
    fn memory_storage_needs_no_database() {
        let cfg = config(&[("STORAGE", "memory"), ("PORT", "8081")]).unwrap();
        assert_eq!(cfg.storage, StorageBackend::Memory);
        assert!(cfg.database_url.is_none());
        assert_eq!(cfg.port, 8081);
    }

    #[test]
    fn rejects_bad_values() {
        let err = config(&[("STORAGE", "memory"), ("PORT", "eighty")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "PORT", .. }));

        let err = config(&[("STORAGE", "redis")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "STORAGE", .. }));
    }
}
