//! Centralized configuration (environment variables + defaults).
//!
//! Read once at startup; any problem here aborts the process before it serves traffic.

use anyhow::{anyhow, Context};
use std::net::SocketAddr;

pub const DEFAULT_DB_NAME: &str = "portfolio";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8001";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Postgres connection string (required).
    pub database_url: String,
    /// Schema that holds the collections.
    pub db_name: String,
    pub bind_addr: SocketAddr,
    pub max_connections: u32,
    /// Insert default content into empty collections at startup.
    pub seed_defaults: bool,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads the process environment.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DATABASE_URL environment variable is not set"))?;

        let db_name = lookup("DB_NAME")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_DB_NAME.to_string());

        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address like 0.0.0.0:8001")?;

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(v) => v
                .parse::<u32>()
                .context("DB_MAX_CONNECTIONS must be a valid u32")?
                .max(1),
            None => DEFAULT_MAX_CONNECTIONS,
        };

        let seed_defaults = match lookup("SEED_DEFAULTS") {
            Some(v) => parse_flag(&v)
                .ok_or_else(|| anyhow!("SEED_DEFAULTS must be true or false, got '{}'", v))?,
            None => true,
        };

        Ok(Self {
            database_url,
            db_name,
            bind_addr,
            max_connections,
            seed_defaults,
        })
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> anyhow::Result<AppConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn database_url_is_required() {
        let err = config(&[]).unwrap_err();
        assert!(err.to_string().contains("DATABASE_URL"));
    }

    #[test]
    fn defaults_apply() {
        let cfg = config(&[("DATABASE_URL", "postgres://localhost/app")]).unwrap();
        assert_eq!(cfg.db_name, "portfolio");
        assert_eq!(cfg.bind_addr.port(), 8001);
        assert_eq!(cfg.max_connections, 5);
        assert!(cfg.seed_defaults);
    }

    #[test]
    fn invalid_values_are_rejected() {
        assert!(config(&[("DATABASE_URL", "x"), ("BIND_ADDR", "nope")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("DB_MAX_CONNECTIONS", "-1")]).is_err());
        assert!(config(&[("DATABASE_URL", "x"), ("SEED_DEFAULTS", "maybe")]).is_err());
        let cfg = config(&[("DATABASE_URL", "x"), ("SEED_DEFAULTS", "false")]).unwrap();
        assert!(!cfg.seed_defaults);
    }
}
