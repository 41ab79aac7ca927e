//! Server configuration from the environment.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

use crate::planner::SearchConfig;

/// Default listen address.
const DEFAULT_BIND_ADDR: SocketAddr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 3000);

/// Error parsing a configuration variable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid value for {var}: {value:?}")]
pub struct ConfigError {
    var: &'static str,
    value: String,
}

/// Everything the binary needs to start.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to listen on.
    pub bind_addr: SocketAddr,

    /// Seed document loaded from disk at startup, if set.
    pub seed_path: Option<PathBuf>,

    /// Seed document fetched over HTTP at startup, if set.
    pub seed_url: Option<String>,

    /// Route search limits.
    pub search: SearchConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR,
            seed_path: None,
            seed_url: None,
            search: SearchConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from process environment variables.
    ///
    /// - `PMR_BIND_ADDR` (default `127.0.0.1:3000`)
    /// - `PMR_SEED_PATH`, `PMR_SEED_URL`
    /// - `PMR_DEFAULT_MAX_TRANSFERS`, `PMR_MAX_TRANSFERS_CEILING`
    /// - `PMR_ROUTE_DEADLINE_MS`
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = SearchConfig::default();

        let bind_addr = parse_var(&lookup, "PMR_BIND_ADDR")?.unwrap_or(DEFAULT_BIND_ADDR);

        let search = SearchConfig::new(
            parse_var(&lookup, "PMR_DEFAULT_MAX_TRANSFERS")?.unwrap_or(defaults.default_max_transfers),
            parse_var(&lookup, "PMR_MAX_TRANSFERS_CEILING")?.unwrap_or(defaults.max_transfers_ceiling),
            parse_var(&lookup, "PMR_ROUTE_DEADLINE_MS")?.unwrap_or(defaults.deadline_ms),
        );

        Ok(Self {
            bind_addr,
            seed_path: non_empty(&lookup, "PMR_SEED_PATH").map(PathBuf::from),
            seed_url: non_empty(&lookup, "PMR_SEED_URL"),
            search,
        })
    }
}

fn non_empty(lookup: &impl Fn(&str) -> Option<String>, var: &'static str) -> Option<String> {
    lookup(var).filter(|v| !v.trim().is_empty())
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
) -> Result<Option<T>, ConfigError> {
    match non_empty(lookup, var) {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError { var, value }),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = ServerConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert!(config.seed_path.is_none());
        assert!(config.seed_url.is_none());
        assert_eq!(config.search.default_max_transfers, 3);
        assert_eq!(config.search.max_transfers_ceiling, 5);
        assert_eq!(config.search.deadline_ms, 2000);
    }

    #[test]
    fn reads_all_variables() {
        let config = ServerConfig::from_lookup(lookup(&[
            ("PMR_BIND_ADDR", "0.0.0.0:8080"),
            ("PMR_SEED_PATH", "/data/seed.json"),
            ("PMR_SEED_URL", "https://example.org/seed.json"),
            ("PMR_DEFAULT_MAX_TRANSFERS", "2"),
            ("PMR_MAX_TRANSFERS_CEILING", "4"),
            ("PMR_ROUTE_DEADLINE_MS", "750"),
        ]))
        .unwrap();

        assert_eq!(config.bind_addr.to_string(), "0.0.0.0:8080");
        assert_eq!(config.seed_path, Some(PathBuf::from("/data/seed.json")));
        assert_eq!(config.seed_url.as_deref(), Some("https://example.org/seed.json"));
        assert_eq!(config.search.default_max_transfers, 2);
        assert_eq!(config.search.max_transfers_ceiling, 4);
        assert_eq!(config.search.deadline_ms, 750);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = ServerConfig::from_lookup(lookup(&[("PMR_SEED_PATH", "  ")])).unwrap();
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn rejects_garbage() {
        let err = ServerConfig::from_lookup(lookup(&[("PMR_ROUTE_DEADLINE_MS", "soon")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for PMR_ROUTE_DEADLINE_MS: \"soon\"");
    }
}
