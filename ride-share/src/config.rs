//! Server configuration.

use std::net::SocketAddr;
use std::path::PathBuf;

use tracing::warn;

/// Environment variable naming the data directory.
pub const DATA_DIR_VAR: &str = "RIDESHARE_DATA_DIR";

/// Environment variable naming the listen address.
pub const ADDR_VAR: &str = "RIDESHARE_ADDR";

/// Where to read data from and where to listen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Directory holding `drivers.csv`, `passengers.csv` and `trips.csv`.
    pub data_dir: PathBuf,

    /// Address the reporting API binds to.
    pub addr: SocketAddr,
}

impl ServerConfig {
    /// Create a configuration with the given data directory and default address.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Set the data directory.
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    /// Set the listen address.
    pub fn with_addr(mut self, addr: SocketAddr) -> Self {
        self.addr = addr;
        self
    }

    /// Build from the process environment, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    ///
    /// An unparseable address is logged and replaced by the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(dir) = lookup(DATA_DIR_VAR).filter(|d| !d.is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }

        if let Some(raw) = lookup(ADDR_VAR) {
            match raw.parse() {
                Ok(addr) => config.addr = addr,
                Err(e) => warn!(value = %raw, error = %e, "ignoring invalid {ADDR_VAR}"),
            }
        }

        config
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("support"),
            addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn default_config() {
        let config = ServerConfig::default();
        assert_eq!(config.data_dir, PathBuf::from("support"));
        assert_eq!(config.addr.to_string(), "127.0.0.1:3000");
    }

    #[test]
    fn builder_methods() {
        let addr: SocketAddr = "0.0.0.0:8080".parse().unwrap();
        let config = ServerConfig::new("data").with_addr(addr);
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.addr, addr);

        let config = config.with_data_dir("other");
        assert_eq!(config.data_dir, PathBuf::from("other"));
    }

    #[test]
    fn from_lookup_reads_both_vars() {
        let config = ServerConfig::from_lookup(lookup(&[
            (DATA_DIR_VAR, "/srv/rides"),
            (ADDR_VAR, "0.0.0.0:9000"),
        ]));
        assert_eq!(config.data_dir, PathBuf::from("/srv/rides"));
        assert_eq!(config.addr.to_string(), "0.0.0.0:9000");
    }

    #[test]
    fn from_lookup_missing_vars_uses_defaults() {
        let config = ServerConfig::from_lookup(lookup(&[]));
        assert_eq!(config, ServerConfig::default());
    }

    #[test]
    fn from_lookup_invalid_addr_falls_back() {
        let config = ServerConfig::from_lookup(lookup(&[(ADDR_VAR, "not an address")]));
        assert_eq!(config.addr, ServerConfig::default().addr);
    }

    #[test]
    fn from_lookup_empty_dir_ignored() {
        let config = ServerConfig::from_lookup(lookup(&[(DATA_DIR_VAR, "")]));
        assert_eq!(config.data_dir, ServerConfig::default().data_dir);
    }
}
