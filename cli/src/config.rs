//! Daemon configuration
//!
//! Loaded from a TOML file; every field has a default so a partial file
//! (or none at all) still yields a usable config.

use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub chain: ChainConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ServerConfig {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: SocketAddr,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ChainConfig {
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,

    #[serde(default = "default_network")]
    pub network: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_listen_addr() -> SocketAddr {
    SocketAddr::from(([0, 0, 0, 0], 8000))
}

fn default_rpc_url() -> String {
    "https://api.devnet.solana.com".to_string()
}

fn default_network() -> String {
    tipjar_api::constants::DEFAULT_NETWORK.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: default_listen_addr(),
        }
    }
}

impl Default for ChainConfig {
    fn default() -> Self {
        ChainConfig {
            rpc_url: default_rpc_url(),
            network: default_network(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ChainConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    pub fn parse(contents: &str) -> Result<Self, Box<dyn std::error::Error>> {
        Ok(toml::from_str(contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.server.listen_addr.port(), 8000);
        assert_eq!(config.chain.network, "devnet");
        assert_eq!(config.chain.timeout(), Duration::from_secs(30));
    }

    #[test]
    fn test_partial_sections() {
        let config = Config::parse(
            r#"
            [server]
            listen_addr = "127.0.0.1:9000"

            [chain]
            network = "mainnet-beta"
            rpc_url = "https://api.mainnet-beta.solana.com"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.listen_addr, "127.0.0.1:9000".parse().unwrap());
        assert_eq!(config.chain.network, "mainnet-beta");
        assert_eq!(config.chain.connect_timeout_secs, 10);
    }

    #[test]
    fn test_bad_listen_addr_rejected() {
        assert!(Config::parse("[server]\nlisten_addr = \"nowhere\"").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        assert!(Config::load(Path::new("/nonexistent/tipjar.toml")).is_err());
    }
}
