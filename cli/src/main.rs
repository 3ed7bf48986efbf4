//! tipjard - tipping ledger API daemon

mod config;

use clap::Parser;
use config::Config;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tipjar_api::ApiState;
use tipjar_chain::SolanaRpcClient;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tipjard")]
#[command(about = "Tipping ledger API for Solana wallets")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Listen address, overrides `server.listen_addr`
    #[arg(short, long, value_name = "ADDR")]
    listen: Option<SocketAddr>,

    /// Solana RPC endpoint, overrides `chain.rpc_url`
    #[arg(long, value_name = "URL")]
    rpc_url: Option<String>,

    /// Network label, overrides `chain.network`
    #[arg(long)]
    network: Option<String>,

    /// Show version
    #[arg(short, long)]
    version: bool,
}

fn load_config(cli: &Cli) -> Config {
    let mut config = match &cli.config {
        Some(path) => Config::load(path).unwrap_or_else(|e| {
            tracing::warn!(
                "⚠️ Could not load config {}: {}, using defaults",
                path.display(),
                e
            );
            Config::default()
        }),
        None => Config::default(),
    };

    if let Some(listen) = cli.listen {
        config.server.listen_addr = listen;
    }
    if let Some(rpc_url) = &cli.rpc_url {
        config.chain.rpc_url = rpc_url.clone();
    }
    if let Some(network) = &cli.network {
        config.chain.network = network.clone();
    }

    config
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.version {
        println!("tipjard {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config(&cli);

    tracing::info!(
        network = %config.chain.network,
        rpc_url = %config.chain.rpc_url,
        "🔗 Using Solana RPC endpoint"
    );

    let chain = SolanaRpcClient::new(
        config.chain.rpc_url.clone(),
        config.chain.timeout(),
        config.chain.connect_timeout(),
    )?;

    let state = ApiState::new(config.chain.network.clone(), Arc::new(chain));

    tipjar_api::start_server(config.server.listen_addr, state).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn write_config(name: &str, contents: &str) -> PathBuf {
        let file = format!("tipjard-{}-{}.toml", name, std::process::id());
        let path = std::env::temp_dir().join(file);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_flags_override_file() {
        let path = write_config(
            "override",
            r#"
            [server]
            listen_addr = "127.0.0.1:9000"

            [chain]
            rpc_url = "http://file.example:8899"
            network = "testnet"
            timeout_secs = 5
            "#,
        );

        let cli = Cli::parse_from([
            "tipjard",
            "--config",
            path.to_str().unwrap(),
            "--network",
            "mainnet-beta",
            "--listen",
            "127.0.0.1:9100",
        ]);
        let config = load_config(&cli);
        fs::remove_file(&path).unwrap();

        assert_eq!(config.chain.network, "mainnet-beta");
        assert_eq!(config.server.listen_addr, "127.0.0.1:9100".parse().unwrap());
        // Not overridden: file values win over defaults
        assert_eq!(config.chain.rpc_url, "http://file.example:8899");
        assert_eq!(config.chain.timeout_secs, 5);
    }

    #[test]
    fn test_unreadable_config_falls_back_to_defaults() {
        let cli = Cli::parse_from([
            "tipjard",
            "--config",
            "/nonexistent/tipjard.toml",
            "--rpc-url",
            "http://127.0.0.1:8899",
        ]);
        let config = load_config(&cli);

        assert_eq!(config.chain.rpc_url, "http://127.0.0.1:8899");
        assert_eq!(config.chain.network, "devnet");
        assert_eq!(config.server.listen_addr.port(), 8000);
    }

    #[test]
    fn test_no_flags() {
        let cli = Cli::parse_from(["tipjard"]);
        assert!(!cli.version);
        assert_eq!(load_config(&cli), Config::default());
    }
}
