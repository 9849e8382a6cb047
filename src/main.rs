//! rpc-probe
//!
//! One-shot diagnostic against a JSON-RPC endpoint: connect, report the chain
//! ID, and, when `PRIVATE_KEY` is set, show the derived address and its
//! native balance.
//!
//! ```text
//! .env / environment / --config / flags
//!     → ProbeConfig
//!     → BlockchainClient (alloy HTTP provider, per-call timeout)
//!     → probe::run → report on stdout, exit code
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use rpc_probe::blockchain::BlockchainClient;
use rpc_probe::config::{loader, ProbeConfig};
use rpc_probe::observability::logging;
use rpc_probe::probe;

#[derive(Parser)]
#[command(name = "rpc-probe")]
#[command(about = "Check connectivity to a JSON-RPC endpoint and report an account balance", long_about = None)]
struct Cli {
    /// Env file sourced before reading RPC_URL and PRIVATE_KEY
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Optional TOML config file (rpc_url, rpc_timeout_secs, report_gas_cost)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Endpoint override, takes precedence over RPC_URL
    #[arg(short, long)]
    rpc_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    timeout_secs: Option<u64>,

    /// Also report the gas price and an estimated swap cost
    #[arg(long)]
    gas_cost: bool,

    /// Log filter, e.g. "rpc_probe=debug" (RUST_LOG wins when set)
    #[arg(long, env = "RPC_PROBE_LOG")]
    log_level: Option<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.log_level.as_deref());

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e);
            return ExitCode::FAILURE;
        }
    };

    tracing::debug!(?config, "Configuration loaded");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let result = probe::run(&config, BlockchainClient::new, &mut out).await;

    match result {
        Ok(outcome) => outcome.into(),
        Err(e) => {
            eprintln!("❌ Failed to write report: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(cli: &Cli) -> Result<ProbeConfig, loader::ConfigError> {
    let mut config = ProbeConfig::default();

    if let Some(path) = &cli.config {
        config = config.with_file(loader::load_file(path)?);
    }

    loader::load_dotenv(&cli.env_file);
    config = loader::merge_env(config, |name| std::env::var(name).ok());

    if let Some(url) = &cli.rpc_url {
        config = config.with_rpc_url(url.as_str());
    }
    if let Some(secs) = cli.timeout_secs {
        config = config.with_timeout_secs(secs);
    }
    if cli.gas_cost {
        config = config.with_gas_cost_report(true);
    }

    Ok(config)
}
