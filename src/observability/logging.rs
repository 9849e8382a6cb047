//! Structured logging.
//!
//! # Design Decisions
//! - Uses tracing crate for structured logging
//! - Logs go to stderr; stdout carries only the report
//! - Level from `RUST_LOG`, else the CLI filter, else silent
//! - Silent by default: the report on stdout is the only output of a run

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when neither `RUST_LOG` nor a CLI filter is given.
pub const DEFAULT_FILTER: &str = "rpc_probe=off";

/// Build the filter for this run.
pub fn filter(cli_filter: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(cli_filter.unwrap_or(DEFAULT_FILTER)))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the global subscriber. Safe to call more than once.
pub fn init(cli_filter: Option<&str>) {
    let _ = tracing_subscriber::registry()
        .with(filter(cli_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cli_filter_falls_back() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        let filter = filter(Some("rpc_probe=loud"));
        assert!(filter.to_string().contains("rpc_probe=off"));
    }

    #[test]
    fn test_init_twice() {
        init(None);
        init(Some("rpc_probe=debug"));
    }
}
