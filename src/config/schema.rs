//! Configuration schema definitions.
//!
//! `ProbeConfig` is the resolved, immutable configuration threaded through a
//! single probe run. `FileConfig` mirrors the optional TOML file.

use serde::{Deserialize, Serialize};

/// Public endpoint used when `RPC_URL` is not set.
pub const DEFAULT_RPC_URL: &str = "https://polygon-rpc.com";

/// Request timeout applied to every RPC call.
pub const DEFAULT_RPC_TIMEOUT_SECS: u64 = 10;

/// Resolved configuration for one probe run.
#[derive(Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    /// JSON-RPC endpoint URL. Not validated at load time.
    pub rpc_url: String,

    /// Hex-encoded private key, already trimmed. `None` means read-only mode.
    pub private_key: Option<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Also report the gas price and an estimated swap cost.
    pub report_gas_cost: bool,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            private_key: None,
            rpc_timeout_secs: DEFAULT_RPC_TIMEOUT_SECS,
            report_gas_cost: false,
        }
    }
}

impl ProbeConfig {
    /// Apply values from a config file on top of the current ones.
    pub fn with_file(mut self, file: FileConfig) -> Self {
        if let Some(url) = file.rpc_url {
            self.rpc_url = url;
        }
        if let Some(secs) = file.rpc_timeout_secs {
            self.rpc_timeout_secs = secs;
        }
        if let Some(report) = file.report_gas_cost {
            self.report_gas_cost = report;
        }
        self.normalized()
    }

    /// Override the endpoint, e.g. from a command-line flag.
    pub fn with_rpc_url(mut self, rpc_url: impl Into<String>) -> Self {
        self.rpc_url = rpc_url.into();
        self
    }

    /// Override the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.rpc_timeout_secs = secs;
        self.normalized()
    }

    /// Enable the gas price and swap cost lines.
    pub fn with_gas_cost_report(mut self, enabled: bool) -> Self {
        self.report_gas_cost = enabled;
        self
    }

    // A zero timeout would fail every call before it is sent.
    fn normalized(mut self) -> Self {
        if self.rpc_timeout_secs == 0 {
            self.rpc_timeout_secs = DEFAULT_RPC_TIMEOUT_SECS;
        }
        self
    }
}

impl std::fmt::Debug for ProbeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeConfig")
            .field("rpc_url", &self.rpc_url)
            .field(
                "private_key",
                &self.private_key.as_ref().map(|_| "<redacted>"),
            )
            .field("rpc_timeout_secs", &self.rpc_timeout_secs)
            .field("report_gas_cost", &self.report_gas_cost)
            .finish()
    }
}

/// Optional TOML configuration file.
///
/// ```toml
/// rpc_url = "https://polygon-rpc.com"
/// rpc_timeout_secs = 10
/// report_gas_cost = true
/// ```
///
/// The private key is never read from this file.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// JSON-RPC endpoint URL.
    pub rpc_url: Option<String>,

    /// RPC request timeout in seconds.
    pub rpc_timeout_secs: Option<u64>,

    /// Report the gas price and an estimated swap cost.
    pub report_gas_cost: Option<bool>,
}
