//! Configuration loading from the environment and disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::{FileConfig, ProbeConfig, DEFAULT_RPC_URL};

/// Environment variable holding the endpoint URL.
pub const RPC_URL_ENV_VAR: &str = "RPC_URL";

/// Environment variable holding the hex-encoded private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Parse error in {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Resolve configuration field by field from a variable lookup.
///
/// `RPC_URL` falls back to the public default only when unset; a set value,
/// even an empty one, is taken verbatim.
/// `PRIVATE_KEY` is trimmed; a blank key means read-only mode.
/// Neither value is validated here.
pub fn resolve<F>(lookup: F) -> ProbeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let rpc_url = lookup(RPC_URL_ENV_VAR).unwrap_or_else(|| DEFAULT_RPC_URL.to_string());

    let private_key = lookup(PRIVATE_KEY_ENV_VAR)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty());

    ProbeConfig {
        rpc_url,
        private_key,
        ..ProbeConfig::default()
    }
}

/// Layer environment values on top of an already-loaded base (e.g. a file).
///
/// Only variables that are actually set replace base values.
pub fn merge_env<F>(base: ProbeConfig, lookup: F) -> ProbeConfig
where
    F: Fn(&str) -> Option<String>,
{
    let has_url = lookup(RPC_URL_ENV_VAR).is_some();
    let env = resolve(lookup);

    ProbeConfig {
        rpc_url: if has_url { env.rpc_url } else { base.rpc_url },
        private_key: env.private_key,
        ..base
    }
}

/// Source a `.env`-style file into the process environment.
///
/// Variables already present in the environment are not overwritten.
/// A missing file is silently skipped; a malformed one is logged and ignored.
pub fn load_dotenv(path: &Path) {
    match dotenvy::from_path(path) {
        Ok(()) => tracing::debug!(path = %path.display(), "Loaded env file"),
        Err(e) if e.not_found() => tracing::debug!(path = %path.display(), "No env file found"),
        Err(e) => tracing::warn!(error = %e, "Ignoring unreadable env file"),
    }
}

/// Load a TOML configuration file.
pub fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    toml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.display().to_string(),
        source,
    })
}
