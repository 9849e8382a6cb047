//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! built-in defaults
//!     → optional TOML file (loader::load_file)
//!     → environment, with .env sourced first (loader::merge_env)
//!     → command-line overrides
//!     → ProbeConfig (immutable for the rest of the run)
//! ```
//!
//! # Design Decisions
//! - Resolution takes an injected lookup so tests never mutate the process environment
//! - No validation of URL syntax or key format at load time
//! - The private key is only read from the environment, never from files or flags

pub mod loader;
pub mod schema;

pub use loader::{ConfigError, PRIVATE_KEY_ENV_VAR, RPC_URL_ENV_VAR};
pub use schema::{FileConfig, ProbeConfig, DEFAULT_RPC_TIMEOUT_SECS, DEFAULT_RPC_URL};
