//! Blockchain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ProbeConfig (RPC URL, timeout, optional private key)
//!     → client.rs (RPC connection with timeouts)
//!     → wallet.rs (local address derivation)
//!     → units.rs (wei → display unit)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables
//! - Never log private keys or sensitive data
//! - All RPC calls are bounded by the configured timeout

pub mod client;
pub mod types;
pub mod units;
pub mod wallet;

pub use client::{BlockchainClient, ChainReader};
pub use types::{BlockchainError, BlockchainResult, ChainId};
pub use units::DisplayAmount;
pub use wallet::Wallet;
