//! RPC connectivity probe library.

pub mod blockchain;
pub mod config;
pub mod observability;
pub mod probe;

pub use blockchain::BlockchainClient;
pub use config::ProbeConfig;
pub use probe::ProbeOutcome;
