//! Observability subsystem.
//!
//! All subsystems emit structured `tracing` events (`rpc_url`, `address`,
//! `error` fields). Private keys are never recorded.

pub mod logging;
