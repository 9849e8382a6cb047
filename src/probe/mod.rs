//! Connectivity & reporting.
//!
//! # Data Flow
//! ```text
//! ProbeConfig
//!     → construct client           (fatal on error, exit 1)
//!     → connectivity check         (fatal when not connected, exit 1)
//!     → chain ID                   (best effort, failure suppressed)
//!     → private key present?
//!         yes → derive address → balance → display units   (errors reported, exit 0)
//!         no  → read-only advisory
//! ```

pub mod outcome;
pub mod runner;

pub use outcome::ProbeOutcome;
pub use runner::run;
