//! How a probe run ended.

use std::process::ExitCode;

/// Terminal state of a probe run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeOutcome {
    /// Every step ran. Includes the read-only path and a failed key path.
    Completed,
    /// The client could not be constructed.
    ClientFailed,
    /// The endpoint did not answer the connectivity check.
    Disconnected,
}

impl ProbeOutcome {
    /// Process exit status for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Self::Completed => 0,
            Self::ClientFailed | Self::Disconnected => 1,
        }
    }
}

impl From<ProbeOutcome> for ExitCode {
    fn from(outcome: ProbeOutcome) -> Self {
        ExitCode::from(outcome.exit_code())
    }
}
