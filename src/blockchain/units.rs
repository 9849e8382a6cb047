//! Smallest-unit to display-unit conversion.

use alloy::primitives::utils::format_units;
use alloy::primitives::U256;

use crate::blockchain::types::{BlockchainError, BlockchainResult};

/// Decimal places between the smallest unit (wei) and the display unit.
pub const DISPLAY_DECIMALS: u8 = 18;

/// Display name of the network's native currency.
pub const DISPLAY_SYMBOL: &str = "MATIC";

/// Gas limit assumed for a single DEX swap when estimating its cost.
pub const SWAP_GAS_LIMIT: u64 = 300_000;

/// Convert a raw balance to display units (`raw / 10^18`).
pub fn to_display(raw: U256) -> BlockchainResult<f64> {
    scale_down(raw, DISPLAY_DECIMALS)
}

/// Convert `raw` to a unit `decimals` places above it.
pub fn scale_down(raw: U256, decimals: u8) -> BlockchainResult<f64> {
    let formatted = format_units(raw, decimals)
        .map_err(|e| BlockchainError::UnitConversion(e.to_string()))?;
    formatted
        .parse::<f64>()
        .map_err(|e| BlockchainError::UnitConversion(format!("'{}': {}", formatted, e)))
}

/// Wei spent by `gas_limit` units of gas at `gas_price`.
pub fn gas_cost(gas_price: u128, gas_limit: u64) -> U256 {
    U256::from(gas_price).saturating_mul(U256::from(gas_limit))
}

/// A balance ready for display.
///
/// Both variants render as a plain decimal string, so the report line has
/// the same shape whether conversion succeeded or not.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DisplayAmount {
    /// Value in display units.
    Converted(f64),
    /// Raw smallest-unit value, used when conversion failed.
    Raw(U256),
}

impl DisplayAmount {
    /// Convert `raw` to display units, falling back to the raw value on failure.
    pub fn from_raw(raw: U256) -> Self {
        Self::with_decimals(raw, DISPLAY_DECIMALS)
    }

    /// Convert `raw` with an explicit number of decimals.
    pub fn with_decimals(raw: U256, decimals: u8) -> Self {
        match scale_down(raw, decimals) {
            Ok(value) => Self::Converted(value),
            Err(e) => {
                tracing::debug!(error = %e, "Falling back to raw amount");
                Self::Raw(raw)
            }
        }
    }
}

impl std::fmt::Display for DisplayAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Converted(value) => write!(f, "{}", value),
            Self::Raw(raw) => write!(f, "{}", raw),
        }
    }
}
