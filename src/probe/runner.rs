//! The probe sequence.
//!
//! Report lines go to the supplied writer; diagnostics go through `tracing`.
//! Only client construction and the connectivity check end the run early.

use std::io::{self, Write};

use crate::blockchain::units::{gas_cost, DISPLAY_SYMBOL, SWAP_GAS_LIMIT};
use crate::blockchain::{BlockchainResult, ChainReader, DisplayAmount, Wallet};
use crate::config::{ProbeConfig, PRIVATE_KEY_ENV_VAR};
use crate::probe::ProbeOutcome;

/// Run the probe against `config.rpc_url`.
///
/// `connect` builds the client; its error is fatal. Writer errors, including
/// the final flush, are the only errors propagated to the caller.
pub async fn run<C, F, W>(config: &ProbeConfig, connect: F, out: &mut W) -> io::Result<ProbeOutcome>
where
    C: ChainReader,
    F: FnOnce(&ProbeConfig) -> BlockchainResult<C>,
    W: Write,
{
    let outcome = report(config, connect, out).await?;
    out.flush()?;
    Ok(outcome)
}

async fn report<C, F, W>(config: &ProbeConfig, connect: F, out: &mut W) -> io::Result<ProbeOutcome>
where
    C: ChainReader,
    F: FnOnce(&ProbeConfig) -> BlockchainResult<C>,
    W: Write,
{
    writeln!(out, "🔌 Connecting to RPC: {}", config.rpc_url)?;

    let client = match connect(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(rpc_url = %config.rpc_url, error = %e, "Client construction failed");
            writeln!(out, "❌ Failed to create provider: {}", e)?;
            return Ok(ProbeOutcome::ClientFailed);
        }
    };

    if !client.is_connected().await {
        tracing::error!(rpc_url = %config.rpc_url, "Connectivity check failed");
        writeln!(out, "❌ Not connected to RPC, check RPC_URL")?;
        return Ok(ProbeOutcome::Disconnected);
    }
    writeln!(out, "✅ Connected to RPC")?;

    // Informational only.
    match client.chain_id().await {
        Ok(chain_id) => writeln!(out, "🌐 chainId: {}", chain_id)?,
        Err(e) => tracing::debug!(error = %e, "Chain ID unavailable"),
    }

    if config.report_gas_cost {
        report_gas_cost(&client, out).await?;
    }

    match config.private_key.as_deref() {
        Some(key) => report_account(&client, key, out).await?,
        None => {
            writeln!(out, "⚠️ No {} found in the environment (.env).", PRIVATE_KEY_ENV_VAR)?;
            writeln!(
                out,
                "   You can run without a key (read-only) or add {} to the environment later.",
                PRIVATE_KEY_ENV_VAR
            )?;
        }
    }

    Ok(ProbeOutcome::Completed)
}

// Best effort, like the chain ID.
async fn report_gas_cost<C, W>(client: &C, out: &mut W) -> io::Result<()>
where
    C: ChainReader,
    W: Write,
{
    match client.gas_price().await {
        Ok(price) => {
            writeln!(out, "⛽ Gas price (wei): {}", price)?;
            writeln!(
                out,
                "⛽ Estimated swap cost ({} gas, {}): {}",
                SWAP_GAS_LIMIT,
                DISPLAY_SYMBOL,
                DisplayAmount::from_raw(gas_cost(price, SWAP_GAS_LIMIT))
            )
        }
        Err(e) => {
            tracing::debug!(error = %e, "Gas price unavailable");
            Ok(())
        }
    }
}

async fn report_account<C, W>(client: &C, key: &str, out: &mut W) -> io::Result<()>
where
    C: ChainReader,
    W: Write,
{
    let wallet = match Wallet::from_private_key(key) {
        Ok(wallet) => wallet,
        Err(e) => return writeln!(out, "❌ Error using private key: {}", e),
    };

    let address = wallet.address();
    writeln!(out, "🔑 Wallet address (from private key): {}", address)?;

    match client.balance(address).await {
        Ok(raw) => {
            writeln!(out, "💰 Wallet balance (wei): {}", raw)?;
            writeln!(
                out,
                "💠 Wallet balance ({}): {}",
                DISPLAY_SYMBOL,
                DisplayAmount::from_raw(raw)
            )
        }
        Err(e) => {
            tracing::warn!(address = %address, error = %e, "Balance query failed");
            writeln!(out, "❌ Error using private key: {}", e)
        }
    }
}
