//! Blockchain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Bind to a single JSON-RPC endpoint
//! - Query chain state (block number, chain ID, balances, gas price)
//! - Enforce the request timeout on every call
//! - Provide a connectivity check

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use alloy::primitives::{Address, U256};
use alloy::providers::{Provider, ProviderBuilder};
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, ChainId};
use crate::config::ProbeConfig;

/// Read-only chain queries used by the probe.
pub trait ChainReader {
    /// Whether the endpoint answers RPC requests.
    fn is_connected(&self) -> impl Future<Output = bool>;

    /// Chain identifier reported by the endpoint.
    fn chain_id(&self) -> impl Future<Output = BlockchainResult<ChainId>>;

    /// Native balance of `address` in the smallest unit, at the latest block.
    fn balance(&self, address: Address) -> impl Future<Output = BlockchainResult<U256>>;

    /// Current gas price in wei.
    fn gas_price(&self) -> impl Future<Output = BlockchainResult<u128>>;
}

/// Blockchain RPC client bound to one endpoint.
#[derive(Clone)]
pub struct BlockchainClient {
    provider: Arc<dyn Provider + Send + Sync>,
    rpc_url: String,
    timeout_duration: Duration,
}

impl BlockchainClient {
    /// Create a new blockchain client.
    ///
    /// No request is sent here; the only failure is an unusable endpoint URL.
    pub fn new(config: &ProbeConfig) -> BlockchainResult<Self> {
        let url: url::Url = config.rpc_url.parse().map_err(|e: url::ParseError| {
            BlockchainError::InvalidUrl {
                url: config.rpc_url.clone(),
                reason: e.to_string(),
            }
        })?;

        match url.scheme() {
            "http" | "https" => {}
            other => {
                return Err(BlockchainError::InvalidUrl {
                    url: config.rpc_url.clone(),
                    reason: format!("unsupported scheme '{}', expected http or https", other),
                })
            }
        }

        let provider = ProviderBuilder::new().connect_http(url);

        tracing::info!(
            rpc_url = %config.rpc_url,
            timeout_secs = config.rpc_timeout_secs,
            "Blockchain client initialized"
        );

        Ok(Self {
            provider: Arc::new(provider),
            rpc_url: config.rpc_url.clone(),
            timeout_duration: Duration::from_secs(config.rpc_timeout_secs),
        })
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> BlockchainResult<u64> {
        let fut = self.provider.get_block_number();
        self.with_timeout("eth_blockNumber", fut).await
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> BlockchainResult<ChainId> {
        let fut = self.provider.get_chain_id();
        self.with_timeout("eth_chainId", fut).await.map(ChainId)
    }

    /// Get the balance of an address.
    pub async fn get_balance(&self, address: Address) -> BlockchainResult<U256> {
        let fut = self.provider.get_balance(address);
        self.with_timeout("eth_getBalance", fut).await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> BlockchainResult<u128> {
        let fut = self.provider.get_gas_price();
        self.with_timeout("eth_gasPrice", fut).await
    }

    async fn with_timeout<F, T, E>(&self, method: &'static str, fut: F) -> BlockchainResult<T>
    where
        F: std::future::IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, fut).await {
            Ok(Ok(result)) => Ok(result),
            Ok(Err(e)) => {
                tracing::debug!(method, error = %e, "RPC error");
                Err(BlockchainError::Rpc(e.to_string()))
            }
            Err(_) => {
                tracing::debug!(method, "RPC timeout");
                Err(BlockchainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }
}

impl ChainReader for BlockchainClient {
    /// Returns true if we can query the block number.
    async fn is_connected(&self) -> bool {
        self.get_block_number().await.is_ok()
    }

    async fn chain_id(&self) -> BlockchainResult<ChainId> {
        self.get_chain_id().await
    }

    async fn balance(&self, address: Address) -> BlockchainResult<U256> {
        self.get_balance(address).await
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.get_gas_price().await
    }
}

impl std::fmt::Debug for BlockchainClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockchainClient")
            .field("rpc_url", &self.rpc_url)
            .field("timeout_secs", &self.timeout_duration.as_secs())
            .finish()
    }
}
