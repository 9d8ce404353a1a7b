//! Blockchain RPC connections.
//!
//! # Responsibilities
//! - Connect to the JSON-RPC endpoint, read-only or bound to a signer
//! - Submit transactions and fetch receipts
//! - Apply the optional per-request timeout
//!
//! `ChainBackend` is the seam the rest of the crate talks to; `Connector`
//! hands out a fresh backend per operation.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::blockchain::types::{BlockchainError, BlockchainResult, TxReceipt};
use crate::blockchain::wallet::Wallet;
use crate::config::schema::ChainConfig;

/// Operations this crate needs from a node.
#[async_trait]
pub trait ChainBackend: Send + Sync {
    /// Address transactions are signed with, `None` for read-only connections.
    fn signer_address(&self) -> Option<Address>;

    /// Current gas price in wei.
    async fn gas_price(&self) -> BlockchainResult<u128>;

    /// Latest block number.
    async fn block_number(&self) -> BlockchainResult<u64>;

    /// Execute a read-only `eth_call`.
    async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes>;

    /// Sign and broadcast a transaction, returning its hash.
    async fn send_transaction(&self, tx: TransactionRequest) -> BlockchainResult<TxHash>;

    /// Fetch a receipt; `None` while the transaction is pending.
    async fn transaction_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<TxReceipt>>;
}

/// Factory for node connections.
pub trait Connector: Send + Sync {
    fn read_only(&self) -> BlockchainResult<Arc<dyn ChainBackend>>;

    fn with_signer(&self, wallet: &Wallet) -> BlockchainResult<Arc<dyn ChainBackend>>;
}

/// Connection to a JSON-RPC node over HTTP.
pub struct RpcConnection {
    provider: Arc<dyn Provider + Send + Sync>,
    signer: Option<Address>,
    rpc_url: String,
    timeout_duration: Option<Duration>,
}

impl RpcConnection {
    /// Open a read-only connection.
    pub fn read_only(rpc_url: &str, timeout_duration: Option<Duration>) -> BlockchainResult<Self> {
        let url = parse_rpc_url(rpc_url)?;
        let provider = ProviderBuilder::new().connect_http(url);

        Ok(Self {
            provider: Arc::new(provider) as Arc<dyn Provider + Send + Sync>,
            signer: None,
            rpc_url: rpc_url.to_string(),
            timeout_duration,
        })
    }

    /// Open a connection whose transactions are signed by `wallet`.
    pub fn with_signer(
        rpc_url: &str,
        wallet: &Wallet,
        timeout_duration: Option<Duration>,
    ) -> BlockchainResult<Self> {
        let url = parse_rpc_url(rpc_url)?;
        let provider = ProviderBuilder::new()
            .wallet(wallet.ethereum_wallet())
            .connect_http(url);

        Ok(Self {
            provider: Arc::new(provider) as Arc<dyn Provider + Send + Sync>,
            signer: Some(wallet.address()),
            rpc_url: rpc_url.to_string(),
            timeout_duration,
        })
    }

    async fn request<T, E, F>(&self, method: &'static str, fut: F) -> BlockchainResult<T>
    where
        E: std::fmt::Display,
        F: Future<Output = Result<T, E>>,
    {
        let result = match self.timeout_duration {
            Some(limit) => timeout(limit, fut).await.map_err(|_| {
                tracing::warn!(method, rpc_url = %self.rpc_url, "RPC timeout");
                BlockchainError::Timeout(limit.as_secs())
            })?,
            None => fut.await,
        };

        result.map_err(|e| {
            tracing::debug!(method, error = %e, "RPC error");
            BlockchainError::Rpc(format!("{}: {}", method, e))
        })
    }
}

fn parse_rpc_url(rpc_url: &str) -> BlockchainResult<url::Url> {
    rpc_url
        .parse()
        .map_err(|e| BlockchainError::Rpc(format!("Invalid RPC URL '{}': {}", rpc_url, e)))
}

#[async_trait]
impl ChainBackend for RpcConnection {
    fn signer_address(&self) -> Option<Address> {
        self.signer
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        self.request("eth_gasPrice", self.provider.get_gas_price())
            .await
    }

    async fn block_number(&self) -> BlockchainResult<u64> {
        self.request("eth_blockNumber", self.provider.get_block_number())
            .await
    }

    async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes> {
        let provider = self.provider.clone();
        self.request("eth_call", async move { provider.call(tx).await })
            .await
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> BlockchainResult<TxHash> {
        let tx = match self.signer {
            Some(from) => tx.with_from(from),
            None => {
                return Err(BlockchainError::Wallet(
                    "Connection has no signer".to_string(),
                ))
            }
        };

        let provider = self.provider.clone();
        let pending = self
            .request("eth_sendRawTransaction", async move {
                provider.send_transaction(tx).await
            })
            .await?;
        Ok(*pending.tx_hash())
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<TxReceipt>> {
        let receipt = self
            .request(
                "eth_getTransactionReceipt",
                self.provider.get_transaction_receipt(tx_hash),
            )
            .await?;
        Ok(receipt.map(TxReceipt::from))
    }
}

impl std::fmt::Debug for RpcConnection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcConnection")
            .field("rpc_url", &self.rpc_url)
            .field("signer", &self.signer)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}

/// Connector that opens a new HTTP connection for every request.
#[derive(Debug, Clone)]
pub struct HttpConnector {
    rpc_url: String,
    timeout_duration: Option<Duration>,
}

impl HttpConnector {
    pub fn new(config: &ChainConfig) -> Self {
        Self {
            rpc_url: config.rpc_url.clone(),
            timeout_duration: config.rpc_timeout_secs.map(Duration::from_secs),
        }
    }
}

impl Connector for HttpConnector {
    fn read_only(&self) -> BlockchainResult<Arc<dyn ChainBackend>> {
        Ok(Arc::new(RpcConnection::read_only(
            &self.rpc_url,
            self.timeout_duration,
        )?))
    }

    fn with_signer(&self, wallet: &Wallet) -> BlockchainResult<Arc<dyn ChainBackend>> {
        Ok(Arc::new(RpcConnection::with_signer(
            &self.rpc_url,
            wallet,
            self.timeout_duration,
        )?))
    }
}
