//! Transaction building, submission, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with the configured gas limit and pricing
//! - Broadcast through a signer-bound connection
//! - Poll until the configured number of confirmations is reached
//!
//! Nothing is retried: a failed broadcast or a dropped transaction is
//! reported once.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::{interval, timeout, MissedTickBehavior};

use crate::blockchain::client::ChainBackend;
use crate::blockchain::types::{BlockchainError, BlockchainResult, GasPricing, TxReceipt};
use crate::config::schema::{ChainConfig, GasConfig};
use crate::observability::metrics;

/// Submits signed transactions and waits for their receipts.
#[derive(Clone)]
pub struct TxExecutor {
    backend: Arc<dyn ChainBackend>,
    gas: GasConfig,
    confirmations: u64,
    poll_interval: Duration,
    confirmation_timeout: Option<Duration>,
}

impl TxExecutor {
    /// Create an executor over a signer-bound connection.
    pub fn new(backend: Arc<dyn ChainBackend>, chain: &ChainConfig, gas: &GasConfig) -> Self {
        Self {
            backend,
            gas: gas.clone(),
            confirmations: chain.confirmations.max(1),
            poll_interval: Duration::from_millis(chain.receipt_poll_interval_ms.max(1)),
            confirmation_timeout: chain.confirmation_timeout_secs.map(Duration::from_secs),
        }
    }

    /// Build a transaction request.
    ///
    /// # Arguments
    /// * `to` - Destination address
    /// * `value` - Amount of native token to send
    /// * `input` - Call data (empty for simple transfers)
    /// * `gas_limit` - Gas limit to set
    /// * `pricing` - Gas price policy
    pub async fn build(
        &self,
        to: Address,
        value: U256,
        input: Bytes,
        gas_limit: u64,
        pricing: GasPricing,
    ) -> BlockchainResult<TransactionRequest> {
        let mut tx = TransactionRequest::default()
            .with_to(to)
            .with_gas_limit(gas_limit);

        if !value.is_zero() {
            tx = tx.with_value(value);
        }
        if !input.is_empty() {
            tx = tx.with_input(input);
        }

        match pricing {
            GasPricing::Node => {}
            GasPricing::Current => {
                let gas_price = self.backend.gas_price().await?;
                tx = tx.with_gas_price(gas_price);
            }
            GasPricing::Boosted => {
                let gas_price = self.backend.gas_price().await?;
                let boosted = gas_price.saturating_mul(u128::from(self.gas.priority_price_multiplier));
                tracing::debug!(
                    gas_price,
                    boosted,
                    multiplier = self.gas.priority_price_multiplier,
                    "Boosting gas price"
                );
                tx = tx.with_gas_price(boosted);
            }
        }

        Ok(tx)
    }

    /// Submit a contract call with the base gas limit and wait for its receipt.
    ///
    /// A mined-but-reverted transaction is returned as `Ok` with `status == false`.
    pub async fn submit(
        &self,
        operation: &'static str,
        contract: Address,
        input: Bytes,
        pricing: GasPricing,
    ) -> BlockchainResult<TxReceipt> {
        let started = Instant::now();
        let result = async {
            let tx = self
                .build(contract, U256::ZERO, input, self.gas.base_gas_limit, pricing)
                .await?;
            self.send_and_confirm(tx).await
        }
        .await;

        self.record(operation, &result, started);
        result
    }

    /// Send native currency and wait for the receipt.
    pub async fn transfer(&self, to: Address, value: U256, gas_limit: u64) -> BlockchainResult<TxReceipt> {
        let tx = self
            .build(to, value, Bytes::new(), gas_limit, GasPricing::Current)
            .await?;
        self.send_and_confirm(tx).await
    }

    async fn send_and_confirm(&self, tx: TransactionRequest) -> BlockchainResult<TxReceipt> {
        let tx_hash = self.backend.send_transaction(tx).await?;
        tracing::debug!(tx_hash = %tx_hash, "Transaction broadcast");
        self.wait_for_confirmation(tx_hash).await
    }

    /// Wait until a transaction has the configured number of confirmations.
    pub async fn wait_for_confirmation(&self, tx_hash: TxHash) -> BlockchainResult<TxReceipt> {
        let wait = async {
            let mut ticker = interval(self.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                let receipt = match self.backend.transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                let Some(tx_block) = receipt.block_number else {
                    continue;
                };

                // The inclusion block counts as the first confirmation.
                let current_block = self.backend.block_number().await?;
                let confirmations = current_block.saturating_sub(tx_block) + 1;
                if confirmations >= self.confirmations {
                    return Ok(receipt);
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations,
                    required = self.confirmations,
                    "Waiting for confirmations"
                );
            }
        };

        match self.confirmation_timeout {
            Some(limit) => timeout(limit, wait)
                .await
                .map_err(|_| BlockchainError::ConfirmationTimeout(tx_hash, limit.as_secs()))?,
            None => wait.await,
        }
    }

    /// Address that signs this executor's transactions.
    pub fn sender(&self) -> Option<Address> {
        self.backend.signer_address()
    }

    fn record(&self, operation: &'static str, result: &BlockchainResult<TxReceipt>, started: Instant) {
        let elapsed = started.elapsed();
        match result {
            Ok(receipt) => {
                let outcome = if receipt.status { "success" } else { "reverted" };
                metrics::record_transaction(operation, outcome, elapsed);
                if receipt.status {
                    tracing::info!(
                        operation,
                        tx_hash = %receipt.transaction_hash,
                        block_number = ?receipt.block_number,
                        "Transaction confirmed"
                    );
                } else {
                    tracing::warn!(
                        operation,
                        tx_hash = %receipt.transaction_hash,
                        "Transaction reverted"
                    );
                }
            }
            Err(e) => {
                metrics::record_transaction(operation, "error", elapsed);
                tracing::warn!(operation, error = %e, "Transaction failed");
            }
        }
    }
}

impl std::fmt::Debug for TxExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxExecutor")
            .field("sender", &self.sender())
            .field("confirmations", &self.confirmations)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
