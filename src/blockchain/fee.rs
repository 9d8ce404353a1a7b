//! Native-currency fee transfer that gates owner-signed calls.

use alloy::primitives::utils::{format_ether, parse_ether};
use alloy::primitives::{Address, U256};

use crate::blockchain::transaction::TxExecutor;
use crate::blockchain::types::{BlockchainError, BlockchainResult, TxReceipt};
use crate::config::schema::GasConfig;
use crate::observability::metrics;

/// Sends the configured fee from the operator account.
#[derive(Debug, Clone)]
pub struct FeeTransfer {
    executor: TxExecutor,
    amount: U256,
    gas_limit: u64,
}

impl FeeTransfer {
    /// `executor` must be bound to the operator's signer.
    pub fn new(executor: TxExecutor, gas: &GasConfig) -> BlockchainResult<Self> {
        let amount = parse_ether(&gas.fee_amount_ether)
            .map_err(|e| BlockchainError::Wallet(format!("Invalid fee amount: {}", e)))?;

        Ok(Self {
            executor,
            amount,
            gas_limit: gas.fee_gas_limit,
        })
    }

    /// Pay the fee to `to`.
    ///
    /// A transfer that is mined but reverted counts as a failure.
    pub async fn pay(&self, to: Address) -> BlockchainResult<TxReceipt> {
        let result = self
            .executor
            .transfer(to, self.amount, self.gas_limit)
            .await
            .and_then(|receipt| {
                if receipt.status {
                    Ok(receipt)
                } else {
                    Err(BlockchainError::Reverted(receipt.transaction_hash))
                }
            });

        match result {
            Ok(receipt) => {
                metrics::record_fee_transfer(true);
                tracing::info!(
                    to = %to,
                    amount_ether = %format_ether(self.amount),
                    tx_hash = %receipt.transaction_hash,
                    "Fee transferred"
                );
                Ok(receipt)
            }
            Err(e) => {
                metrics::record_fee_transfer(false);
                tracing::warn!(to = %to, error = %e, "Fee transfer failed");
                Err(BlockchainError::FeeTransfer {
                    to,
                    source: Box::new(e),
                })
            }
        }
    }
}
