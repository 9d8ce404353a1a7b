//! Chain-specific types and error definitions.

use alloy::primitives::{Address, TxHash, U256};
use alloy::rpc::types::TransactionReceipt;
use serde::Serialize;
use thiserror::Error;

/// Errors that can occur during blockchain operations.
#[derive(Debug, Error)]
pub enum BlockchainError {
    /// Malformed or badly checksummed address argument.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// RPC connection or request failed.
    #[error("RPC error: {0}")]
    Rpc(String),

    /// RPC request timed out.
    #[error("RPC timeout after {0} seconds")]
    Timeout(u64),

    /// Transaction was not confirmed within the configured wait.
    #[error("Transaction {0} not confirmed after {1} seconds")]
    ConfirmationTimeout(TxHash, u64),

    /// Invalid private key format or derivation error.
    #[error("Wallet error: {0}")]
    Wallet(String),

    /// Call data could not be encoded or return data could not be decoded.
    #[error("ABI error: {0}")]
    Abi(String),

    /// A chain integer does not fit the native integer type.
    #[error("Value {0} does not fit in a 64-bit integer")]
    Overflow(U256),

    /// The fee transfer gating an owner-signed call failed.
    #[error("Fee transfer to {to} failed: {source}")]
    FeeTransfer {
        to: Address,
        source: Box<BlockchainError>,
    },

    /// A prerequisite transaction failed or reverted.
    #[error("Prerequisite {operation} failed: {source}")]
    Prerequisite {
        operation: &'static str,
        source: Box<BlockchainError>,
    },

    /// A prerequisite transaction was mined but reverted.
    #[error("Transaction {0} reverted")]
    Reverted(TxHash),
}

/// Result type for blockchain operations.
pub type BlockchainResult<T> = Result<T, BlockchainError>;

/// Outcome of a mined transaction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TxReceipt {
    pub transaction_hash: TxHash,
    /// `true` when the transaction executed successfully.
    pub status: bool,
    pub block_number: Option<u64>,
    pub gas_used: u64,
}

impl From<TransactionReceipt> for TxReceipt {
    fn from(receipt: TransactionReceipt) -> Self {
        Self {
            transaction_hash: receipt.transaction_hash,
            status: receipt.status(),
            block_number: receipt.block_number,
            gas_used: receipt.gas_used,
        }
    }
}

/// How the gas price of a transaction is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GasPricing {
    /// Leave fee fields to the provider's fillers.
    Node,
    /// Legacy gas price equal to the node's current price.
    Current,
    /// Legacy gas price of the node's current price times the configured multiplier.
    Boosted,
}
