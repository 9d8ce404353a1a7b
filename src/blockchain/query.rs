//! Read-only contract calls and result normalization.

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, U256};
use alloy::rpc::types::TransactionRequest;
use alloy::sol_types::SolCall;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::types::{BlockchainError, BlockchainResult};
use crate::observability::metrics;

/// Execute `call` against `contract` and decode its return value.
pub async fn read<C: SolCall>(
    backend: &dyn ChainBackend,
    operation: &'static str,
    contract: Address,
    call: C,
) -> BlockchainResult<C::Return> {
    let tx = TransactionRequest::default()
        .with_to(contract)
        .with_input(call.abi_encode());

    let result = match backend.call(tx).await {
        Ok(data) => C::abi_decode_returns(&data)
            .map_err(|e| BlockchainError::Abi(format!("{}: {}", operation, e))),
        Err(e) => Err(e),
    };

    metrics::record_query(operation, result.is_ok());
    if let Err(e) = &result {
        tracing::warn!(operation, contract = %contract, error = %e, "Contract query failed");
    }
    result
}

/// Convert a chain integer to `u64`, refusing to truncate.
pub fn to_u64(value: U256) -> BlockchainResult<u64> {
    u64::try_from(value).map_err(|_| BlockchainError::Overflow(value))
}
