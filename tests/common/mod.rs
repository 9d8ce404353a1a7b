//! In-memory chain shared by the integration tests.

use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use land_registry_client::blockchain::{
    BlockchainError, BlockchainResult, ChainBackend, Connector, TxReceipt, Wallet,
};
use land_registry_client::{RegistryClient, RegistryConfig};

/// Anvil account #0, used as the operator.
pub const OPERATOR_KEY: &str = "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
/// Anvil account #1, used as a land owner.
pub const OWNER_KEY: &str = "59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

pub const USER_CONTRACT: &str = "0x5FbDB2315678afecb367f032d93F642f64180aa3";
pub const LAND_CONTRACT: &str = "0xe7f1725E7734CE288F8367e1Bb143E90bb3F0512";
pub const SOME_ADDRESS: &str = "0x70997970C51812dc3A010C7d01b50e0d17dc79C8";

/// One interaction observed by the mock chain.
#[derive(Debug, Clone)]
pub enum Recorded {
    GasPrice,
    Call { to: Option<Address>, selector: Option<[u8; 4]> },
    Send(SentTx),
}

/// A broadcast transaction as the mock saw it.
#[derive(Debug, Clone)]
pub struct SentTx {
    pub from: Option<Address>,
    pub to: Option<Address>,
    pub selector: Option<[u8; 4]>,
    pub input: Bytes,
    pub value: Option<U256>,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
}

#[derive(Default)]
struct State {
    gas_price: u128,
    block: u64,
    revert_calls: bool,
    revert_transfers: bool,
    fail_transfers: bool,
    responses: HashMap<[u8; 4], Bytes>,
    receipts: HashMap<TxHash, TxReceipt>,
    events: Vec<Recorded>,
}

/// Programmable chain that records every request.
#[derive(Default)]
pub struct MockChain {
    state: Mutex<State>,
}

#[allow(dead_code)]
impl MockChain {
    pub fn new(gas_price: u128) -> Arc<Self> {
        let chain = Self::default();
        {
            let mut state = chain.state.lock().unwrap();
            state.gas_price = gas_price;
            state.block = 100;
        }
        Arc::new(chain)
    }

    /// Mine contract calls with a failed status.
    pub fn revert_contract_calls(&self) {
        self.state.lock().unwrap().revert_calls = true;
    }

    /// Mine plain value transfers with a failed status.
    pub fn revert_transfers(&self) {
        self.state.lock().unwrap().revert_transfers = true;
    }

    /// Reject plain value transfers at broadcast.
    pub fn fail_transfers(&self) {
        self.state.lock().unwrap().fail_transfers = true;
    }

    /// Return `data` for every `eth_call` with this selector.
    pub fn respond(&self, selector: [u8; 4], data: Vec<u8>) {
        self.state
            .lock()
            .unwrap()
            .responses
            .insert(selector, Bytes::from(data));
    }

    pub fn events(&self) -> Vec<Recorded> {
        self.state.lock().unwrap().events.clone()
    }

    pub fn sent(&self) -> Vec<SentTx> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Recorded::Send(tx) => Some(tx),
                _ => None,
            })
            .collect()
    }

    pub fn connector(self: &Arc<Self>) -> Arc<dyn Connector> {
        Arc::new(MockConnector {
            chain: self.clone(),
        })
    }
}

fn selector_of(tx: &TransactionRequest) -> Option<[u8; 4]> {
    tx.input
        .input()
        .filter(|data| data.len() >= 4)
        .map(|data| [data[0], data[1], data[2], data[3]])
}

struct MockConnection {
    chain: Arc<MockChain>,
    signer: Option<Address>,
}

#[async_trait]
impl ChainBackend for MockConnection {
    fn signer_address(&self) -> Option<Address> {
        self.signer
    }

    async fn gas_price(&self) -> BlockchainResult<u128> {
        let mut state = self.chain.state.lock().unwrap();
        state.events.push(Recorded::GasPrice);
        Ok(state.gas_price)
    }

    async fn block_number(&self) -> BlockchainResult<u64> {
        Ok(self.chain.state.lock().unwrap().block)
    }

    async fn call(&self, tx: TransactionRequest) -> BlockchainResult<Bytes> {
        let selector = selector_of(&tx);
        let mut state = self.chain.state.lock().unwrap();
        state.events.push(Recorded::Call {
            to: tx.to.and_then(|kind| kind.to().copied()),
            selector,
        });
        selector
            .and_then(|s| state.responses.get(&s).cloned())
            .ok_or_else(|| BlockchainError::Rpc("execution reverted".to_string()))
    }

    async fn send_transaction(&self, tx: TransactionRequest) -> BlockchainResult<TxHash> {
        let Some(from) = self.signer else {
            return Err(BlockchainError::Wallet("Connection has no signer".to_string()));
        };

        let selector = selector_of(&tx);
        let mut state = self.chain.state.lock().unwrap();
        state.events.push(Recorded::Send(SentTx {
            from: Some(from),
            to: tx.to.and_then(|kind| kind.to().copied()),
            selector,
            input: tx.input.input().cloned().unwrap_or_default(),
            value: tx.value,
            gas: tx.gas,
            gas_price: tx.gas_price,
        }));

        let is_transfer = selector.is_none();
        if is_transfer && state.fail_transfers {
            return Err(BlockchainError::Rpc("insufficient funds for transfer".to_string()));
        }

        state.block += 1;
        let tx_hash = TxHash::with_last_byte(state.receipts.len() as u8 + 1);
        let receipt = TxReceipt {
            transaction_hash: tx_hash,
            status: if is_transfer {
                !state.revert_transfers
            } else {
                !state.revert_calls
            },
            block_number: Some(state.block),
            gas_used: 21_000,
        };
        state.receipts.insert(tx_hash, receipt);
        Ok(tx_hash)
    }

    async fn transaction_receipt(&self, tx_hash: TxHash) -> BlockchainResult<Option<TxReceipt>> {
        Ok(self.chain.state.lock().unwrap().receipts.get(&tx_hash).cloned())
    }
}

struct MockConnector {
    chain: Arc<MockChain>,
}

impl Connector for MockConnector {
    fn read_only(&self) -> BlockchainResult<Arc<dyn ChainBackend>> {
        Ok(Arc::new(MockConnection {
            chain: self.chain.clone(),
            signer: None,
        }))
    }

    fn with_signer(&self, wallet: &Wallet) -> BlockchainResult<Arc<dyn ChainBackend>> {
        Ok(Arc::new(MockConnection {
            chain: self.chain.clone(),
            signer: Some(wallet.address()),
        }))
    }
}

pub fn test_config() -> RegistryConfig {
    let mut config = RegistryConfig::default();
    config.contracts.user_registry = USER_CONTRACT.to_string();
    config.contracts.land_registry = LAND_CONTRACT.to_string();
    config.operator.private_key = Some(OPERATOR_KEY.to_string());
    config.chain.receipt_poll_interval_ms = 1;
    config
}

/// Registry client wired to a fresh mock chain.
pub fn client(gas_price: u128) -> (RegistryClient, Arc<MockChain>) {
    let chain = MockChain::new(gas_price);
    let client = RegistryClient::with_connector(test_config(), chain.connector()).unwrap();
    (client, chain)
}

#[allow(dead_code)]
pub fn owner() -> Wallet {
    Wallet::from_private_key(OWNER_KEY).unwrap()
}
