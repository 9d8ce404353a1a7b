//! User-registry contract proxy.

use alloy::primitives::Address;
use alloy::sol_types::SolCall;
use std::sync::Arc;

use crate::blockchain::client::ChainBackend;
use crate::blockchain::query::{read, to_u64};
use crate::blockchain::transaction::TxExecutor;
use crate::blockchain::types::{BlockchainResult, GasPricing, TxReceipt};
use crate::contracts::abi::IUserRegistry;

/// Typed handle to the deployed user-registry contract.
#[derive(Clone)]
pub struct UserRegistry {
    address: Address,
    reader: Arc<dyn ChainBackend>,
    writer: TxExecutor,
}

impl UserRegistry {
    pub fn new(address: Address, reader: Arc<dyn ChainBackend>, writer: TxExecutor) -> Self {
        Self {
            address,
            reader,
            writer,
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    async fn send<C: SolCall>(
        &self,
        operation: &'static str,
        call: C,
        pricing: GasPricing,
    ) -> BlockchainResult<TxReceipt> {
        self.writer
            .submit(operation, self.address, call.abi_encode().into(), pricing)
            .await
    }

    /// Whitelist an L1 approver, overpaying gas to speed up inclusion.
    pub async fn whitelist_approver_l1(&self, approver: Address) -> BlockchainResult<TxReceipt> {
        self.send(
            "user.whitelistApproverL1",
            IUserRegistry::whitelistApproverL1Call { approver },
            GasPricing::Boosted,
        )
        .await
    }

    pub async fn add_user(&self, approver: Address, account: Address) -> BlockchainResult<TxReceipt> {
        let details = IUserRegistry::UserDetails { approver, account };
        self.send(
            "user.addUser",
            IUserRegistry::addUserCall { details },
            GasPricing::Node,
        )
        .await
    }

    pub async fn add_user_bulk(
        &self,
        approver: Address,
        accounts: Vec<Address>,
    ) -> BlockchainResult<TxReceipt> {
        self.send(
            "user.addUserBulk",
            IUserRegistry::addUserBulk1Call { approver, accounts },
            GasPricing::Node,
        )
        .await
    }

    pub async fn verify_user(&self, account: Address) -> BlockchainResult<bool> {
        read(
            self.reader.as_ref(),
            "user.verifyUser",
            self.address,
            IUserRegistry::verifyUserCall { account },
        )
        .await
    }

    pub async fn all_user_addresses(&self) -> BlockchainResult<Vec<Address>> {
        read(
            self.reader.as_ref(),
            "user.getAllUserAddress",
            self.address,
            IUserRegistry::getAllUserAddressCall {},
        )
        .await
    }

    pub async fn user_count(&self) -> BlockchainResult<u64> {
        let count = read(
            self.reader.as_ref(),
            "user.UserCounts",
            self.address,
            IUserRegistry::UserCountsCall {},
        )
        .await?;
        to_u64(count)
    }

    pub async fn l1_approver_address(&self) -> BlockchainResult<Address> {
        read(
            self.reader.as_ref(),
            "user.L1ApproverAddress",
            self.address,
            IUserRegistry::L1ApproverAddressCall {},
        )
        .await
    }
}

impl std::fmt::Debug for UserRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserRegistry")
            .field("address", &self.address)
            .field("writer", &self.writer)
            .finish()
    }
}
